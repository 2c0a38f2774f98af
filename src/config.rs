/// Application-level constants
pub const APP_NAME: &str = "vitalrisk";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when `RUST_LOG` is unset: informational output from this
/// crate, warnings from everything else.
pub fn default_log_filter() -> String {
    format!("warn,vitalrisk_lib=info,{APP_NAME}=info")
}

/// Number of latest assessments returned when no explicit limit is given.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;
