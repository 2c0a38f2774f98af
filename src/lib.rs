pub mod analytics; // Aggregates over assessment history
pub mod cli;
pub mod config;
pub mod models;
pub mod risk; // Derived measurements, scoring, suggested actions

use tracing_subscriber::EnvFilter;

pub use models::{AssessmentResult, VitalsRecord};
pub use risk::{calculate_derived_measurements, calculate_risk_score};

/// Install the global tracing subscriber. Logs go to stderr so that JSON
/// written to stdout stays machine-readable. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .try_init();

    tracing::debug!("{} v{} logging initialised", config::APP_NAME, config::APP_VERSION);
}
