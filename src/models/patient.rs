use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ModelError;

/// Name used when an assessment is recorded without a patient name.
pub const UNKNOWN_PATIENT_NAME: &str = "Unknown";

/// Identity attached to an assessment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRef {
    pub id: String,
    pub name: String,
}

impl PatientRef {
    /// Trims both fields. The id is mandatory; a blank name becomes "Unknown".
    pub fn new(id: &str, name: &str) -> Result<Self, ModelError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ModelError::MissingPatientId);
        }
        let name = match name.trim() {
            "" => UNKNOWN_PATIENT_NAME,
            trimmed => trimmed,
        };
        Ok(Self {
            id: id.into(),
            name: name.into(),
        })
    }
}

/// Generate a patient identifier of the form `PAT-<6 digits>-<3 digits>`.
pub fn generate_patient_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = rand::thread_rng().gen_range(0..1000);
    format_patient_id(millis, suffix)
}

/// Last six digits of the epoch-millisecond timestamp, then a zero-padded suffix.
fn format_patient_id(epoch_millis: i64, suffix: u16) -> String {
    let stamp = epoch_millis.rem_euclid(1_000_000);
    format!("PAT-{:06}-{:03}", stamp, suffix % 1000)
}
