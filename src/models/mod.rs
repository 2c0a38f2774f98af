//! Shared data types: vitals input, assessment output, history records.

pub mod assessment;
pub mod enums;
pub mod patient;
pub mod vitals;

use thiserror::Error;

pub use assessment::{
    Assessment, AssessmentRecord, AssessmentResult, RiskFactor, SuggestedAction, VitalDisplay,
};
pub use enums::{RiskLevel, SortDirection, SortKey, TimeRange};
pub use patient::{generate_patient_id, PatientRef};
pub use vitals::VitalsRecord;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Measurement {field} is not a finite number")]
    NonFiniteMeasurement { field: String },

    #[error("Patient ID is required")]
    MissingPatientId,
}
