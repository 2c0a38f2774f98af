use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::RiskLevel;
use super::patient::PatientRef;
use super::vitals::VitalsRecord;

/// One evaluated scoring rule. `value == true` means the factor is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    pub value: bool,
}

impl RiskFactor {
    pub fn present(name: &str) -> Self {
        Self {
            name: name.into(),
            value: true,
        }
    }

    pub fn absent(name: &str) -> Self {
        Self {
            name: name.into(),
            value: false,
        }
    }
}

/// A vital channel formatted for display, flagged against its reference band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalDisplay {
    pub name: String,
    pub value: String,
    pub normal: bool,
}

/// A follow-up suggestion. `icon` is a symbolic tag, not an asset path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedAction {
    pub icon: String,
    pub text: String,
}

/// Output of one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub recommendation: String,
    /// Only the factors that are present.
    pub risk_factors: Vec<RiskFactor>,
    pub vitals: Vec<VitalDisplay>,
    pub suggested_actions: Vec<SuggestedAction>,
}

/// A scored assessment together with the vitals that were actually scored
/// (i.e. after derived measurements were merged in).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub vitals: VitalsRecord,
    pub result: AssessmentResult,
}

/// Historical assessment entry as kept by the surrounding application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub patient_id: String,
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub vitals: VitalsRecord,
}

impl AssessmentRecord {
    /// Build a record stamped with the current time.
    pub fn new(patient: PatientRef, assessment: &Assessment) -> Self {
        Self::with_timestamp(patient, assessment, Utc::now())
    }

    pub fn with_timestamp(
        patient: PatientRef,
        assessment: &Assessment,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id: patient.id,
            name: patient.name,
            timestamp,
            risk_score: assessment.result.risk_score,
            risk_level: assessment.result.risk_level,
            vitals: assessment.vitals.clone(),
        }
    }

    /// Level recomputed from the stored score; stored labels are not trusted.
    pub fn level_from_score(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk_score)
    }
}
