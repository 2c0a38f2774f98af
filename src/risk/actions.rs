use crate::models::{RiskFactor, SuggestedAction};

use super::messages::{factor, ActionTemplates};

/// At most this many actions are suggested.
pub const MAX_SUGGESTED_ACTIONS: usize = 5;

const FOLLOW_UP_MIN_SCORE: u8 = 25;
const MEDICATION_REVIEW_MIN_SCORE: u8 = 50;
const ADMISSION_MIN_SCORE: u8 = 75;

/// Build suggested actions from the score and the full factor ledger.
///
/// Score-tier actions come first, then factor-specific ones. Anything past
/// the fifth action is dropped.
pub fn generate_suggested_actions(risk_score: u8, factors: &[RiskFactor]) -> Vec<SuggestedAction> {
    let has_bp_issue = any_present(factors, |name| name.contains("Blood Pressure"));
    let has_oxygen_issue = any_present(factors, |name| name.contains("Oxygen"));
    let has_bmi_issue = any_present(factors, |name| {
        name == factor::OBESITY || name == factor::UNDERWEIGHT
    });

    let candidates = [
        (true, ActionTemplates::MONITOR_VITALS),
        (risk_score >= FOLLOW_UP_MIN_SCORE, ActionTemplates::SCHEDULE_FOLLOW_UP),
        (risk_score >= MEDICATION_REVIEW_MIN_SCORE, ActionTemplates::REVIEW_MEDICATION),
        (risk_score >= ADMISSION_MIN_SCORE, ActionTemplates::HOSPITAL_ADMISSION),
        (has_bp_issue, ActionTemplates::BLOOD_PRESSURE_MANAGEMENT),
        (has_oxygen_issue, ActionTemplates::RESPIRATORY_ASSESSMENT),
        (has_bmi_issue, ActionTemplates::NUTRITION_CONSULTATION),
    ];

    candidates
        .into_iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, template)| ActionTemplates::build(template))
        .take(MAX_SUGGESTED_ACTIONS)
        .collect()
}

fn any_present(factors: &[RiskFactor], matches: impl Fn(&str) -> bool) -> bool {
    factors.iter().any(|f| f.value && matches(&f.name))
}
