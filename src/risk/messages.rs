//! Fixed vocabulary: factor labels, recommendation texts and action templates.
//!
//! Factor labels are part of the result contract. Some categories reuse a
//! label for their "absent" entry that differs from both "present" labels
//! (e.g. "Abnormal Heart Rate"); these are kept verbatim.

use crate::models::{RiskLevel, SuggestedAction};

pub mod factor {
    pub const ADVANCED_AGE: &str = "Advanced Age";
    pub const INCREASED_AGE: &str = "Increased Age";
    pub const HIGH_BLOOD_PRESSURE: &str = "High Blood Pressure";
    pub const LOW_BLOOD_PRESSURE: &str = "Low Blood Pressure";
    pub const ELEVATED_HEART_RATE: &str = "Elevated Heart Rate";
    pub const LOW_HEART_RATE: &str = "Low Heart Rate";
    pub const ABNORMAL_HEART_RATE: &str = "Abnormal Heart Rate";
    pub const HIGH_RESPIRATORY_RATE: &str = "High Respiratory Rate";
    pub const LOW_RESPIRATORY_RATE: &str = "Low Respiratory Rate";
    pub const ABNORMAL_RESPIRATORY_RATE: &str = "Abnormal Respiratory Rate";
    pub const LOW_OXYGEN_SATURATION: &str = "Low Oxygen Saturation";
    pub const BORDERLINE_OXYGEN_SATURATION: &str = "Borderline Oxygen Saturation";
    pub const FEVER: &str = "Fever";
    pub const HYPOTHERMIA: &str = "Hypothermia";
    pub const ABNORMAL_TEMPERATURE: &str = "Abnormal Temperature";
    pub const OBESITY: &str = "Obesity";
    pub const UNDERWEIGHT: &str = "Underweight";
    pub const ABNORMAL_BMI: &str = "Abnormal BMI";
    pub const LOW_HRV: &str = "Low Heart Rate Variability";
}

/// Recommendation text shown with each risk level.
pub fn recommendation(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => {
            "This patient is showing low risk. Regular follow-up recommended as per standard protocols."
        }
        RiskLevel::Medium => {
            "This patient is showing moderate risk. Consider scheduling a follow-up within the next week to monitor their condition."
        }
        RiskLevel::High => {
            "This patient is showing signs of elevated risk. Consider immediate clinical review and potential interventions based on their vital signs."
        }
    }
}

/// (icon, text) pairs for every suggested action, in priority order.
pub struct ActionTemplates;

impl ActionTemplates {
    pub const MONITOR_VITALS: (&'static str, &'static str) =
        ("graph-up", "Monitor vitals regularly");
    pub const SCHEDULE_FOLLOW_UP: (&'static str, &'static str) =
        ("clipboard-plus", "Schedule follow-up");
    pub const REVIEW_MEDICATION: (&'static str, &'static str) =
        ("journal-medical", "Review medication");
    pub const HOSPITAL_ADMISSION: (&'static str, &'static str) =
        ("hospital", "Consider hospital admission");
    pub const BLOOD_PRESSURE_MANAGEMENT: (&'static str, &'static str) =
        ("heart-pulse", "Blood pressure management");
    pub const RESPIRATORY_ASSESSMENT: (&'static str, &'static str) =
        ("lungs", "Respiratory assessment");
    pub const NUTRITION_CONSULTATION: (&'static str, &'static str) =
        ("universal-access", "Nutrition consultation");

    pub fn build(template: (&str, &str)) -> SuggestedAction {
        let (icon, text) = template;
        SuggestedAction {
            icon: icon.into(),
            text: text.into(),
        }
    }
}
