use crate::models::{AssessmentResult, RiskFactor, RiskLevel, VitalsRecord};

use super::actions::generate_suggested_actions;
use super::display::build_vital_displays;
use super::messages::{factor, recommendation};
use super::reference::ReferenceRanges;

/// Upper bound of the risk score.
pub const MAX_RISK_SCORE: u32 = 100;

/// Contribution of one rule: points added and the factor entry it records.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub points: u32,
    pub factor: RiskFactor,
}

impl RuleOutcome {
    fn hit(points: u32, name: &str) -> Self {
        Self {
            points,
            factor: RiskFactor::present(name),
        }
    }

    fn miss(name: &str) -> Self {
        Self {
            points: 0,
            factor: RiskFactor::absent(name),
        }
    }
}

pub fn score_age(age: f64) -> RuleOutcome {
    if age > 65.0 {
        RuleOutcome::hit(20, factor::ADVANCED_AGE)
    } else if age > 50.0 {
        RuleOutcome::hit(10, factor::INCREASED_AGE)
    } else {
        RuleOutcome::miss(factor::ADVANCED_AGE)
    }
}

pub fn score_high_blood_pressure(systolic: f64, diastolic: f64) -> RuleOutcome {
    if systolic > 140.0 || diastolic > 90.0 {
        RuleOutcome::hit(15, factor::HIGH_BLOOD_PRESSURE)
    } else {
        RuleOutcome::miss(factor::HIGH_BLOOD_PRESSURE)
    }
}

pub fn score_low_blood_pressure(systolic: f64, diastolic: f64) -> RuleOutcome {
    if systolic < 90.0 || diastolic < 60.0 {
        RuleOutcome::hit(15, factor::LOW_BLOOD_PRESSURE)
    } else {
        RuleOutcome::miss(factor::LOW_BLOOD_PRESSURE)
    }
}

pub fn score_heart_rate(heart_rate: f64) -> RuleOutcome {
    if heart_rate > 100.0 {
        RuleOutcome::hit(15, factor::ELEVATED_HEART_RATE)
    } else if heart_rate < 60.0 {
        RuleOutcome::hit(10, factor::LOW_HEART_RATE)
    } else {
        RuleOutcome::miss(factor::ABNORMAL_HEART_RATE)
    }
}

pub fn score_resp_rate(resp_rate: f64) -> RuleOutcome {
    if resp_rate > 20.0 {
        RuleOutcome::hit(10, factor::HIGH_RESPIRATORY_RATE)
    } else if resp_rate < 12.0 {
        RuleOutcome::hit(15, factor::LOW_RESPIRATORY_RATE)
    } else {
        RuleOutcome::miss(factor::ABNORMAL_RESPIRATORY_RATE)
    }
}

pub fn score_oxygen_sat(oxygen_sat: f64) -> RuleOutcome {
    if oxygen_sat < 95.0 {
        RuleOutcome::hit(20, factor::LOW_OXYGEN_SATURATION)
    } else if oxygen_sat < 98.0 {
        RuleOutcome::hit(5, factor::BORDERLINE_OXYGEN_SATURATION)
    } else {
        RuleOutcome::miss(factor::LOW_OXYGEN_SATURATION)
    }
}

pub fn score_body_temp(body_temp: f64) -> RuleOutcome {
    if body_temp > 38.0 {
        RuleOutcome::hit(15, factor::FEVER)
    } else if body_temp < 36.0 {
        RuleOutcome::hit(15, factor::HYPOTHERMIA)
    } else {
        RuleOutcome::miss(factor::ABNORMAL_TEMPERATURE)
    }
}

/// An absent BMI fails both comparisons and records the "absent" entry.
pub fn score_bmi(bmi: Option<f64>) -> RuleOutcome {
    match bmi {
        Some(bmi) if bmi > 30.0 => RuleOutcome::hit(10, factor::OBESITY),
        Some(bmi) if bmi < 18.5 => RuleOutcome::hit(10, factor::UNDERWEIGHT),
        _ => RuleOutcome::miss(factor::ABNORMAL_BMI),
    }
}

pub fn score_hrv(hrv: f64) -> RuleOutcome {
    if hrv < 0.05 {
        RuleOutcome::hit(10, factor::LOW_HRV)
    } else {
        RuleOutcome::miss(factor::LOW_HRV)
    }
}

/// Evaluate every rule in fixed order. Returns the clamped score and the full
/// factor ledger (one entry per rule, present or not).
pub fn evaluate_factors(vitals: &VitalsRecord) -> (u8, Vec<RiskFactor>) {
    let outcomes = [
        score_age(vitals.age),
        score_high_blood_pressure(vitals.systolic_bp, vitals.diastolic_bp),
        score_low_blood_pressure(vitals.systolic_bp, vitals.diastolic_bp),
        score_heart_rate(vitals.heart_rate),
        score_resp_rate(vitals.resp_rate),
        score_oxygen_sat(vitals.oxygen_sat),
        score_body_temp(vitals.body_temp),
        score_bmi(vitals.bmi),
        score_hrv(vitals.hrv),
    ];

    let raw: u32 = outcomes.iter().map(|o| o.points).sum();
    let score = raw.min(MAX_RISK_SCORE) as u8;
    let factors = outcomes.into_iter().map(|o| o.factor).collect();

    (score, factors)
}

/// Score a vitals record against the standard reference bands.
///
/// The record is scored as given; derived measurements are not recomputed
/// here (see `calculate_derived_measurements`).
pub fn calculate_risk_score(vitals: &VitalsRecord) -> AssessmentResult {
    score_with_reference(vitals, &ReferenceRanges::standard())
}

pub fn score_with_reference(vitals: &VitalsRecord, reference: &ReferenceRanges) -> AssessmentResult {
    let (risk_score, factors) = evaluate_factors(vitals);
    let risk_level = RiskLevel::from_score(risk_score);
    let suggested_actions = generate_suggested_actions(risk_score, &factors);

    AssessmentResult {
        risk_score,
        risk_level,
        recommendation: recommendation(risk_level).to_string(),
        risk_factors: factors.into_iter().filter(|f| f.value).collect(),
        vitals: build_vital_displays(vitals, reference),
        suggested_actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy() -> VitalsRecord {
        VitalsRecord {
            heart_rate: 70.0,
            resp_rate: 15.0,
            body_temp: 37.0,
            oxygen_sat: 99.0,
            systolic_bp: 110.0,
            diastolic_bp: 70.0,
            age: 30.0,
            gender: 0,
            weight: None,
            height: None,
            hrv: 0.1,
            bmi: Some(22.0),
            pulse_pressure: None,
            map: None,
        }
    }

    fn critical() -> VitalsRecord {
        VitalsRecord {
            heart_rate: 110.0,
            resp_rate: 22.0,
            body_temp: 39.0,
            oxygen_sat: 92.0,
            systolic_bp: 150.0,
            diastolic_bp: 95.0,
            age: 70.0,
            hrv: 0.03,
            bmi: Some(32.0),
            ..healthy()
        }
    }

    fn names(result: &AssessmentResult) -> Vec<&str> {
        result.risk_factors.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn critical_patient_clamps_to_max() {
        let result = calculate_risk_score(&critical());
        assert_eq!(result.risk_score, 100);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(
            names(&result),
            vec![
                "Advanced Age",
                "High Blood Pressure",
                "Elevated Heart Rate",
                "High Respiratory Rate",
                "Low Oxygen Saturation",
                "Fever",
                "Obesity",
                "Low Heart Rate Variability",
            ]
        );
    }

    #[test]
    fn healthy_patient_scores_zero() {
        let result = calculate_risk_score(&healthy());
        assert_eq!(result.risk_score, 0);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert!(result.risk_factors.is_empty());
        assert_eq!(result.suggested_actions.len(), 1);
        assert_eq!(result.suggested_actions[0].text, "Monitor vitals regularly");
        assert_eq!(result.recommendation, recommendation(RiskLevel::Low));
    }

    #[test]
    fn ledger_has_one_entry_per_rule() {
        let (_, factors) = evaluate_factors(&healthy());
        assert_eq!(factors.len(), 9);
        assert!(factors.iter().all(|f| !f.value));
    }

    #[test]
    fn absent_labels_are_kept_verbatim() {
        let (_, factors) = evaluate_factors(&healthy());
        let labels: Vec<&str> = factors.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Advanced Age",
                "High Blood Pressure",
                "Low Blood Pressure",
                "Abnormal Heart Rate",
                "Abnormal Respiratory Rate",
                "Low Oxygen Saturation",
                "Abnormal Temperature",
                "Abnormal BMI",
                "Low Heart Rate Variability",
            ]
        );
    }

    #[test]
    fn age_bands() {
        assert_eq!(score_age(66.0).points, 20);
        assert_eq!(score_age(65.0).points, 10);
        assert_eq!(score_age(65.0).factor.name, "Increased Age");
        assert_eq!(score_age(51.0).points, 10);
        assert_eq!(score_age(50.0), RuleOutcome::miss("Advanced Age"));
    }

    #[test]
    fn blood_pressure_can_be_high_and_low_at_once() {
        let v = VitalsRecord {
            systolic_bp: 150.0,
            diastolic_bp: 55.0,
            ..healthy()
        };
        let result = calculate_risk_score(&v);
        assert_eq!(result.risk_score, 30);
        assert!(names(&result).contains(&"High Blood Pressure"));
        assert!(names(&result).contains(&"Low Blood Pressure"));
    }

    #[test]
    fn heart_rate_bands() {
        assert_eq!(score_heart_rate(101.0).points, 15);
        assert_eq!(score_heart_rate(100.0).points, 0);
        assert_eq!(score_heart_rate(59.0), RuleOutcome::hit(10, "Low Heart Rate"));
        assert_eq!(score_heart_rate(60.0).factor.name, "Abnormal Heart Rate");
    }

    #[test]
    fn resp_rate_bands() {
        assert_eq!(score_resp_rate(21.0).points, 10);
        assert_eq!(score_resp_rate(11.0).points, 15);
        assert_eq!(score_resp_rate(12.0).points, 0);
        assert_eq!(score_resp_rate(20.0).points, 0);
    }

    #[test]
    fn oxygen_bands() {
        assert_eq!(score_oxygen_sat(94.9).points, 20);
        assert_eq!(
            score_oxygen_sat(95.0),
            RuleOutcome::hit(5, "Borderline Oxygen Saturation")
        );
        assert_eq!(score_oxygen_sat(97.9).points, 5);
        assert_eq!(score_oxygen_sat(98.0), RuleOutcome::miss("Low Oxygen Saturation"));
    }

    #[test]
    fn temperature_bands() {
        assert_eq!(score_body_temp(38.1).factor.name, "Fever");
        assert_eq!(score_body_temp(38.0).points, 0);
        assert_eq!(score_body_temp(35.9).factor.name, "Hypothermia");
        assert_eq!(score_body_temp(36.0).points, 0);
    }

    #[test]
    fn bmi_bands() {
        assert_eq!(score_bmi(Some(30.1)).factor.name, "Obesity");
        assert_eq!(score_bmi(Some(30.0)).points, 0);
        assert_eq!(score_bmi(Some(18.4)).factor.name, "Underweight");
        assert_eq!(score_bmi(None), RuleOutcome::miss("Abnormal BMI"));
    }

    #[test]
    fn hrv_threshold() {
        assert_eq!(score_hrv(0.049).points, 10);
        assert_eq!(score_hrv(0.05).points, 0);
    }

    #[test]
    fn nan_measurement_skips_rule() {
        let v = VitalsRecord {
            heart_rate: f64::NAN,
            ..healthy()
        };
        let result = calculate_risk_score(&v);
        assert_eq!(result.risk_score, 0);
    }

    #[test]
    fn medium_band_example() {
        // age 55 (+10), borderline SpO2 (+5), low HRV (+10) = 25
        let v = VitalsRecord {
            age: 55.0,
            oxygen_sat: 96.0,
            hrv: 0.02,
            ..healthy()
        };
        let result = calculate_risk_score(&v);
        assert_eq!(result.risk_score, 25);
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.suggested_actions[1].text, "Schedule follow-up");
    }

    #[test]
    fn only_present_factors_are_returned() {
        for v in [healthy(), critical(), VitalsRecord::default()] {
            let result = calculate_risk_score(&v);
            assert!(result.risk_factors.iter().all(|f| f.value));
            assert!(result.risk_score <= 100);
            assert_eq!(result.risk_level, RiskLevel::from_score(result.risk_score));
            assert!(result.suggested_actions.len() <= 5);
        }
    }

    #[test]
    fn score_is_deterministic() {
        assert_eq!(calculate_risk_score(&critical()), calculate_risk_score(&critical()));
    }

    #[test]
    fn score_stays_in_range_for_extreme_inputs() {
        let extremes = [
            f64::NAN,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::MAX,
            -f64::MAX,
            -1.0,
            -0.0,
            0.0,
        ];
        for value in extremes {
            let v = VitalsRecord {
                heart_rate: value,
                resp_rate: value,
                body_temp: value,
                oxygen_sat: value,
                systolic_bp: value,
                diastolic_bp: value,
                age: value,
                hrv: value,
                bmi: Some(value),
                ..healthy()
            };
            let result = calculate_risk_score(&v);
            assert!(result.risk_score <= 100, "value {value}");
            assert_eq!(result.risk_level, RiskLevel::from_score(result.risk_score));
            assert_eq!(result.vitals.len(), 6);
            assert!(result.suggested_actions.len() <= 5);
        }

        let all_abnormal = calculate_risk_score(&VitalsRecord {
            systolic_bp: 150.0,
            diastolic_bp: 55.0,
            bmi: Some(45.0),
            ..critical()
        });
        assert_eq!(all_abnormal.risk_score, 100);

        let all_nan = calculate_risk_score(&VitalsRecord {
            heart_rate: f64::NAN,
            resp_rate: f64::NAN,
            body_temp: f64::NAN,
            oxygen_sat: f64::NAN,
            systolic_bp: f64::NAN,
            diastolic_bp: f64::NAN,
            age: f64::NAN,
            hrv: f64::NAN,
            bmi: Some(f64::NAN),
            ..healthy()
        });
        assert_eq!(all_nan.risk_score, 0);
        assert!(all_nan.risk_factors.is_empty());
    }
}
