use serde::{Deserialize, Serialize};

use super::ModelError;

/// Raw vitals and demographics for one assessment.
///
/// `bmi`, `pulse_pressure` and `map` are derived fields: they may be absent on
/// input and are filled in by `risk::calculate_derived_measurements`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalsRecord {
    /// Beats per minute.
    pub heart_rate: f64,
    /// Breaths per minute.
    pub resp_rate: f64,
    /// Degrees Celsius.
    pub body_temp: f64,
    /// Percent.
    pub oxygen_sat: f64,
    /// mmHg.
    pub systolic_bp: f64,
    /// mmHg.
    pub diastolic_bp: f64,
    /// Years.
    pub age: f64,
    /// Categorical code from the entry form (0 = male, 1 = female).
    #[serde(default)]
    pub gender: u8,
    /// Kilograms.
    #[serde(default)]
    pub weight: Option<f64>,
    /// Metres.
    #[serde(default)]
    pub height: Option<f64>,
    /// Unitless heart-rate-variability index.
    pub hrv: f64,
    #[serde(default)]
    pub bmi: Option<f64>,
    #[serde(default)]
    pub pulse_pressure: Option<f64>,
    #[serde(default)]
    pub map: Option<f64>,
}

impl Default for VitalsRecord {
    /// Values pre-filled in the assessment entry form.
    fn default() -> Self {
        Self {
            heart_rate: 60.0,
            resp_rate: 12.0,
            body_temp: 36.0,
            oxygen_sat: 95.0,
            systolic_bp: 110.0,
            diastolic_bp: 70.0,
            age: 18.0,
            gender: 0,
            weight: Some(50.0),
            height: Some(1.5),
            hrv: 0.08,
            bmi: Some(20.3),
            pulse_pressure: Some(30.0),
            map: Some(88.7),
        }
    }
}

impl VitalsRecord {
    /// Reject NaN and infinite measurements.
    ///
    /// Scoring itself never fails: a non-finite value simply fails every
    /// comparison and skips its rule. Callers at the input boundary use this
    /// to refuse such records instead.
    pub fn validate(&self) -> Result<(), ModelError> {
        let required = [
            ("heart_rate", self.heart_rate),
            ("resp_rate", self.resp_rate),
            ("body_temp", self.body_temp),
            ("oxygen_sat", self.oxygen_sat),
            ("systolic_bp", self.systolic_bp),
            ("diastolic_bp", self.diastolic_bp),
            ("age", self.age),
            ("hrv", self.hrv),
        ];
        let optional = [
            ("weight", self.weight),
            ("height", self.height),
            ("bmi", self.bmi),
            ("pulse_pressure", self.pulse_pressure),
            ("map", self.map),
        ];

        let non_finite = required
            .into_iter()
            .chain(
                optional
                    .into_iter()
                    .filter_map(|(field, value)| value.map(|v| (field, v))),
            )
            .find(|(_, value)| !value.is_finite());

        match non_finite {
            Some((field, _)) => Err(ModelError::NonFiniteMeasurement {
                field: field.into(),
            }),
            None => Ok(()),
        }
    }
}
