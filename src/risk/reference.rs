use serde::{Deserialize, Serialize};

/// Inclusive clinically-normal band for one measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalRange {
    pub low: f64,
    pub high: f64,
}

impl NormalRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// NaN is never in range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

/// Reference bands used to flag each displayed vital as normal or not.
/// These are independent of the scoring rule cut-offs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRanges {
    pub heart_rate: NormalRange,
    pub resp_rate: NormalRange,
    pub body_temp: NormalRange,
    pub oxygen_sat: NormalRange,
    pub systolic_bp: NormalRange,
    pub diastolic_bp: NormalRange,
    pub bmi: NormalRange,
}

impl ReferenceRanges {
    /// Standard adult reference bands.
    pub fn standard() -> Self {
        Self {
            heart_rate: NormalRange::new(60.0, 100.0),
            resp_rate: NormalRange::new(12.0, 20.0),
            body_temp: NormalRange::new(36.5, 37.5),
            oxygen_sat: NormalRange::new(95.0, 100.0),
            systolic_bp: NormalRange::new(90.0, 120.0),
            diastolic_bp: NormalRange::new(60.0, 80.0),
            bmi: NormalRange::new(18.5, 24.9),
        }
    }

    /// Blood pressure is normal only when both readings are in band.
    pub fn blood_pressure_normal(&self, systolic: f64, diastolic: f64) -> bool {
        self.systolic_bp.contains(systolic) && self.diastolic_bp.contains(diastolic)
    }
}

impl Default for ReferenceRanges {
    fn default() -> Self {
        Self::standard()
    }
}
