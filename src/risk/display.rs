use crate::models::{VitalDisplay, VitalsRecord};

use super::reference::ReferenceRanges;

/// Shown for BMI when neither an entered nor a derived value exists.
pub const MISSING_VALUE: &str = "N/A";

/// The six display channels, each flagged against its reference band.
pub fn build_vital_displays(vitals: &VitalsRecord, reference: &ReferenceRanges) -> Vec<VitalDisplay> {
    let bmi_channel = match vitals.bmi {
        Some(bmi) => channel("BMI", format!("{:.1}", plain(bmi)), reference.bmi.contains(bmi)),
        None => channel("BMI", MISSING_VALUE.to_string(), false),
    };

    vec![
        channel(
            "Heart Rate",
            format!("{} BPM", plain(vitals.heart_rate)),
            reference.heart_rate.contains(vitals.heart_rate),
        ),
        channel(
            "Respiratory Rate",
            format!("{} breaths/min", plain(vitals.resp_rate)),
            reference.resp_rate.contains(vitals.resp_rate),
        ),
        channel(
            "Body Temperature",
            format!("{}°C", plain(vitals.body_temp)),
            reference.body_temp.contains(vitals.body_temp),
        ),
        channel(
            "Oxygen Saturation",
            format!("{}%", plain(vitals.oxygen_sat)),
            reference.oxygen_sat.contains(vitals.oxygen_sat),
        ),
        channel(
            "Blood Pressure",
            format!("{}/{} mmHg", plain(vitals.systolic_bp), plain(vitals.diastolic_bp)),
            reference.blood_pressure_normal(vitals.systolic_bp, vitals.diastolic_bp),
        ),
        bmi_channel,
    ]
}

/// Negative zero prints as "0".
fn plain(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

fn channel(name: &str, value: String, normal: bool) -> VitalDisplay {
    VitalDisplay {
        name: name.into(),
        value,
        normal,
    }
}
