use crate::models::VitalsRecord;

/// Round to one decimal place using the exact binary value of `value`.
///
/// 18.45 is stored as 18.4499.. and rounds down. Exact midpoints such as
/// 18.25 round away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // A midpoint is t/20 with t odd; it is representable only when 5 divides t.
    let twentieths = (value * 20.0).round();
    let is_midpoint =
        twentieths % 2.0 != 0.0 && twentieths % 5.0 == 0.0 && twentieths / 20.0 == value;
    if is_midpoint {
        return (twentieths + twentieths.signum()) / 20.0;
    }

    // `{:.1}` rounds the exact decimal expansion, which never sits on a tie here.
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Recompute BMI, pulse pressure and mean arterial pressure.
///
/// Each derived field is overwritten only when its inputs are present and
/// non-zero; otherwise the existing value is left as is. Weight and height
/// must also be positive, so a zero or negative height never divides.
pub fn calculate_derived_measurements(vitals: &VitalsRecord) -> VitalsRecord {
    let mut updated = vitals.clone();

    if let (Some(weight), Some(height)) = (vitals.weight, vitals.height) {
        if weight > 0.0 && height > 0.0 {
            updated.bmi = Some(round_one_decimal(weight / (height * height)));
        }
    }

    let systolic = vitals.systolic_bp;
    let diastolic = vitals.diastolic_bp;
    if is_set(systolic) && is_set(diastolic) {
        updated.pulse_pressure = Some(systolic - diastolic);
        updated.map = Some(round_one_decimal((2.0 * diastolic + systolic) / 3.0));
    }

    updated
}

/// A reading counts as entered when it is a non-zero number.
fn is_set(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}
