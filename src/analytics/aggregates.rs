use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::models::{AssessmentRecord, RiskLevel, SortDirection, SortKey, TimeRange};

use super::filters::{range_start, sort_records};
use super::types::{
    AverageVitals, RiskDistribution, RiskStatistics, TrendPercentages, TrendPoint,
};

/// Round half up, matching how the dashboard rounds its percentages.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Count records per level. Levels come from the score, not the stored label.
pub fn risk_distribution(records: &[AssessmentRecord]) -> RiskDistribution {
    records
        .iter()
        .fold(RiskDistribution::default(), |mut acc, r| {
            match r.level_from_score() {
                RiskLevel::Low => acc.low += 1,
                RiskLevel::Medium => acc.medium += 1,
                RiskLevel::High => acc.high += 1,
            }
            acc
        })
}

/// Rounded mean score; 0 for no records.
pub fn average_risk_score(records: &[AssessmentRecord]) -> i64 {
    if records.is_empty() {
        return 0;
    }
    let sum: f64 = records.iter().map(|r| f64::from(r.risk_score)).sum();
    round_half_up(sum / records.len() as f64)
}

/// Share of high-risk records as a rounded percentage; 0 for no records.
pub fn high_risk_percentage(records: &[AssessmentRecord]) -> i64 {
    if records.is_empty() {
        return 0;
    }
    let high = records
        .iter()
        .filter(|r| r.level_from_score() == RiskLevel::High)
        .count();
    round_half_up(high as f64 / records.len() as f64 * 100.0)
}

pub fn average_vitals(records: &[AssessmentRecord]) -> AverageVitals {
    if records.is_empty() {
        return AverageVitals::default();
    }
    let n = records.len() as f64;
    let (hr, rr, spo2) = records.iter().fold((0.0, 0.0, 0.0), |(hr, rr, spo2), r| {
        (
            hr + r.vitals.heart_rate,
            rr + r.vitals.resp_rate,
            spo2 + r.vitals.oxygen_sat,
        )
    });
    AverageVitals {
        heart_rate: round_half_up(hr / n),
        resp_rate: round_half_up(rr / n),
        oxygen_sat: round_half_up(spo2 / n),
    }
}

/// Risk scores in chronological order.
pub fn risk_trend(records: &[AssessmentRecord]) -> Vec<TrendPoint> {
    let mut sorted = records.to_vec();
    sort_records(&mut sorted, SortKey::Timestamp, SortDirection::Asc);
    sorted
        .into_iter()
        .map(|r| TrendPoint {
            timestamp: r.timestamp,
            name: r.name.split_whitespace().next().unwrap_or_default().to_string(),
            risk_score: r.risk_score,
            patient_id: r.patient_id,
        })
        .collect()
}

/// Percent change from `previous` to `current`; 0 when there is no baseline.
fn percent_change(current: usize, previous: usize) -> i64 {
    if previous == 0 {
        return 0;
    }
    round_half_up((current as f64 - previous as f64) / previous as f64 * 100.0)
}

/// Headline counts plus the change of each count relative to the records of
/// the last calendar month.
pub fn compute_statistics(records: &[AssessmentRecord], now: DateTime<Utc>) -> RiskStatistics {
    let all = risk_distribution(records);
    let total_patients = records
        .iter()
        .map(|r| r.patient_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let since = range_start(TimeRange::Month, now);
    let recent: Vec<AssessmentRecord> = records
        .iter()
        .filter(|r| since.map_or(true, |since| r.timestamp >= since))
        .cloned()
        .collect();
    let last_month = risk_distribution(&recent);

    let trend = if recent.is_empty() {
        TrendPercentages::default()
    } else {
        TrendPercentages {
            total: percent_change(records.len(), recent.len()),
            low_risk: percent_change(all.low, last_month.low),
            medium_risk: percent_change(all.medium, last_month.medium),
            high_risk: percent_change(all.high, last_month.high),
        }
    };

    tracing::debug!(
        assessments = records.len(),
        patients = total_patients,
        last_month = recent.len(),
        "Computed risk statistics"
    );

    RiskStatistics {
        total_patients,
        total_assessments: all.total(),
        low_risk: all.low,
        medium_risk: all.medium,
        high_risk: all.high,
        trend,
    }
}
