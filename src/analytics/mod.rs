//! Aggregates over historical assessment records.
//!
//! All functions take the record set and the reference time explicitly; none
//! of them read the clock or touch storage.

pub mod aggregates;
pub mod filters;
pub mod types;

use chrono::{DateTime, Utc};

use crate::models::AssessmentRecord;

pub use aggregates::{
    average_risk_score, average_vitals, compute_statistics, high_risk_percentage,
    risk_distribution, risk_trend,
};
pub use filters::{filter_records, latest_assessments, patient_assessments, sort_records};
pub use types::{
    AnalyticsSummary, AverageVitals, RecordFilter, RiskDistribution, RiskStatistics,
    TrendPercentages, TrendPoint,
};

/// Filter the records, then compute every aggregate on the filtered set.
pub fn summarize(
    records: &[AssessmentRecord],
    filter: &RecordFilter,
    now: DateTime<Utc>,
) -> AnalyticsSummary {
    let filtered = filter_records(records, filter, now);

    tracing::info!(
        total = records.len(),
        filtered = filtered.len(),
        "Summarizing assessment records"
    );

    AnalyticsSummary {
        record_count: filtered.len(),
        statistics: compute_statistics(&filtered, now),
        distribution: risk_distribution(&filtered),
        average_risk_score: average_risk_score(&filtered),
        high_risk_percentage: high_risk_percentage(&filtered),
        average_vitals: average_vitals(&filtered),
        risk_trend: risk_trend(&filtered),
    }
}
