use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::TimeRange;

/// Narrowing applied before any aggregate is computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    pub time_range: Option<TimeRange>,
    /// Exact patient id match.
    pub patient_id: Option<String>,
    /// Case-insensitive substring over patient name or id.
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl RiskDistribution {
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

/// Mean vitals across records, each rounded to a whole number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AverageVitals {
    pub heart_rate: i64,
    pub resp_rate: i64,
    pub oxygen_sat: i64,
}

/// One point of the risk-over-time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub timestamp: DateTime<Utc>,
    /// First token of the patient name.
    pub name: String,
    pub risk_score: u8,
    pub patient_id: String,
}

/// Percentage change of all-time counts relative to the last month's counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPercentages {
    pub total: i64,
    pub low_risk: i64,
    pub medium_risk: i64,
    pub high_risk: i64,
}

/// Dashboard headline numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskStatistics {
    /// Distinct patient ids.
    pub total_patients: usize,
    pub total_assessments: usize,
    pub low_risk: usize,
    pub medium_risk: usize,
    pub high_risk: usize,
    pub trend: TrendPercentages,
}

/// Everything the analytics view shows for one filtered record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub record_count: usize,
    pub statistics: RiskStatistics,
    pub distribution: RiskDistribution,
    pub average_risk_score: i64,
    pub high_risk_percentage: i64,
    pub average_vitals: AverageVitals,
    pub risk_trend: Vec<TrendPoint>,
}
