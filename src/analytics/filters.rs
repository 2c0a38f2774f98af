use chrono::{DateTime, Duration, Months, Utc};

use crate::models::{AssessmentRecord, SortDirection, SortKey, TimeRange};

use super::types::RecordFilter;

/// Inclusive lower bound for a time range, or `None` for all time.
pub fn range_start(range: TimeRange, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    match range {
        TimeRange::All => None,
        TimeRange::Week => Some(now - Duration::days(7)),
        TimeRange::Month => now.checked_sub_months(Months::new(1)),
        TimeRange::Quarter => now.checked_sub_months(Months::new(3)),
    }
}

/// Apply time range, patient and free-text filters. Order is preserved.
pub fn filter_records(
    records: &[AssessmentRecord],
    filter: &RecordFilter,
    now: DateTime<Utc>,
) -> Vec<AssessmentRecord> {
    let since = filter.time_range.and_then(|range| range_start(range, now));
    let needle = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    records
        .iter()
        .filter(|r| since.map_or(true, |since| r.timestamp >= since))
        .filter(|r| {
            filter
                .patient_id
                .as_deref()
                .map_or(true, |id| r.patient_id == id)
        })
        .filter(|r| {
            needle.as_deref().map_or(true, |needle| {
                r.name.to_lowercase().contains(needle)
                    || r.patient_id.to_lowercase().contains(needle)
            })
        })
        .cloned()
        .collect()
}

/// Stable in-place sort. Risk level sorts by severity, derived from the score.
pub fn sort_records(records: &mut [AssessmentRecord], key: SortKey, direction: SortDirection) {
    records.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::PatientId => a.patient_id.cmp(&b.patient_id),
            SortKey::Timestamp => a.timestamp.cmp(&b.timestamp),
            SortKey::RiskScore => a.risk_score.cmp(&b.risk_score),
            SortKey::RiskLevel => a.level_from_score().cmp(&b.level_from_score()),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Most recent first, at most `limit` records.
pub fn latest_assessments(records: &[AssessmentRecord], limit: usize) -> Vec<AssessmentRecord> {
    let mut sorted = records.to_vec();
    sort_records(&mut sorted, SortKey::Timestamp, SortDirection::Desc);
    sorted.truncate(limit);
    sorted
}

/// All records of one patient, most recent first.
pub fn patient_assessments(records: &[AssessmentRecord], patient_id: &str) -> Vec<AssessmentRecord> {
    let mut matching: Vec<AssessmentRecord> = records
        .iter()
        .filter(|r| r.patient_id == patient_id)
        .cloned()
        .collect();
    sort_records(&mut matching, SortKey::Timestamp, SortDirection::Desc);
    matching
}
