use std::time::Instant;

use crate::models::{Assessment, AssessmentResult, VitalsRecord};

use super::derived::calculate_derived_measurements;
use super::reference::ReferenceRanges;
use super::scoring::score_with_reference;

/// Entry point used by callers that hold an engine instead of calling the
/// free functions directly.
pub trait RiskEngine {
    /// Merge derived measurements into the record, then score it.
    fn assess(&self, vitals: &VitalsRecord) -> Assessment;

    /// Score the record exactly as given.
    fn score(&self, vitals: &VitalsRecord) -> AssessmentResult;
}

/// Default implementation backed by a set of display reference bands.
/// Holds no mutable state; one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct DefaultRiskEngine {
    pub(crate) reference: ReferenceRanges,
}

impl DefaultRiskEngine {
    pub fn new(reference: ReferenceRanges) -> Self {
        Self { reference }
    }
}

impl RiskEngine for DefaultRiskEngine {
    fn assess(&self, vitals: &VitalsRecord) -> Assessment {
        let start = Instant::now();

        let merged = calculate_derived_measurements(vitals);
        let result = self.score(&merged);

        tracing::info!(
            risk_score = result.risk_score,
            risk_level = result.risk_level.as_str(),
            factors = result.risk_factors.len(),
            actions = result.suggested_actions.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Risk assessment complete"
        );

        Assessment {
            vitals: merged,
            result,
        }
    }

    fn score(&self, vitals: &VitalsRecord) -> AssessmentResult {
        let result = score_with_reference(vitals, &self.reference);
        let factor_names: Vec<&str> = result.risk_factors.iter().map(|f| f.name.as_str()).collect();
        tracing::debug!(factors = ?factor_names, "Scored vitals");
        result
    }
}
