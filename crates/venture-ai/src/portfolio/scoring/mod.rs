mod config;
mod gedsi;
mod impact;
mod readiness;

pub use config::{DocumentTier, GedsiWeights, ImpactWeights, ReadinessWeights, ScoringConfig};

use serde::{Deserialize, Serialize};

use super::domain::VentureRecord;
use super::insights::{self, InsightResult};
use super::normalizer::NormalizedFields;

/// Stateless engine applying the configured weight tables to venture records.
///
/// Every computation is a pure function of a single record (plus the batch
/// for portfolio aggregation); the engine holds no per-call state and never
/// mutates its input.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn normalize(&self, record: &VentureRecord) -> NormalizedFields {
        NormalizedFields::from_record(record)
    }

    pub fn compute_scores(&self, record: &VentureRecord) -> ScoreResult {
        let fields = NormalizedFields::from_record(record);

        ScoreResult {
            gedsi_score: gedsi::score(&fields, &record.gedsi_metrics, &self.config),
            impact_score: impact::score(&fields, &record.gedsi_metrics, record.stage, &self.config),
            readiness_score: readiness::score(&fields, &self.config),
        }
    }

    pub fn compute_insights(&self, record: &VentureRecord, scores: &ScoreResult) -> InsightResult {
        let fields = NormalizedFields::from_record(record);
        insights::generate(record, &fields, scores)
    }
}

/// The three engine scores for one venture, each bounded to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub gedsi_score: u8,
    pub impact_score: u8,
    pub readiness_score: u8,
}

pub(crate) fn clamp_score(value: f64) -> u8 {
    value.clamp(0.0, 100.0).round() as u8
}
