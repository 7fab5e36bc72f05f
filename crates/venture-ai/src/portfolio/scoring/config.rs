use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::domain::VentureStage;

/// Weight tables applied by the scoring engine.
///
/// Kept as data rather than literals so deployments and tests can substitute
/// alternate weightings without touching the calculators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub gedsi: GedsiWeights,
    pub impact: ImpactWeights,
    pub readiness: ReadinessWeights,
    pub founder_bonuses: BTreeMap<String, f64>,
    pub stage_multipliers: BTreeMap<VentureStage, f64>,
}

impl ScoringConfig {
    pub fn founder_bonus(&self, tag: &str) -> f64 {
        self.founder_bonuses.get(tag).copied().unwrap_or(0.0)
    }

    pub fn stage_multiplier(&self, stage: VentureStage) -> f64 {
        self.stage_multipliers.get(&stage).copied().unwrap_or(1.0)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let founder_bonuses = BTreeMap::from([
            ("women-led".to_string(), 8.0),
            ("disability-inclusive".to_string(), 8.0),
            ("indigenous-led".to_string(), 6.0),
            ("rural-focus".to_string(), 5.0),
            ("youth-led".to_string(), 4.0),
        ]);

        let stage_multipliers = BTreeMap::from([
            (VentureStage::Funded, 1.2),
            (VentureStage::SeriesA, 1.3),
            (VentureStage::SeriesB, 1.4),
            (VentureStage::SeriesC, 1.5),
            (VentureStage::Exited, 1.6),
        ]);

        Self {
            gedsi: GedsiWeights::default(),
            impact: ImpactWeights::default(),
            readiness: ReadinessWeights::default(),
            founder_bonuses,
            stage_multipliers,
        }
    }
}

/// Weights for the GEDSI compliance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GedsiWeights {
    /// Score assigned when a venture has declared no GEDSI goals yet.
    /// Sits at the review threshold so unassessed ventures surface through
    /// the missing-metrics rule rather than the score-threshold alerts.
    pub unassessed_baseline: f64,
    pub coverage_weight: f64,
    pub diversity_bonus: f64,
    pub diversity_cap: f64,
}

impl Default for GedsiWeights {
    fn default() -> Self {
        Self {
            unassessed_baseline: 75.0,
            coverage_weight: 92.0,
            diversity_bonus: 4.0,
            diversity_cap: 8.0,
        }
    }
}

/// Weights for the social-impact score. Each additive term is capped before
/// summation so a single outsized field cannot dominate the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactWeights {
    pub base: f64,
    pub revenue_divisor: f64,
    pub revenue_cap: f64,
    pub funding_divisor: f64,
    pub funding_cap: f64,
    pub team_cap: f64,
    pub goal_weight: f64,
    pub goal_cap: f64,
    pub fulfilled_metric_weight: f64,
    pub fulfilled_metric_cap: f64,
}

impl Default for ImpactWeights {
    fn default() -> Self {
        Self {
            base: 40.0,
            revenue_divisor: 100_000.0,
            revenue_cap: 20.0,
            funding_divisor: 1_000_000.0,
            funding_cap: 15.0,
            team_cap: 10.0,
            goal_weight: 3.0,
            goal_cap: 15.0,
            fulfilled_metric_weight: 2.0,
            fulfilled_metric_cap: 10.0,
        }
    }
}

/// Weights for the investment-readiness score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessWeights {
    pub base: f64,
    pub operational_weight: f64,
    pub capital_weight: f64,
    pub revenue_bonus: f64,
    pub team_bonus: f64,
    pub team_threshold: u32,
    pub website_bonus: f64,
    pub pitch_bonus: f64,
    pub pitch_min_chars: usize,
    /// Highest matching tier wins; evaluated in declaration order.
    pub document_tiers: Vec<DocumentTier>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentTier {
    pub min_documents: u32,
    pub bonus: f64,
}

impl Default for ReadinessWeights {
    fn default() -> Self {
        Self {
            base: 30.0,
            operational_weight: 35.0,
            capital_weight: 35.0,
            revenue_bonus: 5.0,
            team_bonus: 5.0,
            team_threshold: 3,
            website_bonus: 3.0,
            pitch_bonus: 2.0,
            pitch_min_chars: 100,
            document_tiers: vec![
                DocumentTier {
                    min_documents: 5,
                    bonus: 5.0,
                },
                DocumentTier {
                    min_documents: 3,
                    bonus: 3.0,
                },
                DocumentTier {
                    min_documents: 1,
                    bonus: 1.0,
                },
            ],
        }
    }
}
