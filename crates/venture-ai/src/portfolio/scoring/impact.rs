use super::super::domain::{GedsiMetric, VentureStage};
use super::super::normalizer::NormalizedFields;
use super::{clamp_score, ScoringConfig};

/// Social-impact score: capped additive terms over financial scale, team,
/// goals, founder diversity, and fulfilled metrics, then a stage multiplier.
pub(crate) fn score(
    fields: &NormalizedFields,
    metrics: &[GedsiMetric],
    stage: VentureStage,
    config: &ScoringConfig,
) -> u8 {
    let weights = &config.impact;
    let mut total = weights.base;

    total += (fields.revenue / weights.revenue_divisor).min(weights.revenue_cap);
    total += (fields.funding_raised / weights.funding_divisor).min(weights.funding_cap);

    if fields.team_size > 1 {
        total += f64::from(fields.team_size).min(weights.team_cap);
    }

    total += (fields.gedsi_goals.len() as f64 * weights.goal_weight).min(weights.goal_cap);

    for tag in &fields.founder_types {
        total += config.founder_bonus(tag);
    }

    let fulfilled = metrics
        .iter()
        .filter(|metric| metric.status.is_fulfilled())
        .count();
    total += (fulfilled as f64 * weights.fulfilled_metric_weight).min(weights.fulfilled_metric_cap);

    total *= config.stage_multiplier(stage);

    // Malformed upstream data must degrade to the base, never poison the
    // portfolio aggregate.
    if !total.is_finite() {
        return clamp_score(weights.base);
    }

    clamp_score(total.min(100.0))
}
