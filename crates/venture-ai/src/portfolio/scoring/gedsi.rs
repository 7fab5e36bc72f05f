use super::super::domain::GedsiMetric;
use super::super::normalizer::NormalizedFields;
use super::{clamp_score, ScoringConfig};

/// GEDSI compliance score: coverage of declared goals by fulfilled metrics,
/// plus a small bonus for founder-diversity tags.
pub(crate) fn score(
    fields: &NormalizedFields,
    metrics: &[GedsiMetric],
    config: &ScoringConfig,
) -> u8 {
    let weights = &config.gedsi;

    if fields.gedsi_goals.is_empty() {
        return clamp_score(weights.unassessed_baseline);
    }

    let covered = fields
        .gedsi_goals
        .iter()
        .filter(|goal| {
            metrics.iter().any(|metric| {
                metric.status.is_fulfilled() && metric.goal.trim().eq_ignore_ascii_case(goal)
            })
        })
        .count();

    let coverage = covered as f64 / fields.gedsi_goals.len() as f64;

    let diversity_tags = fields
        .founder_types
        .iter()
        .filter(|tag| config.founder_bonus(tag) > 0.0)
        .count();
    let diversity = (diversity_tags as f64 * weights.diversity_bonus).min(weights.diversity_cap);

    let total = coverage * weights.coverage_weight + diversity;
    if !total.is_finite() {
        return clamp_score(weights.unassessed_baseline);
    }

    clamp_score(total)
}
