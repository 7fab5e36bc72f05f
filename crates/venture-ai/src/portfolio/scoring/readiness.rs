use super::super::normalizer::NormalizedFields;
use super::{clamp_score, ScoringConfig};

/// Investment-readiness score: checklist completion ratios plus fixed
/// bonuses for secondary signals.
pub(crate) fn score(fields: &NormalizedFields, config: &ScoringConfig) -> u8 {
    let weights = &config.readiness;
    let mut total = weights.base;

    total += fields.operational_readiness.completion_ratio() * weights.operational_weight;
    total += fields.capital_readiness.completion_ratio() * weights.capital_weight;

    if fields.revenue > 0.0 {
        total += weights.revenue_bonus;
    }
    if fields.team_size >= weights.team_threshold {
        total += weights.team_bonus;
    }
    if fields.has_website {
        total += weights.website_bonus;
    }
    if fields.pitch_summary_chars > weights.pitch_min_chars {
        total += weights.pitch_bonus;
    }
    if let Some(tier) = weights
        .document_tiers
        .iter()
        .find(|tier| fields.document_count >= tier.min_documents)
    {
        total += tier.bonus;
    }

    if !total.is_finite() {
        return clamp_score(weights.base);
    }

    clamp_score(total.min(100.0))
}
