//! Deterministic fallback classification used when a venture carries no
//! usable AI advisory. Rules evaluate in a fixed order; the first three
//! matching alerts win.

use super::super::domain::VentureRecord;
use super::super::normalizer::NormalizedFields;
use super::super::scoring::ScoreResult;
use super::{
    ActionPriority, InsightResult, RiskLevel, DEFAULT_ACTION_DAYS, DEFAULT_NEXT_ACTION, MAX_ALERTS,
};

const GEDSI_URGENT_THRESHOLD: u8 = 60;
const GEDSI_REVIEW_THRESHOLD: u8 = 75;
const IMPACT_SCALING_THRESHOLD: u8 = 85;
const MIN_DOCUMENTS: u32 = 3;
const SMALL_TEAM_CEILING: u32 = 3;
const ESCALATION_DAYS: u32 = 14;

/// Risk level from scores and documentation depth, independent of the
/// alert rules.
pub(crate) fn derive_risk_level(scores: &ScoreResult, document_count: u32) -> RiskLevel {
    if scores.gedsi_score > 80 && scores.impact_score > 70 && document_count >= 3 {
        RiskLevel::Low
    } else if scores.gedsi_score < 60 || scores.impact_score < 40 || document_count < 2 {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    }
}

pub(crate) fn evaluate(
    record: &VentureRecord,
    fields: &NormalizedFields,
    scores: &ScoreResult,
    risk_level: RiskLevel,
) -> InsightResult {
    let mut priority = ActionPriority::Medium;
    let mut next_action = DEFAULT_NEXT_ACTION.to_string();
    let mut days_until_action = DEFAULT_ACTION_DAYS;
    let mut alerts: Vec<String> = Vec::new();

    if scores.gedsi_score < GEDSI_URGENT_THRESHOLD {
        priority = ActionPriority::Urgent;
        next_action = "Improve GEDSI metrics collection and verification".to_string();
        days_until_action = 7;
        alerts.push("GEDSI score below acceptable threshold".to_string());
    } else if scores.gedsi_score < GEDSI_REVIEW_THRESHOLD {
        priority = ActionPriority::High;
        next_action = "Schedule a GEDSI improvement review".to_string();
        days_until_action = 14;
        alerts.push("GEDSI score needs improvement".to_string());
    } else if scores.impact_score > IMPACT_SCALING_THRESHOLD {
        priority = ActionPriority::High;
        next_action = "Prepare a scaling assessment for the investment committee".to_string();
        days_until_action = 14;
        alerts.push("High impact performance - scaling opportunity".to_string());
    }

    if record.gedsi_metrics.is_empty() {
        alerts.push("No GEDSI metrics recorded".to_string());
        if priority == ActionPriority::Medium {
            priority = ActionPriority::High;
            next_action = "Record baseline GEDSI metrics for declared goals".to_string();
            days_until_action = ESCALATION_DAYS;
        }
    }

    if record.capital_activity_count == 0 {
        alerts.push("No capital activities recorded".to_string());
    }

    if record.document_count < MIN_DOCUMENTS {
        alerts.push("Insufficient documentation".to_string());
    }

    if fields.revenue <= 0.0 {
        alerts.push("No revenue recorded".to_string());
    }

    if fields.team_size > 0 && fields.team_size < SMALL_TEAM_CEILING {
        alerts.push("Small team size may limit scalability".to_string());
    }

    if !fields.operational_readiness.is_populated() && !fields.capital_readiness.is_populated() {
        alerts.push("Readiness assessment incomplete".to_string());
        if priority == ActionPriority::Medium {
            priority = ActionPriority::High;
            next_action = "Complete operational and capital readiness assessments".to_string();
            days_until_action = ESCALATION_DAYS;
        }
    }

    alerts.truncate(MAX_ALERTS);

    InsightResult {
        risk_level,
        priority,
        next_action,
        days_until_action,
        alerts,
    }
}
