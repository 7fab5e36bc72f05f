mod rules;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::domain::{AiAnalysis, VentureRecord};
use super::normalizer::NormalizedFields;
use super::scoring::ScoreResult;

pub(crate) const MAX_ALERTS: usize = 3;
pub(crate) const DEFAULT_ACTION_DAYS: u32 = 30;
pub(crate) const DEFAULT_NEXT_ACTION: &str = "Continue monitoring performance";

/// Overall risk classification for a venture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Urgency attached to the recommended next action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionPriority {
    Urgent,
    High,
    Medium,
    Low,
}

impl ActionPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Classification output for one venture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightResult {
    pub risk_level: RiskLevel,
    pub priority: ActionPriority,
    pub next_action: String,
    pub days_until_action: u32,
    pub alerts: Vec<String>,
}

/// A venture either carries a parseable AI advisory or it does not; the
/// question is answered once per venture, before any classification runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AiAdvisory {
    Provided(AiAnalysis),
    Absent,
}

impl AiAdvisory {
    pub(crate) fn resolve(raw: Option<&Value>) -> Self {
        match raw {
            Some(value @ Value::Object(_)) => serde_json::from_value(value.clone())
                .map(Self::Provided)
                .unwrap_or(Self::Absent),
            Some(Value::String(encoded)) => serde_json::from_str(encoded)
                .map(Self::Provided)
                .unwrap_or(Self::Absent),
            _ => Self::Absent,
        }
    }
}

/// Classify a scored venture: prefer the venture's own AI advisory when it
/// yields alerts, otherwise fall back to the deterministic rule ladder.
pub(crate) fn generate(
    record: &VentureRecord,
    fields: &NormalizedFields,
    scores: &ScoreResult,
) -> InsightResult {
    let score_risk = rules::derive_risk_level(scores, record.document_count);

    if let AiAdvisory::Provided(analysis) = AiAdvisory::resolve(record.ai_analysis.as_ref()) {
        if !analysis.alerts.is_empty() {
            return from_advisory(&analysis, score_risk);
        }
    }

    rules::evaluate(record, fields, scores, score_risk)
}

fn from_advisory(analysis: &AiAnalysis, score_risk: RiskLevel) -> InsightResult {
    let assessment = analysis
        .risk_assessment
        .as_deref()
        .unwrap_or_default()
        .to_ascii_lowercase();

    let (risk_level, priority, days_until_action) =
        if assessment.contains("high risk") || assessment.contains("urgent") {
            (RiskLevel::High, ActionPriority::Urgent, 3)
        } else if assessment.contains("medium risk") {
            (RiskLevel::Medium, ActionPriority::High, 7)
        } else {
            (score_risk, ActionPriority::Medium, DEFAULT_ACTION_DAYS)
        };

    let next_action = analysis
        .recommendations
        .first()
        .cloned()
        .unwrap_or_else(|| DEFAULT_NEXT_ACTION.to_string());

    let alerts = analysis.alerts.iter().take(MAX_ALERTS).cloned().collect();

    InsightResult {
        risk_level,
        priority,
        next_action,
        days_until_action,
        alerts,
    }
}
