//! Tolerant coercion of raw venture fields into typed, bounded values.
//!
//! Every parse failure degrades to a safe default (zero, empty list, empty
//! checklist) so downstream calculators can assume clean input. The
//! tolerance policy for the whole engine lives here and nowhere else.

use serde_json::Value;

use super::domain::VentureRecord;

/// Checklist completion extracted from a stored readiness map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChecklistState {
    pub checked: usize,
    pub total: usize,
}

impl ChecklistState {
    /// Fraction of checklist items completed. The denominator is floored at
    /// one key so an empty checklist contributes zero completion instead of
    /// dividing by zero or silently awarding full credit.
    pub fn completion_ratio(&self) -> f64 {
        self.checked as f64 / self.total.max(1) as f64
    }

    pub fn is_populated(&self) -> bool {
        self.total > 0
    }
}

/// Strongly typed view of a venture record after defensive parsing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedFields {
    pub revenue: f64,
    pub funding_raised: f64,
    pub team_size: u32,
    pub founder_types: Vec<String>,
    pub gedsi_goals: Vec<String>,
    pub operational_readiness: ChecklistState,
    pub capital_readiness: ChecklistState,
    pub document_count: u32,
    pub has_website: bool,
    pub pitch_summary_chars: usize,
}

impl NormalizedFields {
    pub fn from_record(record: &VentureRecord) -> Self {
        Self {
            revenue: amount_or_zero(record.revenue.as_ref()),
            funding_raised: amount_or_zero(record.funding_raised.as_ref()),
            team_size: count_or_zero(record.team_size.as_ref()),
            founder_types: tags_or_empty(record.founder_types.as_ref()),
            gedsi_goals: tags_or_empty(record.gedsi_goals.as_ref()),
            operational_readiness: checklist_or_empty(record.operational_readiness.as_ref()),
            capital_readiness: checklist_or_empty(record.capital_readiness.as_ref()),
            document_count: record.document_count,
            has_website: record
                .website
                .as_deref()
                .is_some_and(|site| !site.trim().is_empty()),
            pitch_summary_chars: record
                .pitch_summary
                .as_deref()
                .map(|pitch| pitch.trim().chars().count())
                .unwrap_or(0),
        }
    }
}

/// Coerce a numeric-or-string amount; anything unparseable, non-finite, or
/// negative becomes zero.
fn amount_or_zero(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        Some(Value::String(raw)) => {
            let cleaned: String = raw
                .trim()
                .chars()
                .filter(|c| !matches!(c, '$' | ',' | ' '))
                .collect();
            cleaned.parse::<f64>().unwrap_or(0.0)
        }
        _ => 0.0,
    };

    if parsed.is_finite() && parsed > 0.0 {
        parsed
    } else {
        0.0
    }
}

fn count_or_zero(value: Option<&Value>) -> u32 {
    amount_or_zero(value).floor() as u32
}

/// Accept an already-parsed array of tags or a JSON-encoded one; anything
/// else yields an empty list. Tags are trimmed, lowercased, and deduplicated.
fn tags_or_empty(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => collect_tags(items),
        Some(Value::String(raw)) => match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(items)) => collect_tags(&items),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn collect_tags(items: &[Value]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for item in items {
        let Some(raw) = item.as_str() else {
            continue;
        };
        let tag = normalize_tag(raw);
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

fn normalize_tag(value: &str) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

/// Accept an already-parsed checklist map or a JSON-encoded one; anything
/// else yields an empty checklist.
fn checklist_or_empty(value: Option<&Value>) -> ChecklistState {
    match value {
        Some(Value::Object(map)) => count_checklist(map.values()),
        Some(Value::String(raw)) => match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => count_checklist(map.values()),
            _ => ChecklistState::default(),
        },
        _ => ChecklistState::default(),
    }
}

fn count_checklist<'a>(values: impl Iterator<Item = &'a Value>) -> ChecklistState {
    let mut state = ChecklistState::default();
    for value in values {
        state.total += 1;
        if is_checked(value) {
            state.checked += 1;
        }
    }
    state
}

fn is_checked(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(raw) => !raw.trim().is_empty(),
        _ => false,
    }
}
