use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier wrapper for ventures tracked by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VentureId(pub String);

/// Pipeline stage a venture has reached, as stored by the record store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VentureStage {
    #[default]
    Intake,
    Screening,
    DueDiligence,
    InvestmentReady,
    Seed,
    SeriesA,
    SeriesB,
    SeriesC,
    Funded,
    Exited,
}

impl VentureStage {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::Intake,
            Self::Screening,
            Self::DueDiligence,
            Self::InvestmentReady,
            Self::Seed,
            Self::SeriesA,
            Self::SeriesB,
            Self::SeriesC,
            Self::Funded,
            Self::Exited,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Intake => "Intake",
            Self::Screening => "Screening",
            Self::DueDiligence => "Due Diligence",
            Self::InvestmentReady => "Investment Ready",
            Self::Seed => "Seed",
            Self::SeriesA => "Series A",
            Self::SeriesB => "Series B",
            Self::SeriesC => "Series C",
            Self::Funded => "Funded",
            Self::Exited => "Exited",
        }
    }
}

/// Completion state of a single GEDSI metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Verified,
    #[serde(other)]
    Unknown,
}

impl MetricStatus {
    /// Completed and verified metrics both count toward goal coverage.
    pub const fn is_fulfilled(self) -> bool {
        matches!(self, Self::Completed | Self::Verified)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Verified => "Verified",
            Self::Unknown => "Unknown",
        }
    }
}

/// One tracked GEDSI metric tied to a declared goal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GedsiMetric {
    pub goal: String,
    pub category: String,
    pub status: MetricStatus,
}

/// Prior AI-analysis payload a venture record may carry.
///
/// The stored blob is opaque; unknown fields are ignored and every known
/// field is optional so a partially populated payload still resolves.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiAnalysis {
    pub risk_assessment: Option<String>,
    pub recommendations: Vec<String>,
    pub alerts: Vec<String>,
}

/// Raw venture snapshot as supplied by the record store.
///
/// Financial figures, tag lists, and readiness checklists arrive in whatever
/// shape the store happens to hold (numbers, numeric strings, JSON-encoded
/// text, or already-parsed structures), so those fields stay as loose values
/// until the normalizer coerces them. The engine never mutates a record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VentureRecord {
    pub id: String,
    pub name: String,
    pub sector: String,
    pub stage: VentureStage,
    pub revenue: Option<Value>,
    pub funding_raised: Option<Value>,
    pub team_size: Option<Value>,
    pub founder_types: Option<Value>,
    pub gedsi_goals: Option<Value>,
    pub operational_readiness: Option<Value>,
    pub capital_readiness: Option<Value>,
    pub gedsi_metrics: Vec<GedsiMetric>,
    pub document_count: u32,
    pub activity_count: u32,
    pub capital_activity_count: u32,
    pub ai_analysis: Option<Value>,
    pub website: Option<String>,
    pub pitch_summary: Option<String>,
}

impl VentureRecord {
    pub fn venture_id(&self) -> VentureId {
        VentureId(self.id.clone())
    }
}
