use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{VentureId, VentureRecord};
use super::insights::InsightResult;
use super::scoring::ScoreResult;

/// Repository record pairing a stored venture with its latest analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VentureSnapshot {
    pub record: VentureRecord,
    pub analysis: Option<VentureAnalysis>,
}

/// Persisted output of one engine run. Storing it is caller policy; the
/// engine itself only computes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VentureAnalysis {
    pub scores: ScoreResult,
    pub insights: InsightResult,
    pub action_due: NaiveDate,
}

impl VentureSnapshot {
    pub fn venture_id(&self) -> VentureId {
        self.record.venture_id()
    }

    pub fn status_view(&self) -> VentureStatusView {
        VentureStatusView {
            venture_id: self.record.venture_id(),
            stage: self.record.stage.label(),
            scores: self.analysis.as_ref().map(|analysis| analysis.scores),
            risk_level: self
                .analysis
                .as_ref()
                .map(|analysis| analysis.insights.risk_level.label()),
            next_action: self
                .analysis
                .as_ref()
                .map(|analysis| analysis.insights.next_action.clone())
                .unwrap_or_else(|| "pending analysis".to_string()),
        }
    }
}

/// Sanitized representation of a venture's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct VentureStatusView {
    pub venture_id: VentureId,
    pub stage: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoreResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<&'static str>,
    pub next_action: String,
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait VentureRepository: Send + Sync {
    fn insert(&self, snapshot: VentureSnapshot) -> Result<VentureSnapshot, RepositoryError>;
    fn update(&self, snapshot: VentureSnapshot) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &VentureId) -> Result<Option<VentureSnapshot>, RepositoryError>;
    fn list(&self) -> Result<Vec<VentureSnapshot>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
