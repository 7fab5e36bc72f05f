use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{Duration, NaiveDate};

use super::domain::{VentureId, VentureRecord};
use super::repository::{RepositoryError, VentureAnalysis, VentureRepository, VentureSnapshot};
use super::scoring::{ScoringConfig, ScoringEngine};
use super::summary::{aggregate_portfolio, PortfolioSummary};

/// Service composing the repository and the scoring engine.
pub struct PortfolioAnalysisService<R> {
    repository: Arc<R>,
    engine: Arc<ScoringEngine>,
}

static VENTURE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_venture_id() -> VentureId {
    let id = VENTURE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    VentureId(format!("ven-{id:06}"))
}

impl<R> PortfolioAnalysisService<R>
where
    R: VentureRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: ScoringConfig) -> Self {
        Self {
            repository,
            engine: Arc::new(ScoringEngine::new(config)),
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Register a venture, assigning a sequence id when the store left it blank.
    pub fn register(
        &self,
        mut record: VentureRecord,
    ) -> Result<VentureSnapshot, PortfolioServiceError> {
        if record.id.trim().is_empty() {
            record.id = next_venture_id().0;
        }

        let snapshot = VentureSnapshot {
            record,
            analysis: None,
        };

        Ok(self.repository.insert(snapshot)?)
    }

    /// Run the engine over a stored venture and persist the outcome.
    pub fn analyze(
        &self,
        venture_id: &VentureId,
        today: NaiveDate,
    ) -> Result<VentureAnalysis, PortfolioServiceError> {
        let mut snapshot = self
            .repository
            .fetch(venture_id)?
            .ok_or(RepositoryError::NotFound)?;

        let scores = self.engine.compute_scores(&snapshot.record);
        let insights = self.engine.compute_insights(&snapshot.record, &scores);
        let action_due = today + Duration::days(i64::from(insights.days_until_action));

        let analysis = VentureAnalysis {
            scores,
            insights,
            action_due,
        };
        snapshot.analysis = Some(analysis.clone());
        self.repository.update(snapshot)?;

        Ok(analysis)
    }

    /// Fetch a venture snapshot for API responses.
    pub fn get(&self, venture_id: &VentureId) -> Result<VentureSnapshot, PortfolioServiceError> {
        let snapshot = self
            .repository
            .fetch(venture_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(snapshot)
    }

    /// Roll the current venture set up into a portfolio summary. Ventures
    /// that have not been analyzed yet are scored on the fly; their results
    /// are not persisted.
    pub fn portfolio_summary(&self) -> Result<PortfolioSummary, PortfolioServiceError> {
        let snapshots = self.repository.list()?;

        let scored: Vec<_> = snapshots
            .into_iter()
            .map(|snapshot| {
                let scores = snapshot
                    .analysis
                    .as_ref()
                    .map(|analysis| analysis.scores)
                    .unwrap_or_else(|| self.engine.compute_scores(&snapshot.record));
                (snapshot.record, scores)
            })
            .collect();

        let entries: Vec<_> = scored
            .iter()
            .map(|(record, scores)| (record, scores))
            .collect();

        Ok(aggregate_portfolio(&entries))
    }
}

/// Error raised by the portfolio analysis service.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
