//! Venture scoring, insight classification, and portfolio aggregation.
//!
//! The engine consumes venture records as structured data and emits score
//! and insight structures; it does not fetch, persist, or render. Hosts
//! wire it to storage through the [`repository`] seam and expose it through
//! [`router`].

pub mod domain;
pub mod export;
pub mod insights;
pub mod normalizer;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod summary;

#[cfg(test)]
mod tests;

pub use domain::{AiAnalysis, GedsiMetric, MetricStatus, VentureId, VentureRecord, VentureStage};
pub use export::write_portfolio_csv;
pub use insights::{ActionPriority, InsightResult, RiskLevel};
pub use normalizer::{ChecklistState, NormalizedFields};
pub use repository::{
    RepositoryError, VentureAnalysis, VentureRepository, VentureSnapshot, VentureStatusView,
};
pub use router::portfolio_router;
pub use scoring::{
    DocumentTier, GedsiWeights, ImpactWeights, ReadinessWeights, ScoreResult, ScoringConfig,
    ScoringEngine,
};
pub use service::{PortfolioAnalysisService, PortfolioServiceError};
pub use summary::{
    aggregate_portfolio, CategoryBreakdownEntry, PortfolioSummary, SectorBreakdownEntry,
    StageBreakdownEntry,
};
