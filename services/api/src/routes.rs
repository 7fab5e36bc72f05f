use crate::infra::{default_scoring_config, deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use venture_ai::portfolio::{
    aggregate_portfolio, portfolio_router, InsightResult, PortfolioAnalysisService,
    PortfolioSummary, ScoreResult, ScoringEngine, VentureRecord, VentureRepository,
};

#[derive(Debug, Deserialize)]
pub(crate) struct PortfolioReportRequest {
    pub(crate) ventures: Vec<VentureRecord>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PortfolioReportResponse {
    pub(crate) today: NaiveDate,
    pub(crate) ventures: Vec<VentureReportEntry>,
    pub(crate) summary: PortfolioSummary,
}

#[derive(Debug, Serialize)]
pub(crate) struct VentureReportEntry {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) sector: String,
    pub(crate) stage: &'static str,
    pub(crate) scores: ScoreResult,
    pub(crate) insights: InsightResult,
    pub(crate) action_due: NaiveDate,
}

pub(crate) fn with_portfolio_routes<R>(service: Arc<PortfolioAnalysisService<R>>) -> axum::Router
where
    R: VentureRepository + 'static,
{
    portfolio_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/portfolio/report",
            axum::routing::post(portfolio_report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Score a batch of raw venture records in one pass. Stateless: nothing is
/// persisted, so dashboards can re-run the report against whatever record
/// set they currently hold.
pub(crate) async fn portfolio_report_endpoint(
    Json(payload): Json<PortfolioReportRequest>,
) -> Json<PortfolioReportResponse> {
    let PortfolioReportRequest { ventures, today } = payload;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let engine = ScoringEngine::new(default_scoring_config());

    let scored: Vec<(VentureRecord, ScoreResult, InsightResult)> = ventures
        .into_iter()
        .map(|record| {
            let scores = engine.compute_scores(&record);
            let insights = engine.compute_insights(&record, &scores);
            (record, scores, insights)
        })
        .collect();

    let pairs: Vec<_> = scored
        .iter()
        .map(|(record, scores, _)| (record, scores))
        .collect();
    let summary = aggregate_portfolio(&pairs);

    let ventures = scored
        .iter()
        .map(|(record, scores, insights)| VentureReportEntry {
            id: record.id.clone(),
            name: record.name.clone(),
            sector: record.sector.clone(),
            stage: record.stage.label(),
            scores: *scores,
            insights: insights.clone(),
            action_due: today + Duration::days(i64::from(insights.days_until_action)),
        })
        .collect();

    Json(PortfolioReportResponse {
        today,
        ventures,
        summary,
    })
}
