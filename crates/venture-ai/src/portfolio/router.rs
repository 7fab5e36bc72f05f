use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde_json::json;

use super::domain::{VentureId, VentureRecord};
use super::repository::{RepositoryError, VentureRepository};
use super::service::{PortfolioAnalysisService, PortfolioServiceError};

/// Router builder exposing HTTP endpoints for venture intake and analysis.
pub fn portfolio_router<R>(service: Arc<PortfolioAnalysisService<R>>) -> Router
where
    R: VentureRepository + 'static,
{
    Router::new()
        .route("/api/v1/ventures", post(register_handler::<R>))
        .route("/api/v1/ventures/:venture_id", get(snapshot_handler::<R>))
        .route(
            "/api/v1/ventures/:venture_id/analysis",
            post(analyze_handler::<R>),
        )
        .route("/api/v1/portfolio/summary", get(summary_handler::<R>))
        .with_state(service)
}

pub(crate) async fn register_handler<R>(
    State(service): State<Arc<PortfolioAnalysisService<R>>>,
    axum::Json(record): axum::Json<VentureRecord>,
) -> Response
where
    R: VentureRepository + 'static,
{
    match service.register(record) {
        Ok(snapshot) => {
            let view = snapshot.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(PortfolioServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "venture already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn snapshot_handler<R>(
    State(service): State<Arc<PortfolioAnalysisService<R>>>,
    Path(venture_id): Path<String>,
) -> Response
where
    R: VentureRepository + 'static,
{
    let id = VentureId(venture_id);
    match service.get(&id) {
        Ok(snapshot) => {
            let view = snapshot.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(PortfolioServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "venture_id": id.0,
                "error": "venture not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn analyze_handler<R>(
    State(service): State<Arc<PortfolioAnalysisService<R>>>,
    Path(venture_id): Path<String>,
) -> Response
where
    R: VentureRepository + 'static,
{
    let id = VentureId(venture_id);
    let today = Local::now().date_naive();
    match service.analyze(&id, today) {
        Ok(analysis) => (StatusCode::OK, axum::Json(analysis)).into_response(),
        Err(PortfolioServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "venture_id": id.0,
                "error": "venture not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn summary_handler<R>(
    State(service): State<Arc<PortfolioAnalysisService<R>>>,
) -> Response
where
    R: VentureRepository + 'static,
{
    match service.portfolio_summary() {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(err) => {
            let payload = json!({
                "error": err.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
