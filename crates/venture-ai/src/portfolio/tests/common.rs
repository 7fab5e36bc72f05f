use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::{json, Value};

use crate::portfolio::domain::{VentureId, VentureRecord};
use crate::portfolio::repository::{RepositoryError, VentureRepository, VentureSnapshot};
use crate::portfolio::scoring::{ScoringConfig, ScoringEngine};
use crate::portfolio::service::PortfolioAnalysisService;

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default())
}

pub(super) fn record_from(value: Value) -> VentureRecord {
    serde_json::from_value(value).expect("venture record deserializes")
}

/// Bare intake record: no financials, no goals, no metrics, no checklists.
pub(super) fn empty_venture() -> VentureRecord {
    record_from(json!({
        "id": "ven-empty",
        "name": "Northside Labs",
        "sector": "Services",
        "stage": "INTAKE",
        "revenue": 0,
        "fundingRaised": 0,
        "teamSize": 0,
        "documentCount": 0,
        "activityCount": 0,
        "capitalActivityCount": 0
    }))
}

/// Later-stage venture with every impact term saturated: revenue and funding
/// at their caps, a large team, two bonus founder tags, five verified metrics.
pub(super) fn flagship_venture() -> VentureRecord {
    record_from(json!({
        "id": "ven-flagship",
        "name": "Solar Sisters",
        "sector": "CleanTech",
        "stage": "SERIES_B",
        "revenue": 1_000_000,
        "fundingRaised": 2_000_000,
        "teamSize": 15,
        "founderTypes": ["women-led", "disability-inclusive"],
        "operationalReadiness": { "governance": true, "financial_systems": true },
        "capitalReadiness": { "pitch_deck": true, "data_room": true },
        "gedsiMetrics": [
            { "goal": "OI.1", "category": "gender", "status": "VERIFIED" },
            { "goal": "OI.2", "category": "gender", "status": "VERIFIED" },
            { "goal": "OI.3", "category": "disability", "status": "VERIFIED" },
            { "goal": "OI.4", "category": "inclusion", "status": "VERIFIED" },
            { "goal": "OI.5", "category": "inclusion", "status": "VERIFIED" }
        ],
        "documentCount": 6,
        "activityCount": 12,
        "capitalActivityCount": 3,
        "website": "https://solarsisters.example",
        "pitchSummary": "Distributed solar franchises run by women entrepreneurs across rural districts, pairing asset finance with training and service networks."
    }))
}

/// Half-complete operational checklist and an empty capital checklist.
pub(super) fn partial_checklist_venture() -> VentureRecord {
    record_from(json!({
        "id": "ven-partial",
        "name": "AgriReach",
        "sector": "Agriculture",
        "stage": "SCREENING",
        "operationalReadiness": { "governance": true, "financial_systems": false },
        "capitalReadiness": {},
        "documentCount": 0
    }))
}

/// Venture carrying a prior AI advisory with its own alerts.
pub(super) fn advisory_venture() -> VentureRecord {
    record_from(json!({
        "id": "ven-advisory",
        "name": "CarePath",
        "sector": "HealthTech",
        "stage": "DUE_DILIGENCE",
        "revenue": 120_000,
        "teamSize": 4,
        "gedsiGoals": ["OI.6"],
        "gedsiMetrics": [
            { "goal": "OI.6", "category": "gender", "status": "COMPLETED" }
        ],
        "documentCount": 4,
        "capitalActivityCount": 2,
        "aiAnalysis": {
            "riskAssessment": "High risk: runway under four months.",
            "recommendations": ["Open a bridge round immediately"],
            "alerts": ["Runway under four months", "Burn rate rising"]
        }
    }))
}

pub(super) fn build_service() -> (
    PortfolioAnalysisService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = PortfolioAnalysisService::new(repository.clone(), ScoringConfig::default());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<VentureId, VentureSnapshot>>>,
}

impl VentureRepository for MemoryRepository {
    fn insert(&self, snapshot: VentureSnapshot) -> Result<VentureSnapshot, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let id = snapshot.venture_id();
        if guard.contains_key(&id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(id, snapshot.clone());
        Ok(snapshot)
    }

    fn update(&self, snapshot: VentureSnapshot) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(snapshot.venture_id(), snapshot);
        Ok(())
    }

    fn fetch(&self, id: &VentureId) -> Result<Option<VentureSnapshot>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<VentureSnapshot>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut snapshots: Vec<VentureSnapshot> = guard.values().cloned().collect();
        snapshots.sort_by(|a, b| a.record.id.cmp(&b.record.id));
        Ok(snapshots)
    }
}

pub(super) struct ConflictRepository;

impl VentureRepository for ConflictRepository {
    fn insert(&self, _snapshot: VentureSnapshot) -> Result<VentureSnapshot, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _snapshot: VentureSnapshot) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &VentureId) -> Result<Option<VentureSnapshot>, RepositoryError> {
        Ok(None)
    }

    fn list(&self) -> Result<Vec<VentureSnapshot>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl VentureRepository for UnavailableRepository {
    fn insert(&self, _snapshot: VentureSnapshot) -> Result<VentureSnapshot, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _snapshot: VentureSnapshot) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &VentureId) -> Result<Option<VentureSnapshot>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<VentureSnapshot>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
