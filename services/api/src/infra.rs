use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use venture_ai::portfolio::{
    RepositoryError, ScoringConfig, VentureId, VentureRepository, VentureSnapshot,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryVentureRepository {
    records: Arc<Mutex<HashMap<VentureId, VentureSnapshot>>>,
}

impl VentureRepository for InMemoryVentureRepository {
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
        let id = snapshot.venture_id();
        if guard.contains_key(&id) {
            guard.insert(id, snapshot);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
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

pub(crate) fn default_scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
