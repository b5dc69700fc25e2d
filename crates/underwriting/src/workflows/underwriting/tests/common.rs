use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::underwriting::domain::Field;
use crate::workflows::underwriting::pipeline::ValidationPipeline;
use crate::workflows::underwriting::repository::{RepositoryError, SessionRepository};
use crate::workflows::underwriting::service::UnderwritingService;
use crate::workflows::underwriting::session::{SessionId, UnderwritingSession};
use crate::workflows::underwriting::store::SlotStore;
use crate::workflows::underwriting::validation::{UnderwritingConfig, ValidationOutcome};

pub(super) fn config() -> UnderwritingConfig {
    UnderwritingConfig::default()
}

pub(super) fn pipeline() -> ValidationPipeline {
    ValidationPipeline::new(config())
}

/// Store holding the given slots, committed through the pipeline in order.
pub(super) fn store_with(entries: &[(Field, &str)]) -> SlotStore {
    let pipeline = pipeline();
    let mut store = SlotStore::new();
    for &(field, raw) in entries {
        let outcome = pipeline.submit(field, Some(raw), &mut store);
        assert!(outcome.is_accepted(), "fixture value rejected: {outcome:?}");
    }
    store
}

pub(super) fn financed_store() -> SlotStore {
    store_with(&[
        (Field::SalesPrice, "300000"),
        (Field::DownPayment, "60000"),
        (Field::InterestRate, "6.5"),
    ])
}

pub(super) fn accepted_text(outcome: &ValidationOutcome) -> &str {
    match outcome {
        ValidationOutcome::Accepted(accepted) => accepted
            .value
            .as_text()
            .expect("text slot value"),
        other => panic!("expected acceptance, got {other:?}"),
    }
}

pub(super) fn accepted_number(outcome: &ValidationOutcome) -> f64 {
    match outcome {
        ValidationOutcome::Accepted(accepted) => accepted
            .value
            .as_number()
            .expect("numeric slot value"),
        other => panic!("expected acceptance, got {other:?}"),
    }
}

pub(super) fn build_service() -> (UnderwritingService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = UnderwritingService::new(repository.clone(), config());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) sessions: Arc<Mutex<HashMap<SessionId, UnderwritingSession>>>,
}

impl SessionRepository for MemoryRepository {
    fn insert(&self, session: UnderwritingSession) -> Result<UnderwritingSession, RepositoryError> {
        let mut guard = self.sessions.lock().expect("repository mutex poisoned");
        if guard.contains_key(session.id()) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(session.id().clone(), session.clone());
        Ok(session)
    }

    fn update(&self, session: UnderwritingSession) -> Result<(), RepositoryError> {
        let mut guard = self.sessions.lock().expect("repository mutex poisoned");
        guard.insert(session.id().clone(), session);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<UnderwritingSession>, RepositoryError> {
        let guard = self.sessions.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl SessionRepository for UnavailableRepository {
    fn insert(&self, _session: UnderwritingSession) -> Result<UnderwritingSession, RepositoryError> {
        Err(RepositoryError::Unavailable("session store offline".to_string()))
    }

    fn update(&self, _session: UnderwritingSession) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("session store offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<UnderwritingSession>, RepositoryError> {
        Err(RepositoryError::Unavailable("session store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
