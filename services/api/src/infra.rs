use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use underwriting::workflows::underwriting::{
    RepositoryError, SessionId, SessionRepository, UnderwritingSession,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    sessions: Arc<Mutex<HashMap<SessionId, UnderwritingSession>>>,
}

impl InMemorySessionRepository {
    fn guard(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<SessionId, UnderwritingSession>>, RepositoryError>
    {
        self.sessions
            .lock()
            .map_err(|_| RepositoryError::Unavailable("session store lock poisoned".to_string()))
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn insert(&self, session: UnderwritingSession) -> Result<UnderwritingSession, RepositoryError> {
        let mut guard = self.guard()?;
        if guard.contains_key(session.id()) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(session.id().clone(), session.clone());
        Ok(session)
    }

    fn update(&self, session: UnderwritingSession) -> Result<(), RepositoryError> {
        let mut guard = self.guard()?;
        if guard.contains_key(session.id()) {
            guard.insert(session.id().clone(), session);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<UnderwritingSession>, RepositoryError> {
        let guard = self.guard()?;
        Ok(guard.get(id).cloned())
    }
}
