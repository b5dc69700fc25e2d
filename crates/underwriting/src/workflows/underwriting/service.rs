use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use super::domain::{Field, RiskTier, SlotValue, UnknownField};
use super::report::SummaryView;
use super::repository::{RepositoryError, SessionRepository};
use super::session::{Restarted, SessionId, SessionView, UnderwritingSession};
use super::validation::{UnderwritingConfig, ValidationError, ValidationOutcome};

/// Service composing the session repository with the validation pipeline.
///
/// Submissions and resets load, modify and store a whole session, so they run one
/// at a time to keep concurrent requests from overwriting each other's slots.
pub struct UnderwritingService<R> {
    repository: Arc<R>,
    config: UnderwritingConfig,
    writes: Mutex<()>,
}

impl<R> UnderwritingService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: UnderwritingConfig) -> Self {
        Self {
            repository,
            config,
            writes: Mutex::new(()),
        }
    }

    /// Open a fresh session with an empty slot store.
    pub fn open(&self) -> Result<SessionView, SessionServiceError> {
        let session = UnderwritingSession::open(self.config.clone());
        let stored = self.repository.insert(session)?;
        Ok(stored.view())
    }

    /// Submit one raw value for a named field.
    pub fn submit(
        &self,
        session_id: &SessionId,
        field: &str,
        raw: Option<&str>,
    ) -> Result<SubmissionView, SessionServiceError> {
        let field = field.parse::<Field>()?;
        let _write = self.write_guard();
        let mut session = self.load(session_id)?;

        let outcome = session.submit(field, raw);
        if outcome.is_accepted() {
            self.repository.update(session.clone())?;
        }

        Ok(SubmissionView::new(&session, outcome))
    }

    pub fn session(&self, session_id: &SessionId) -> Result<SessionView, SessionServiceError> {
        Ok(self.load(session_id)?.view())
    }

    pub fn summary(&self, session_id: &SessionId) -> Result<SummaryView, SessionServiceError> {
        Ok(self.load(session_id)?.summary().view())
    }

    pub fn reset(&self, session_id: &SessionId) -> Result<Restarted, SessionServiceError> {
        let _write = self.write_guard();
        let mut session = self.load(session_id)?;
        let restarted = session.reset();
        self.repository.update(session)?;
        Ok(restarted)
    }

    // The guarded unit carries no state, so a poisoned lock is still usable.
    fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load(&self, session_id: &SessionId) -> Result<UnderwritingSession, SessionServiceError> {
        let session = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(session)
    }
}

/// Response shape for a single slot submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionView {
    pub session_id: SessionId,
    pub field: Field,
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<SlotValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<RiskTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_prompt: Option<&'static str>,
}

impl SubmissionView {
    fn new(session: &UnderwritingSession, outcome: ValidationOutcome) -> Self {
        let message = outcome.message().to_string();
        match outcome {
            ValidationOutcome::Accepted(accepted) => Self {
                session_id: session.id().clone(),
                field: accepted.field,
                status: "accepted",
                message,
                value: Some(accepted.value),
                tier: accepted.tier,
                error: None,
                next_prompt: session.next_prompt(),
            },
            ValidationOutcome::Rejected(rejected) => Self {
                session_id: session.id().clone(),
                field: rejected.field,
                status: "rejected",
                message,
                value: None,
                tier: None,
                error: Some(rejected.error),
                next_prompt: None,
            },
        }
    }
}

/// Error raised by the underwriting service.
#[derive(Debug, thiserror::Error)]
pub enum SessionServiceError {
    #[error(transparent)]
    UnknownField(#[from] UnknownField),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
