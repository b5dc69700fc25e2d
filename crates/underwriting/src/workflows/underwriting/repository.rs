use super::session::{SessionId, UnderwritingSession};

/// Storage abstraction so the service can be exercised without a real backing store.
///
/// Sessions never share state; implementations hold one independent slot store per id.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, session: UnderwritingSession) -> Result<UnderwritingSession, RepositoryError>;
    fn update(&self, session: UnderwritingSession) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<UnderwritingSession>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
