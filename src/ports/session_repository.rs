//! Analysis session repository port.
//!
//! Defines the contract for persisting and retrieving AnalysisSession
//! aggregates between wizard requests.

use crate::domain::foundation::{DomainError, SessionId, Timestamp};
use crate::domain::workflow::AnalysisSession;
use async_trait::async_trait;

/// Repository port for AnalysisSession persistence.
#[async_trait]
pub trait AnalysisSessionRepository: Send + Sync {
    /// Save a new session.
    ///
    /// # Errors
    ///
    /// - `RepositoryError` if a session with the same id already exists
    async fn save(&self, session: &AnalysisSession) -> Result<(), DomainError>;

    /// Replace an existing session (optimistic locking).
    ///
    /// `expected_version` is the version the caller loaded; the write is
    /// refused if the stored session has moved on since.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    /// - `ConcurrencyConflict` if the stored version differs from `expected_version`
    async fn update(
        &self,
        session: &AnalysisSession,
        expected_version: u64,
    ) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<AnalysisSession>, DomainError>;

    /// Delete a session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    async fn delete(&self, id: &SessionId) -> Result<(), DomainError>;

    /// Delete every session last updated before `cutoff`.
    ///
    /// Returns the number of sessions removed.
    async fn cleanup_idle(&self, cutoff: &Timestamp) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_session_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AnalysisSessionRepository) {}
    }
}
