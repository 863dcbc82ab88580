//! In-Memory Analysis Session Repository
//!
//! Keeps wizard sessions in a process-local map. Sessions are lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp};
use crate::domain::workflow::AnalysisSession;
use crate::ports::AnalysisSessionRepository;

/// In-memory storage for analysis sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<SessionId, AnalysisSession>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored sessions (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }

    /// Number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

fn not_found(id: &SessionId) -> DomainError {
    DomainError::new(ErrorCode::SessionNotFound, format!("Session {} not found", id))
        .with_detail("session_id", id.to_string())
}

#[async_trait]
impl AnalysisSessionRepository for InMemorySessionRepository {
    async fn save(&self, session: &AnalysisSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(session.id()) {
            return Err(DomainError::new(
                ErrorCode::RepositoryError,
                format!("Session {} already exists", session.id()),
            ));
        }
        sessions.insert(*session.id(), session.clone());
        Ok(())
    }

    async fn update(
        &self,
        session: &AnalysisSession,
        expected_version: u64,
    ) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        let stored = sessions
            .get_mut(session.id())
            .ok_or_else(|| not_found(session.id()))?;
        if stored.version() != expected_version {
            return Err(DomainError::new(
                ErrorCode::ConcurrencyConflict,
                format!(
                    "Session version mismatch: expected {}, found {}",
                    expected_version,
                    stored.version()
                ),
            )
            .with_detail("session_id", session.id().to_string()));
        }
        *stored = session.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<AnalysisSession>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &SessionId) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    async fn cleanup_idle(&self, cutoff: &Timestamp) -> Result<u64, DomainError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.updated_at().is_before(cutoff));
        Ok((before - sessions.len()) as u64)
    }
}
