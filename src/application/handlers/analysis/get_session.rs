//! GetAnalysisSessionHandler - Query handler for a single session.

use std::sync::Arc;

use super::{load_session, AnalysisError};
use crate::domain::foundation::SessionId;
use crate::domain::workflow::AnalysisSession;
use crate::ports::AnalysisSessionRepository;

/// Query for a session by id.
#[derive(Debug, Clone)]
pub struct GetAnalysisSessionQuery {
    pub session_id: SessionId,
}

/// Handler for retrieving analysis sessions.
pub struct GetAnalysisSessionHandler {
    repository: Arc<dyn AnalysisSessionRepository>,
}

impl GetAnalysisSessionHandler {
    pub fn new(repository: Arc<dyn AnalysisSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetAnalysisSessionQuery,
    ) -> Result<AnalysisSession, AnalysisError> {
        load_session(self.repository.as_ref(), &query.session_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionRepository;

    #[tokio::test]
    async fn returns_stored_session() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let session = AnalysisSession::new(SessionId::new());
        repo.save(&session).await.unwrap();

        let handler = GetAnalysisSessionHandler::new(repo);
        let found = handler
            .handle(GetAnalysisSessionQuery {
                session_id: *session.id(),
            })
            .await
            .unwrap();
        assert_eq!(found, session);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let handler = GetAnalysisSessionHandler::new(Arc::new(InMemorySessionRepository::new()));
        let id = SessionId::new();
        let err = handler
            .handle(GetAnalysisSessionQuery { session_id: id })
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::NotFound(missing) if missing == id));
    }
}
