//! DeleteAnalysisSessionHandler - Discards a wizard session.

use std::sync::Arc;

use tracing::info;

use super::AnalysisError;
use crate::domain::foundation::{ErrorCode, SessionId};
use crate::ports::AnalysisSessionRepository;

/// Command to delete a session.
#[derive(Debug, Clone)]
pub struct DeleteAnalysisSessionCommand {
    pub session_id: SessionId,
}

pub struct DeleteAnalysisSessionHandler {
    repository: Arc<dyn AnalysisSessionRepository>,
}

impl DeleteAnalysisSessionHandler {
    pub fn new(repository: Arc<dyn AnalysisSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteAnalysisSessionCommand) -> Result<(), AnalysisError> {
        self.repository
            .delete(&cmd.session_id)
            .await
            .map_err(|err| match err.code {
                ErrorCode::SessionNotFound => AnalysisError::NotFound(cmd.session_id),
                _ => err.into(),
            })?;

        info!(session_id = %cmd.session_id, "analysis session deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionRepository;
    use crate::domain::workflow::AnalysisSession;

    #[tokio::test]
    async fn removes_stored_session() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let session = AnalysisSession::new(SessionId::new());
        repo.save(&session).await.unwrap();

        DeleteAnalysisSessionHandler::new(repo.clone())
            .handle(DeleteAnalysisSessionCommand {
                session_id: *session.id(),
            })
            .await
            .unwrap();

        assert_eq!(repo.session_count().await, 0);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let handler = DeleteAnalysisSessionHandler::new(Arc::new(InMemorySessionRepository::new()));
        let id = SessionId::new();
        let err = handler
            .handle(DeleteAnalysisSessionCommand { session_id: id })
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::NotFound(missing) if missing == id));
    }
}
