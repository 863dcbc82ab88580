//! CreateAnalysisSessionHandler - Starts a new comparison wizard.

use std::sync::Arc;

use tracing::info;

use super::AnalysisError;
use crate::domain::foundation::SessionId;
use crate::domain::workflow::AnalysisSession;
use crate::ports::AnalysisSessionRepository;

/// Handler for creating analysis sessions.
pub struct CreateAnalysisSessionHandler {
    repository: Arc<dyn AnalysisSessionRepository>,
}

impl CreateAnalysisSessionHandler {
    pub fn new(repository: Arc<dyn AnalysisSessionRepository>) -> Self {
        Self { repository }
    }

    /// Creates and persists a session holding one blank alternative.
    pub async fn handle(&self) -> Result<AnalysisSession, AnalysisError> {
        let session = AnalysisSession::new(SessionId::new());
        self.repository.save(&session).await?;

        info!(session_id = %session.id(), "analysis session created");
        Ok(session)
    }
}
