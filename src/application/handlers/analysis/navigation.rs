//! Handlers that move a session between wizard steps.

use std::sync::Arc;

use tracing::info;

use super::{modify_session, AnalysisError};
use crate::domain::foundation::SessionId;
use crate::domain::workflow::AnalysisSession;
use crate::ports::AnalysisSessionRepository;

/// Command addressing a whole session.
#[derive(Debug, Clone)]
pub struct SessionCommand {
    pub session_id: SessionId,
}

/// Step 1 → step 2, once every alternative row is complete.
pub struct ProceedToJudgmentsHandler {
    repository: Arc<dyn AnalysisSessionRepository>,
}

impl ProceedToJudgmentsHandler {
    pub fn new(repository: Arc<dyn AnalysisSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SessionCommand) -> Result<AnalysisSession, AnalysisError> {
        let (session, ()) = modify_session(
            self.repository.as_ref(),
            &cmd.session_id,
            AnalysisSession::proceed_to_judgments,
        )
        .await?;

        info!(
            session_id = %cmd.session_id,
            alternatives = session.alternatives().len(),
            "proceeded to judgments"
        );
        Ok(session)
    }
}

/// Step 2 → step 1; recorded judgments are kept.
pub struct BackToAlternativesHandler {
    repository: Arc<dyn AnalysisSessionRepository>,
}

impl BackToAlternativesHandler {
    pub fn new(repository: Arc<dyn AnalysisSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SessionCommand) -> Result<AnalysisSession, AnalysisError> {
        let (session, ()) = modify_session(
            self.repository.as_ref(),
            &cmd.session_id,
            AnalysisSession::back_to_alternatives,
        )
        .await?;

        info!(session_id = %cmd.session_id, "returned to alternatives");
        Ok(session)
    }
}

/// Step 3 → step 1; judgments and result are discarded.
pub struct StartNewAnalysisHandler {
    repository: Arc<dyn AnalysisSessionRepository>,
}

impl StartNewAnalysisHandler {
    pub fn new(repository: Arc<dyn AnalysisSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SessionCommand) -> Result<AnalysisSession, AnalysisError> {
        let (session, ()) = modify_session(
            self.repository.as_ref(),
            &cmd.session_id,
            AnalysisSession::start_new_analysis,
        )
        .await?;

        info!(session_id = %cmd.session_id, "analysis restarted");
        Ok(session)
    }
}
