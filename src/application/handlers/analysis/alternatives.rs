//! Handlers for editing alternative rows in step 1.

use std::sync::Arc;

use tracing::debug;

use super::{modify_session, AnalysisError};
use crate::domain::foundation::{AlternativeId, SessionId};
use crate::domain::workflow::{AlternativeField, AnalysisSession};
use crate::ports::AnalysisSessionRepository;

/// Command to append a blank alternative row.
#[derive(Debug, Clone)]
pub struct AddAlternativeCommand {
    pub session_id: SessionId,
}

/// Result of adding an alternative.
#[derive(Debug, Clone)]
pub struct AddAlternativeResult {
    pub session: AnalysisSession,
    pub alternative_id: AlternativeId,
}

/// Command to edit one field of an alternative row.
#[derive(Debug, Clone)]
pub struct UpdateAlternativeCommand {
    pub session_id: SessionId,
    pub alternative_id: AlternativeId,
    pub field: AlternativeField,
    pub value: String,
}

/// Command to delete an alternative row.
#[derive(Debug, Clone)]
pub struct RemoveAlternativeCommand {
    pub session_id: SessionId,
    pub alternative_id: AlternativeId,
}

pub struct AddAlternativeHandler {
    repository: Arc<dyn AnalysisSessionRepository>,
}

impl AddAlternativeHandler {
    pub fn new(repository: Arc<dyn AnalysisSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: AddAlternativeCommand,
    ) -> Result<AddAlternativeResult, AnalysisError> {
        let (session, alternative_id) =
            modify_session(self.repository.as_ref(), &cmd.session_id, |session| {
                session.add_alternative()
            })
            .await?;

        debug!(
            session_id = %cmd.session_id,
            alternative_id = %alternative_id,
            "alternative added"
        );
        Ok(AddAlternativeResult {
            session,
            alternative_id,
        })
    }
}

pub struct UpdateAlternativeHandler {
    repository: Arc<dyn AnalysisSessionRepository>,
}

impl UpdateAlternativeHandler {
    pub fn new(repository: Arc<dyn AnalysisSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateAlternativeCommand,
    ) -> Result<AnalysisSession, AnalysisError> {
        let (session, ()) =
            modify_session(self.repository.as_ref(), &cmd.session_id, |session| {
                session.update_alternative(cmd.alternative_id, cmd.field, cmd.value.as_str())
            })
            .await?;

        debug!(
            session_id = %cmd.session_id,
            alternative_id = %cmd.alternative_id,
            field = %cmd.field,
            "alternative updated"
        );
        Ok(session)
    }
}

pub struct RemoveAlternativeHandler {
    repository: Arc<dyn AnalysisSessionRepository>,
}

impl RemoveAlternativeHandler {
    pub fn new(repository: Arc<dyn AnalysisSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RemoveAlternativeCommand,
    ) -> Result<AnalysisSession, AnalysisError> {
        let (session, ()) =
            modify_session(self.repository.as_ref(), &cmd.session_id, |session| {
                session.remove_alternative(cmd.alternative_id)
            })
            .await?;

        debug!(
            session_id = %cmd.session_id,
            alternative_id = %cmd.alternative_id,
            "alternative removed"
        );
        Ok(session)
    }
}
