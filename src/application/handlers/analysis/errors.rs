//! Errors surfaced by analysis command and query handlers.

use thiserror::Error;

use crate::domain::ahp::AhpError;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::workflow::WorkflowError;

/// Analysis handler errors.
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    /// A workflow guard rejected the operation.
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// Stateless computation failed a precondition.
    #[error(transparent)]
    Engine(#[from] AhpError),

    /// Repository failure.
    #[error(transparent)]
    Infrastructure(#[from] DomainError),
}

impl AnalysisError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::NotFound(_) => ErrorCode::SessionNotFound,
            AnalysisError::Workflow(err) => err.code(),
            AnalysisError::Engine(err) => err.code(),
            AnalysisError::Infrastructure(err) => err.code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_uses_session_code() {
        let id = SessionId::new();
        let err = AnalysisError::NotFound(id);
        assert_eq!(err.code(), ErrorCode::SessionNotFound);
        assert_eq!(err.to_string(), format!("Session not found: {}", id));
    }

    #[test]
    fn wrapped_errors_keep_their_codes() {
        let workflow: AnalysisError = WorkflowError::LastAlternative.into();
        assert_eq!(workflow.code(), ErrorCode::LastAlternative);

        let engine: AnalysisError = AhpError::NoAlternatives.into();
        assert_eq!(engine.code(), ErrorCode::ValidationFailed);

        let infra: AnalysisError =
            DomainError::new(ErrorCode::RepositoryError, "disk on fire").into();
        assert_eq!(infra.code(), ErrorCode::RepositoryError);
        assert_eq!(infra.to_string(), "[REPOSITORY_ERROR] disk on fire");
    }
}
