//! Workflow-specific error types.

use thiserror::Error;

use super::step::WorkflowStep;
use crate::domain::ahp::{AhpError, CriterionPair};
use crate::domain::foundation::{AlternativeId, DomainError, ErrorCode, ValidationError};

/// Errors raised by guarded workflow transitions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkflowError {
    #[error("Operation requires step '{expected}', session is at '{actual}'")]
    WrongStep {
        expected: WorkflowStep,
        actual: WorkflowStep,
    },

    #[error("At most {max} alternatives are allowed")]
    AlternativeLimitReached { max: usize },

    #[error("At least one alternative must remain")]
    LastAlternative,

    #[error("Alternative {0} not found")]
    AlternativeNotFound(AlternativeId),

    #[error("At least {required} alternatives are required, got {actual}")]
    NotEnoughAlternatives { required: usize, actual: usize },

    #[error("Alternatives with missing fields: {}", join_ids(.0))]
    IncompleteAlternatives(Vec<AlternativeId>),

    #[error("Missing judgments for: {}", join_pairs(.0))]
    IncompleteJudgments(Vec<CriterionPair>),

    #[error(transparent)]
    Engine(AhpError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

fn join_ids(ids: &[AlternativeId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_pairs(pairs: &[CriterionPair]) -> String {
    pairs
        .iter()
        .map(|p| p.key())
        .collect::<Vec<_>>()
        .join(", ")
}

impl WorkflowError {
    pub fn code(&self) -> ErrorCode {
        match self {
            WorkflowError::WrongStep { .. } => ErrorCode::InvalidStateTransition,
            WorkflowError::AlternativeLimitReached { .. } => ErrorCode::AlternativeLimitReached,
            WorkflowError::LastAlternative => ErrorCode::LastAlternative,
            WorkflowError::AlternativeNotFound(_) => ErrorCode::AlternativeNotFound,
            WorkflowError::NotEnoughAlternatives { .. }
            | WorkflowError::IncompleteAlternatives(_) => ErrorCode::IncompleteAlternatives,
            WorkflowError::IncompleteJudgments(_) => ErrorCode::IncompleteJudgments,
            WorkflowError::Engine(err) => err.code(),
            WorkflowError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}

impl From<AhpError> for WorkflowError {
    fn from(err: AhpError) -> Self {
        match err {
            AhpError::MissingJudgments(pairs) => WorkflowError::IncompleteJudgments(pairs),
            other => WorkflowError::Engine(other),
        }
    }
}

impl From<WorkflowError> for DomainError {
    fn from(err: WorkflowError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
