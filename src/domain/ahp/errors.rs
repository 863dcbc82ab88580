//! AHP engine error types.

use thiserror::Error;

use super::criterion::CriterionPair;
use crate::domain::foundation::{AlternativeId, DomainError, ErrorCode};

/// Errors raised when engine preconditions do not hold.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    #[error("Missing judgments for: {}", join_pairs(.0))]
    MissingJudgments(Vec<CriterionPair>),

    #[error("At least one alternative is required")]
    NoAlternatives,

    #[error("At most {max} alternatives can be compared, got {count}")]
    TooManyAlternatives { count: usize, max: usize },

    #[error("Alternative id {0} appears more than once")]
    DuplicateAlternativeId(AlternativeId),

    #[error("Judgments are inconsistent: consistency ratio {ratio:.3} exceeds {threshold:.3}")]
    Inconsistent { ratio: f64, threshold: f64 },
}

fn join_pairs(pairs: &[CriterionPair]) -> String {
    pairs
        .iter()
        .map(|p| p.key())
        .collect::<Vec<_>>()
        .join(", ")
}

impl AhpError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AhpError::MissingJudgments(_) => ErrorCode::IncompleteJudgments,
            AhpError::NoAlternatives
            | AhpError::TooManyAlternatives { .. }
            | AhpError::DuplicateAlternativeId(_) => ErrorCode::ValidationFailed,
            AhpError::Inconsistent { .. } => ErrorCode::InconsistentJudgments,
        }
    }
}

impl From<AhpError> for DomainError {
    fn from(err: AhpError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::criterion::Criterion;

    #[test]
    fn missing_judgments_lists_pair_keys() {
        let err = AhpError::MissingJudgments(vec![
            CriterionPair::new(Criterion::Price, Criterion::Screen).unwrap(),
            CriterionPair::new(Criterion::Battery, Criterion::Screen).unwrap(),
        ]);
        assert_eq!(
            err.to_string(),
            "Missing judgments for: price-screen, battery-screen"
        );
        assert_eq!(err.code(), ErrorCode::IncompleteJudgments);
    }

    #[test]
    fn inconsistent_formats_ratio() {
        let err = AhpError::Inconsistent {
            ratio: 0.23456,
            threshold: 0.1,
        };
        assert_eq!(
            err.to_string(),
            "Judgments are inconsistent: consistency ratio 0.235 exceeds 0.100"
        );
    }
}
