//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps, errors and the state machine trait used by the
//! AHP engine and the analysis workflow.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AlternativeId, SessionId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
