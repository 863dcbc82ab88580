//! Workflow Module - The three-step comparison wizard.
//!
//! An `AnalysisSession` walks through collecting alternatives, collecting
//! pairwise judgments, and showing the computed ranking. Every transition is
//! guarded; the AHP math itself lives in [`crate::domain::ahp`].

mod aggregate;
mod entry;
mod errors;
mod step;

pub use aggregate::{AnalysisSession, MIN_ALTERNATIVES_TO_COMPARE};
pub use entry::{AlternativeEntry, AlternativeField};
pub use errors::WorkflowError;
pub use step::WorkflowStep;
