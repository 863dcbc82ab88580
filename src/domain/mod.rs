//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `ahp` - Pure AHP computation: criteria, judgments, weights, scoring
//! - `workflow` - Analysis session aggregate driving the three-step wizard

pub mod ahp;
pub mod foundation;
pub mod workflow;
