//! AHP Module - Analytical Hierarchy Process engine.
//!
//! Pure, stateless functions that turn a set of alternatives and six
//! pairwise criterion judgments into criteria weights and a ranking.
//!
//! # Components
//!
//! - `Criterion` / `CRITERIA` - The fixed criteria table with polarity
//! - `JudgmentSet` - Pairwise judgments keyed by canonical criterion pair
//! - `ComparisonMatrix` / `CriteriaWeights` - Reciprocal matrix and its weights
//! - `AhpAnalyzer` - Matrix construction, geometric-mean weights, normalization, scoring
//! - `ConsistencyReport` - Consistency ratio diagnostics
//! - `AhpEngine` - Configured pipeline producing an `AhpResult`

mod alternative;
mod analyzer;
mod consistency;
mod criterion;
mod engine;
mod errors;
mod judgment;
mod matrix;

pub use alternative::{parse_attribute, Alternative, MAX_ALTERNATIVES};
pub use analyzer::{AhpAnalyzer, ScoredAlternative};
pub use consistency::{
    ConsistencyPolicy, ConsistencyReport, DEFAULT_CONSISTENCY_THRESHOLD, RANDOM_INDEX,
};
pub use criterion::{
    Criterion, CriterionPair, CriterionSpec, Polarity, CRITERIA, CRITERION_COUNT, PAIR_COUNT,
};
pub use engine::{AhpEngine, AhpResult};
pub use errors::AhpError;
pub use judgment::{Direction, Intensity, JudgmentSet, PairwiseJudgment};
pub use matrix::{ComparisonMatrix, CriteriaWeights, CriterionWeight};
