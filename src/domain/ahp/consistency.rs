//! Consistency ratio of a comparison matrix.
//!
//! Reported alongside the result; the weights are never altered by it.

use serde::{Deserialize, Serialize};

use super::matrix::{ComparisonMatrix, CriteriaWeights};

/// Conventional acceptance threshold for the consistency ratio.
pub const DEFAULT_CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Saaty's random consistency index, indexed by matrix size.
pub const RANDOM_INDEX: [f64; 11] = [
    0.0, 0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49,
];

/// What the engine does with an inconsistent judgment set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsistencyPolicy {
    /// Report the ratio and carry on.
    #[default]
    Ignore,
    /// Report the ratio and log a warning above the threshold.
    Warn,
    /// Fail the computation above the threshold.
    Reject,
}

/// Consistency diagnostics for one matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub consistency_ratio: f64,
    pub threshold: f64,
    pub is_consistent: bool,
}

impl ConsistencyReport {
    /// Estimates λmax as the mean of `(A·w)_i / w_i` and derives CI and CR.
    pub fn evaluate(
        matrix: &ComparisonMatrix,
        weights: &CriteriaWeights,
        threshold: f64,
    ) -> Self {
        let n = matrix.size();
        let w = weights.as_array();

        let lambda_max = (0..n)
            .map(|i| {
                let weighted: f64 = (0..n).map(|j| matrix.get(i, j) * w[j]).sum();
                weighted / w[i]
            })
            .sum::<f64>()
            / n as f64;

        let consistency_index = if n > 1 {
            ((lambda_max - n as f64) / (n as f64 - 1.0)).max(0.0)
        } else {
            0.0
        };

        let random_index = RANDOM_INDEX.get(n).copied().unwrap_or(0.0);
        let consistency_ratio = if random_index > 0.0 {
            consistency_index / random_index
        } else {
            0.0
        };

        Self {
            lambda_max,
            consistency_index,
            consistency_ratio,
            threshold,
            is_consistent: consistency_ratio <= threshold,
        }
    }
}
