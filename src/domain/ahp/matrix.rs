//! Comparison matrix and the criteria weight vector derived from it.

use serde::{Deserialize, Serialize};

use super::criterion::{Criterion, CriterionPair, CRITERION_COUNT};
use super::errors::AhpError;
use super::judgment::JudgmentSet;

/// Reciprocal n×n pairwise comparison matrix.
///
/// Diagonal entries are 1 and `m[j][i] == 1 / m[i][j]` holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonMatrix {
    cells: [[f64; CRITERION_COUNT]; CRITERION_COUNT],
}

impl ComparisonMatrix {
    /// The matrix of a judgment set where every criterion is equally important.
    pub fn identity() -> Self {
        Self {
            cells: [[1.0; CRITERION_COUNT]; CRITERION_COUNT],
        }
    }

    /// Builds the matrix from a complete judgment set.
    ///
    /// Intransitive judgments are accepted as-is.
    pub fn from_judgments(judgments: &JudgmentSet) -> Result<Self, AhpError> {
        let missing = judgments.missing_pairs();
        if !missing.is_empty() {
            return Err(AhpError::MissingJudgments(missing));
        }

        let mut matrix = Self::identity();
        for pair in CriterionPair::canonical() {
            if let Some(judgment) = judgments.get(&pair) {
                let i = pair.first().index();
                let j = pair.second().index();
                let upper = judgment.upper_entry();
                matrix.cells[i][j] = upper;
                matrix.cells[j][i] = 1.0 / upper;
            }
        }
        Ok(matrix)
    }

    pub fn size(&self) -> usize {
        CRITERION_COUNT
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row][col]
    }

    pub fn row(&self, row: usize) -> &[f64; CRITERION_COUNT] {
        &self.cells[row]
    }

    pub fn rows(&self) -> &[[f64; CRITERION_COUNT]; CRITERION_COUNT] {
        &self.cells
    }
}

/// One weight per criterion, summing to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriteriaWeights([f64; CRITERION_COUNT]);

impl CriteriaWeights {
    /// 0.25 for every criterion.
    pub fn equal() -> Self {
        Self([1.0 / CRITERION_COUNT as f64; CRITERION_COUNT])
    }

    /// Normalizes raw non-negative priorities so they sum to 1.
    ///
    /// A zero total falls back to equal weights.
    pub fn from_raw(raw: [f64; CRITERION_COUNT]) -> Self {
        let total: f64 = raw.iter().sum();
        if total <= 0.0 || !total.is_finite() {
            return Self::equal();
        }
        let mut weights = raw;
        for w in weights.iter_mut() {
            *w /= total;
        }
        Self(weights)
    }

    pub fn get(&self, criterion: Criterion) -> f64 {
        self.0[criterion.index()]
    }

    pub fn as_array(&self) -> &[f64; CRITERION_COUNT] {
        &self.0
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Criterion/weight pairs in canonical order.
    pub fn breakdown(&self) -> Vec<CriterionWeight> {
        Criterion::ALL
            .iter()
            .map(|&criterion| CriterionWeight {
                criterion,
                weight: self.get(criterion),
            })
            .collect()
    }

    /// The criterion with the largest weight, first in canonical order on ties.
    pub fn dominant(&self) -> Criterion {
        let mut best = Criterion::ALL[0];
        for c in Criterion::ALL.iter().skip(1) {
            if self.get(*c) > self.get(best) {
                best = *c;
            }
        }
        best
    }
}

/// Weight of a single criterion, as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeight {
    pub criterion: Criterion,
    pub weight: f64,
}
