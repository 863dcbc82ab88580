//! AHP Analyzer - Matrix construction, geometric-mean weights, attribute
//! normalization and weighted scoring.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::alternative::Alternative;
use super::criterion::{Criterion, Polarity, CRITERION_COUNT};
use super::errors::AhpError;
use super::judgment::JudgmentSet;
use super::matrix::{ComparisonMatrix, CriteriaWeights};
use crate::domain::foundation::AlternativeId;

/// An alternative augmented with its computed score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAlternative {
    #[serde(flatten)]
    pub alternative: Alternative,
    pub score: f64,
}

/// Stateless AHP computations.
pub struct AhpAnalyzer;

impl AhpAnalyzer {
    /// Builds the reciprocal comparison matrix from six judgments.
    ///
    /// # Errors
    /// `AhpError::MissingJudgments` if any canonical pair is unjudged.
    pub fn build_comparison_matrix(judgments: &JudgmentSet) -> Result<ComparisonMatrix, AhpError> {
        ComparisonMatrix::from_judgments(judgments)
    }

    /// Derives criteria weights with the geometric-mean method.
    ///
    /// # Algorithm
    /// `w_i = (Π_j m[i][j])^(1/n)`, then each `w_i` is divided by `Σ w_k`.
    pub fn compute_weights(matrix: &ComparisonMatrix) -> CriteriaWeights {
        let n = matrix.size() as f64;
        let mut raw = [0.0; CRITERION_COUNT];
        for (i, slot) in raw.iter_mut().enumerate() {
            let product: f64 = matrix.row(i).iter().product();
            *slot = product.powf(1.0 / n);
        }
        CriteriaWeights::from_raw(raw)
    }

    /// Rescales one criterion across all alternatives to `[0, 1]`.
    ///
    /// # Edge Cases
    /// - All values equal: every alternative gets 1
    /// - Price is inverted: the cheapest alternative gets 1
    pub fn normalize_attribute(
        alternatives: &[Alternative],
        criterion: Criterion,
    ) -> HashMap<AlternativeId, f64> {
        let values: Vec<f64> = alternatives.iter().map(|a| a.value(criterion)).collect();
        alternatives
            .iter()
            .zip(Self::normalize_values(&values, criterion.polarity()))
            .map(|(alt, normalized)| (alt.id, normalized))
            .collect()
    }

    /// Positional form of [`AhpAnalyzer::normalize_attribute`].
    pub fn normalize_values(values: &[f64], polarity: Polarity) -> Vec<f64> {
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);

        values
            .iter()
            .map(|&value| {
                if max == min {
                    return 1.0;
                }
                match polarity {
                    Polarity::HigherIsBetter => (value - min) / (max - min),
                    Polarity::LowerIsBetter => (max - value) / (max - min),
                }
            })
            .collect()
    }

    /// Scores every alternative and sorts by descending score.
    ///
    /// Equal scores keep their input order.
    pub fn score(alternatives: &[Alternative], weights: &CriteriaWeights) -> Vec<ScoredAlternative> {
        let mut scores = vec![0.0; alternatives.len()];

        for criterion in Criterion::ALL {
            let values: Vec<f64> = alternatives.iter().map(|a| a.value(criterion)).collect();
            let normalized = Self::normalize_values(&values, criterion.polarity());
            let weight = weights.get(criterion);
            for (score, n) in scores.iter_mut().zip(normalized) {
                *score += n * weight;
            }
        }

        let mut ranking: Vec<ScoredAlternative> = alternatives
            .iter()
            .cloned()
            .zip(scores)
            .map(|(alternative, score)| ScoredAlternative { alternative, score })
            .collect();

        // sort_by is stable
        ranking.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranking
    }
}
