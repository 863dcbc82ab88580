//! AHP Engine - Runs the full pipeline from judgments to ranking.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::alternative::{Alternative, MAX_ALTERNATIVES};
use super::analyzer::{AhpAnalyzer, ScoredAlternative};
use super::consistency::{ConsistencyPolicy, ConsistencyReport, DEFAULT_CONSISTENCY_THRESHOLD};
use super::errors::AhpError;
use super::judgment::JudgmentSet;
use super::matrix::CriterionWeight;

/// Weights and ranking produced by one computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpResult {
    /// One entry per criterion in canonical order, summing to 1.
    pub weights: Vec<CriterionWeight>,
    /// Alternatives by descending score.
    pub ranking: Vec<ScoredAlternative>,
    pub consistency: ConsistencyReport,
}

impl AhpResult {
    /// The top-ranked alternative, if any.
    pub fn best(&self) -> Option<&ScoredAlternative> {
        self.ranking.first()
    }
}

/// Configured entry point to the AHP computation.
///
/// Holds no mutable state, so one instance can serve concurrent callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AhpEngine {
    policy: ConsistencyPolicy,
    threshold: f64,
}

impl Default for AhpEngine {
    fn default() -> Self {
        Self::new(ConsistencyPolicy::default(), DEFAULT_CONSISTENCY_THRESHOLD)
    }
}

impl AhpEngine {
    pub fn new(policy: ConsistencyPolicy, threshold: f64) -> Self {
        Self { policy, threshold }
    }

    pub fn policy(&self) -> ConsistencyPolicy {
        self.policy
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Computes criteria weights and the ranked alternatives.
    ///
    /// # Errors
    /// - `MissingJudgments` if any pair is unjudged
    /// - `NoAlternatives` / `TooManyAlternatives` / `DuplicateAlternativeId`
    ///   for a malformed alternatives list
    /// - `Inconsistent` only under [`ConsistencyPolicy::Reject`]
    pub fn compute(
        &self,
        alternatives: &[Alternative],
        judgments: &JudgmentSet,
    ) -> Result<AhpResult, AhpError> {
        Self::check_alternatives(alternatives)?;

        let matrix = AhpAnalyzer::build_comparison_matrix(judgments)?;
        let weights = AhpAnalyzer::compute_weights(&matrix);
        let consistency = ConsistencyReport::evaluate(&matrix, &weights, self.threshold);

        if !consistency.is_consistent {
            match self.policy {
                ConsistencyPolicy::Ignore => {}
                ConsistencyPolicy::Warn => tracing::warn!(
                    consistency_ratio = consistency.consistency_ratio,
                    threshold = self.threshold,
                    "pairwise judgments exceed consistency threshold"
                ),
                ConsistencyPolicy::Reject => {
                    return Err(AhpError::Inconsistent {
                        ratio: consistency.consistency_ratio,
                        threshold: self.threshold,
                    })
                }
            }
        }

        let ranking = AhpAnalyzer::score(alternatives, &weights);

        tracing::debug!(
            alternatives = alternatives.len(),
            dominant_criterion = %weights.dominant(),
            consistency_ratio = consistency.consistency_ratio,
            "ahp ranking computed"
        );

        Ok(AhpResult {
            weights: weights.breakdown(),
            ranking,
            consistency,
        })
    }

    fn check_alternatives(alternatives: &[Alternative]) -> Result<(), AhpError> {
        if alternatives.is_empty() {
            return Err(AhpError::NoAlternatives);
        }
        if alternatives.len() > MAX_ALTERNATIVES {
            return Err(AhpError::TooManyAlternatives {
                count: alternatives.len(),
                max: MAX_ALTERNATIVES,
            });
        }
        let mut seen = HashSet::new();
        for alt in alternatives {
            if !seen.insert(alt.id) {
                return Err(AhpError::DuplicateAlternativeId(alt.id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::criterion::{Criterion, CriterionPair};
    use crate::domain::ahp::judgment::{Intensity, PairwiseJudgment};
    use crate::domain::foundation::AlternativeId;

    fn phone(n: u32, name: &str, values: [f64; 4]) -> Alternative {
        let mut alt = Alternative::new(AlternativeId::new(n).unwrap(), name);
        for (c, v) in Criterion::ALL.iter().zip(values) {
            alt.set(*c, v);
        }
        alt
    }

    fn two_phones() -> Vec<Alternative> {
        vec![
            phone(1, "X", [5.0, 8.0, 7.0, 6.0]),
            phone(2, "Y", [10.0, 5.0, 5.0, 5.0]),
        ]
    }

    fn circular() -> JudgmentSet {
        let p = |a, b| CriterionPair::new(a, b).unwrap();
        JudgmentSet::all_equal()
            .with(p(Criterion::Price, Criterion::Performance), PairwiseJudgment::left(Intensity::Absolute))
            .with(p(Criterion::Performance, Criterion::Battery), PairwiseJudgment::left(Intensity::Absolute))
            .with(p(Criterion::Price, Criterion::Battery), PairwiseJudgment::right(Intensity::Absolute))
    }

    #[test]
    fn compute_returns_weights_and_ranking() {
        let result = AhpEngine::default()
            .compute(&two_phones(), &JudgmentSet::all_equal())
            .unwrap();

        assert_eq!(result.weights.len(), 4);
        assert!(result.weights.iter().all(|w| (w.weight - 0.25).abs() < 1e-12));
        assert_eq!(result.best().unwrap().alternative.name, "X");
        assert!(result.consistency.is_consistent);
    }

    #[test]
    fn compute_is_idempotent() {
        let engine = AhpEngine::default();
        let alts = two_phones();
        let judgments = circular();
        assert_eq!(
            engine.compute(&alts, &judgments).unwrap(),
            engine.compute(&alts, &judgments).unwrap()
        );
    }

    #[test]
    fn ignore_policy_accepts_inconsistent_judgments() {
        let result = AhpEngine::default().compute(&two_phones(), &circular()).unwrap();
        assert!(!result.consistency.is_consistent);
    }

    #[test]
    fn warn_policy_still_returns_result() {
        let engine = AhpEngine::new(ConsistencyPolicy::Warn, DEFAULT_CONSISTENCY_THRESHOLD);
        assert!(engine.compute(&two_phones(), &circular()).is_ok());
    }

    #[test]
    fn reject_policy_fails_inconsistent_judgments() {
        let engine = AhpEngine::new(ConsistencyPolicy::Reject, DEFAULT_CONSISTENCY_THRESHOLD);
        assert!(matches!(
            engine.compute(&two_phones(), &circular()),
            Err(AhpError::Inconsistent { .. })
        ));
        assert!(engine.compute(&two_phones(), &JudgmentSet::all_equal()).is_ok());
    }

    #[test]
    fn rejects_missing_judgments() {
        assert!(matches!(
            AhpEngine::default().compute(&two_phones(), &JudgmentSet::new()),
            Err(AhpError::MissingJudgments(_))
        ));
    }

    #[test]
    fn rejects_malformed_alternative_lists() {
        let engine = AhpEngine::default();
        let judgments = JudgmentSet::all_equal();

        assert_eq!(engine.compute(&[], &judgments), Err(AhpError::NoAlternatives));

        let four: Vec<_> = (1..=4).map(|n| phone(n, "P", [1.0; 4])).collect();
        assert!(matches!(
            engine.compute(&four, &judgments),
            Err(AhpError::TooManyAlternatives { count: 4, max: 3 })
        ));

        let dup = vec![phone(1, "A", [1.0; 4]), phone(1, "B", [2.0; 4])];
        assert!(matches!(
            engine.compute(&dup, &judgments),
            Err(AhpError::DuplicateAlternativeId(_))
        ));
    }

    #[test]
    fn single_alternative_scores_one() {
        let alts = vec![phone(1, "Only", [4.0, 4.0, 4.0, 4.0])];
        let result = AhpEngine::default().compute(&alts, &JudgmentSet::all_equal()).unwrap();
        assert!((result.ranking[0].score - 1.0).abs() < 1e-12);
    }
}
