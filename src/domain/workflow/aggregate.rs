//! AnalysisSession aggregate - one run through the comparison wizard.

use serde::{Deserialize, Serialize};

use super::entry::{AlternativeEntry, AlternativeField};
use super::errors::WorkflowError;
use super::step::WorkflowStep;
use crate::domain::ahp::{
    AhpEngine, AhpResult, Alternative, CriterionPair, JudgmentSet, PairwiseJudgment,
    MAX_ALTERNATIVES,
};
use crate::domain::foundation::{AlternativeId, SessionId, StateMachine, Timestamp};

/// Complete rows needed before judgments can be collected.
pub const MIN_ALTERNATIVES_TO_COMPARE: usize = 2;

/// Wizard state: alternatives being edited, judgments, and the last result.
///
/// # Invariants
///
/// - Between 1 and `MAX_ALTERNATIVES` alternative rows exist
/// - Alternative ids are unique and never reused within the session
/// - `result` is present exactly when `step` is `Computed`
/// - `version` grows by one with every successful mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSession {
    id: SessionId,
    step: WorkflowStep,
    alternatives: Vec<AlternativeEntry>,
    judgments: JudgmentSet,
    result: Option<AhpResult>,
    next_alternative_id: AlternativeId,
    computed_at: Option<Timestamp>,
    version: u64,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl AnalysisSession {
    /// Starts a session with one blank alternative row.
    pub fn new(id: SessionId) -> Self {
        let first = AlternativeId::default();
        let now = Timestamp::now();
        Self {
            id,
            step: WorkflowStep::CollectingAlternatives,
            alternatives: vec![AlternativeEntry::blank(first)],
            judgments: JudgmentSet::new(),
            result: None,
            next_alternative_id: first.next(),
            computed_at: None,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn step(&self) -> WorkflowStep {
        self.step
    }

    pub fn alternatives(&self) -> &[AlternativeEntry] {
        &self.alternatives
    }

    pub fn alternative(&self, id: AlternativeId) -> Option<&AlternativeEntry> {
        self.alternatives.iter().find(|a| a.id == id)
    }

    pub fn judgments(&self) -> &JudgmentSet {
        &self.judgments
    }

    pub fn result(&self) -> Option<&AhpResult> {
        self.result.as_ref()
    }

    pub fn computed_at(&self) -> Option<&Timestamp> {
        self.computed_at.as_ref()
    }

    /// Optimistic-locking version, 1 for a fresh session.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Whether another alternative row can be added.
    pub fn can_add_alternative(&self) -> bool {
        self.step == WorkflowStep::CollectingAlternatives
            && self.alternatives.len() < MAX_ALTERNATIVES
    }

    /// Whether the alternatives step may be left.
    pub fn can_proceed(&self) -> bool {
        self.check_alternatives_ready().is_ok()
    }

    /// Whether the ranking can be computed.
    pub fn can_compute(&self) -> bool {
        self.step == WorkflowStep::CollectingJudgments && self.judgments.is_complete()
    }

    // ───────────────────────────────────────────────────────────────
    // Step 1: alternatives
    // ───────────────────────────────────────────────────────────────

    /// Appends a blank row and returns its id.
    pub fn add_alternative(&mut self) -> Result<AlternativeId, WorkflowError> {
        self.ensure_step(WorkflowStep::CollectingAlternatives)?;
        if self.alternatives.len() >= MAX_ALTERNATIVES {
            return Err(WorkflowError::AlternativeLimitReached {
                max: MAX_ALTERNATIVES,
            });
        }

        let id = self.next_alternative_id;
        self.alternatives.push(AlternativeEntry::blank(id));
        self.next_alternative_id = id.next();
        self.touch();
        Ok(id)
    }

    /// Replaces the text of one field of a row.
    pub fn update_alternative(
        &mut self,
        id: AlternativeId,
        field: AlternativeField,
        value: impl Into<String>,
    ) -> Result<(), WorkflowError> {
        self.ensure_step(WorkflowStep::CollectingAlternatives)?;
        let entry = self
            .alternatives
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(WorkflowError::AlternativeNotFound(id))?;
        entry.set(field, value);
        self.touch();
        Ok(())
    }

    /// Removes a row; the last remaining row cannot be removed.
    pub fn remove_alternative(&mut self, id: AlternativeId) -> Result<(), WorkflowError> {
        self.ensure_step(WorkflowStep::CollectingAlternatives)?;
        let position = self
            .alternatives
            .iter()
            .position(|a| a.id == id)
            .ok_or(WorkflowError::AlternativeNotFound(id))?;
        if self.alternatives.len() <= 1 {
            return Err(WorkflowError::LastAlternative);
        }
        self.alternatives.remove(position);
        self.touch();
        Ok(())
    }

    /// Moves to judgment collection once every row is complete.
    pub fn proceed_to_judgments(&mut self) -> Result<(), WorkflowError> {
        self.ensure_step(WorkflowStep::CollectingAlternatives)?;
        self.check_alternatives_ready()?;
        self.step = self.step.transition_to(WorkflowStep::CollectingJudgments)?;
        self.touch();
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Step 2: judgments
    // ───────────────────────────────────────────────────────────────

    /// Returns to editing alternatives, keeping recorded judgments.
    pub fn back_to_alternatives(&mut self) -> Result<(), WorkflowError> {
        self.ensure_step(WorkflowStep::CollectingJudgments)?;
        self.step = self.step.transition_to(WorkflowStep::CollectingAlternatives)?;
        self.touch();
        Ok(())
    }

    pub fn record_judgment(
        &mut self,
        pair: CriterionPair,
        judgment: PairwiseJudgment,
    ) -> Result<(), WorkflowError> {
        self.ensure_step(WorkflowStep::CollectingJudgments)?;
        self.judgments.record(pair, judgment);
        self.touch();
        Ok(())
    }

    /// Runs the engine over the current rows and judgments.
    pub fn compute(&mut self, engine: &AhpEngine) -> Result<&AhpResult, WorkflowError> {
        self.ensure_step(WorkflowStep::CollectingJudgments)?;
        let missing = self.judgments.missing_pairs();
        if !missing.is_empty() {
            return Err(WorkflowError::IncompleteJudgments(missing));
        }

        let result = engine.compute(&self.snapshot(), &self.judgments)?;
        self.step = self.step.transition_to(WorkflowStep::Computed)?;
        self.computed_at = Some(Timestamp::now());
        self.touch();
        Ok(&*self.result.insert(result))
    }

    // ───────────────────────────────────────────────────────────────
    // Step 3: results
    // ───────────────────────────────────────────────────────────────

    /// Starts over: judgments and result are discarded, alternatives kept.
    pub fn start_new_analysis(&mut self) -> Result<(), WorkflowError> {
        self.ensure_step(WorkflowStep::Computed)?;
        self.step = self.step.transition_to(WorkflowStep::CollectingAlternatives)?;
        self.judgments.clear();
        self.result = None;
        self.computed_at = None;
        self.touch();
        Ok(())
    }

    /// Engine snapshot of the current rows.
    pub fn snapshot(&self) -> Vec<Alternative> {
        self.alternatives
            .iter()
            .map(AlternativeEntry::to_alternative)
            .collect()
    }

    fn check_alternatives_ready(&self) -> Result<(), WorkflowError> {
        if self.alternatives.len() < MIN_ALTERNATIVES_TO_COMPARE {
            return Err(WorkflowError::NotEnoughAlternatives {
                required: MIN_ALTERNATIVES_TO_COMPARE,
                actual: self.alternatives.len(),
            });
        }
        let incomplete: Vec<AlternativeId> = self
            .alternatives
            .iter()
            .filter(|a| !a.is_complete())
            .map(|a| a.id)
            .collect();
        if !incomplete.is_empty() {
            return Err(WorkflowError::IncompleteAlternatives(incomplete));
        }
        Ok(())
    }

    fn ensure_step(&self, expected: WorkflowStep) -> Result<(), WorkflowError> {
        if self.step != expected {
            return Err(WorkflowError::WrongStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Timestamp::now();
    }
}
