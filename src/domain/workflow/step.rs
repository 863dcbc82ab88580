//! WorkflowStep - the three steps of the comparison wizard.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Where an analysis session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStep {
    #[default]
    CollectingAlternatives,
    CollectingJudgments,
    Computed,
}

impl WorkflowStep {
    /// 1-based position shown in the progress indicator.
    pub fn number(&self) -> u8 {
        match self {
            WorkflowStep::CollectingAlternatives => 1,
            WorkflowStep::CollectingJudgments => 2,
            WorkflowStep::Computed => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkflowStep::CollectingAlternatives => "Input Alternatives",
            WorkflowStep::CollectingJudgments => "Compare Criteria",
            WorkflowStep::Computed => "Results",
        }
    }
}

impl StateMachine for WorkflowStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WorkflowStep::*;
        matches!(
            (self, target),
            (CollectingAlternatives, CollectingJudgments)
                | (CollectingJudgments, CollectingAlternatives)
                | (CollectingJudgments, Computed)
                | (Computed, CollectingAlternatives)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WorkflowStep::*;
        match self {
            CollectingAlternatives => vec![CollectingJudgments],
            CollectingJudgments => vec![CollectingAlternatives, Computed],
            Computed => vec![CollectingAlternatives],
        }
    }
}

impl fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
