//! Ranking computation handlers.
//!
//! `ComputeRankingHandler` finishes a wizard session; `ComputeAhpHandler`
//! runs the engine directly over caller-supplied data without a session.

use std::sync::Arc;

use tracing::info;

use super::{modify_session, AnalysisError};
use crate::domain::ahp::{AhpEngine, AhpResult, Alternative, JudgmentSet};
use crate::domain::foundation::SessionId;
use crate::domain::workflow::AnalysisSession;
use crate::ports::AnalysisSessionRepository;

/// Command to compute the ranking of a session in step 2.
#[derive(Debug, Clone)]
pub struct ComputeRankingCommand {
    pub session_id: SessionId,
}

pub struct ComputeRankingHandler {
    repository: Arc<dyn AnalysisSessionRepository>,
    engine: AhpEngine,
}

impl ComputeRankingHandler {
    pub fn new(repository: Arc<dyn AnalysisSessionRepository>, engine: AhpEngine) -> Self {
        Self { repository, engine }
    }

    /// Computes and stores the result, moving the session to step 3.
    pub async fn handle(
        &self,
        cmd: ComputeRankingCommand,
    ) -> Result<AnalysisSession, AnalysisError> {
        let engine = self.engine;
        let (session, (best, consistency_ratio)) =
            modify_session(self.repository.as_ref(), &cmd.session_id, |session| {
                let result = session.compute(&engine)?;
                Ok((
                    result.best().map(|s| s.alternative.name.clone()),
                    result.consistency.consistency_ratio,
                ))
            })
            .await?;

        info!(
            session_id = %cmd.session_id,
            best = best.as_deref().unwrap_or_default(),
            consistency_ratio,
            "ranking computed"
        );
        Ok(session)
    }
}

/// Command for a one-shot computation.
#[derive(Debug, Clone)]
pub struct ComputeAhpCommand {
    pub alternatives: Vec<Alternative>,
    pub judgments: JudgmentSet,
}

/// Stateless computation; nothing is persisted.
pub struct ComputeAhpHandler {
    engine: AhpEngine,
}

impl ComputeAhpHandler {
    pub fn new(engine: AhpEngine) -> Self {
        Self { engine }
    }

    pub fn handle(&self, cmd: ComputeAhpCommand) -> Result<AhpResult, AnalysisError> {
        Ok(self.engine.compute(&cmd.alternatives, &cmd.judgments)?)
    }
}
