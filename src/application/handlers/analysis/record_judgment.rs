//! RecordJudgmentHandler - Stores one pairwise criterion judgment.

use std::sync::Arc;

use tracing::debug;

use super::{modify_session, AnalysisError};
use crate::domain::ahp::{CriterionPair, PairwiseJudgment};
use crate::domain::foundation::SessionId;
use crate::domain::workflow::AnalysisSession;
use crate::ports::AnalysisSessionRepository;

/// Command to set the judgment for one criterion pair.
#[derive(Debug, Clone)]
pub struct RecordJudgmentCommand {
    pub session_id: SessionId,
    pub pair: CriterionPair,
    pub judgment: PairwiseJudgment,
}

pub struct RecordJudgmentHandler {
    repository: Arc<dyn AnalysisSessionRepository>,
}

impl RecordJudgmentHandler {
    pub fn new(repository: Arc<dyn AnalysisSessionRepository>) -> Self {
        Self { repository }
    }

    /// Records the judgment, replacing any earlier one for the same pair.
    pub async fn handle(
        &self,
        cmd: RecordJudgmentCommand,
    ) -> Result<AnalysisSession, AnalysisError> {
        let (session, ()) =
            modify_session(self.repository.as_ref(), &cmd.session_id, |session| {
                session.record_judgment(cmd.pair, cmd.judgment)
            })
            .await?;

        debug!(
            session_id = %cmd.session_id,
            pair = %cmd.pair,
            value = cmd.judgment.value.value(),
            favored = %cmd.judgment.favored(cmd.pair),
            recorded = session.judgments().len(),
            "judgment recorded"
        );
        Ok(session)
    }
}
