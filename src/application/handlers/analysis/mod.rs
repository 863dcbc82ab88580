//! Analysis handlers.
//!
//! Commands and queries that drive an `AnalysisSession` through the wizard,
//! plus the stateless one-shot computation.

mod alternatives;
mod compute;
mod create_session;
mod delete_session;
mod errors;
mod get_session;
mod navigation;
mod record_judgment;
mod session_sweeper;

pub use alternatives::{
    AddAlternativeCommand, AddAlternativeHandler, AddAlternativeResult, RemoveAlternativeCommand,
    RemoveAlternativeHandler, UpdateAlternativeCommand, UpdateAlternativeHandler,
};
pub use compute::{
    ComputeAhpCommand, ComputeAhpHandler, ComputeRankingCommand, ComputeRankingHandler,
};
pub use create_session::CreateAnalysisSessionHandler;
pub use delete_session::{DeleteAnalysisSessionCommand, DeleteAnalysisSessionHandler};
pub use errors::AnalysisError;
pub use get_session::{GetAnalysisSessionHandler, GetAnalysisSessionQuery};
pub use navigation::{
    BackToAlternativesHandler, ProceedToJudgmentsHandler, SessionCommand, StartNewAnalysisHandler,
};
pub use record_judgment::{RecordJudgmentCommand, RecordJudgmentHandler};
pub use session_sweeper::{SessionSweeper, SessionSweeperConfig};

use tracing::debug;

use crate::domain::foundation::{ErrorCode, SessionId};
use crate::domain::workflow::{AnalysisSession, WorkflowError};
use crate::ports::AnalysisSessionRepository;

/// Load/change/save rounds attempted before a version conflict is reported.
const MAX_UPDATE_ATTEMPTS: usize = 5;

async fn load_session(
    repository: &dyn AnalysisSessionRepository,
    id: &SessionId,
) -> Result<AnalysisSession, AnalysisError> {
    repository
        .find_by_id(id)
        .await?
        .ok_or(AnalysisError::NotFound(*id))
}

/// Applies `change` to the stored session under optimistic locking.
///
/// A write that loses a race reloads the session and applies `change` again,
/// so concurrent edits to different fields all land. After
/// `MAX_UPDATE_ATTEMPTS` lost races the `ConcurrencyConflict` is returned.
async fn modify_session<T, F>(
    repository: &dyn AnalysisSessionRepository,
    id: &SessionId,
    mut change: F,
) -> Result<(AnalysisSession, T), AnalysisError>
where
    F: FnMut(&mut AnalysisSession) -> Result<T, WorkflowError> + Send,
    T: Send,
{
    let mut attempt = 1;
    loop {
        let mut session = load_session(repository, id).await?;
        let loaded_version = session.version();
        let output = change(&mut session)?;

        match repository.update(&session, loaded_version).await {
            Ok(()) => return Ok((session, output)),
            Err(err)
                if err.code == ErrorCode::ConcurrencyConflict
                    && attempt < MAX_UPDATE_ATTEMPTS =>
            {
                debug!(session_id = %id, attempt, "session changed concurrently, retrying");
                attempt += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::adapters::storage::InMemorySessionRepository;
    use crate::domain::ahp::{Criterion, CriterionPair, PairwiseJudgment};
    use crate::domain::foundation::SessionId;
    use crate::domain::workflow::{AlternativeField, AnalysisSession};
    use crate::ports::AnalysisSessionRepository;

    /// Two complete rows in step 1. Alpha dominates Beta on every criterion.
    pub fn complete_session() -> AnalysisSession {
        let mut session = AnalysisSession::new(SessionId::new());
        let second = session.add_alternative().unwrap();
        let rows = [
            (session.alternatives()[0].id, "Alpha", ["5", "8", "7", "6"]),
            (second, "Beta", ["10", "5", "5", "5"]),
        ];
        for (id, name, values) in rows {
            session
                .update_alternative(id, AlternativeField::Name, name)
                .unwrap();
            for (criterion, value) in Criterion::ALL.iter().zip(values) {
                session
                    .update_alternative(id, AlternativeField::Attribute(*criterion), value)
                    .unwrap();
            }
        }
        session
    }

    /// Step 2 with all six judgments set to equal.
    pub fn judged_session() -> AnalysisSession {
        let mut session = complete_session();
        session.proceed_to_judgments().unwrap();
        for pair in CriterionPair::canonical() {
            session
                .record_judgment(pair, PairwiseJudgment::equal())
                .unwrap();
        }
        session
    }

    pub async fn saved(session: AnalysisSession) -> (Arc<InMemorySessionRepository>, SessionId) {
        let repo = Arc::new(InMemorySessionRepository::new());
        repo.save(&session).await.unwrap();
        (repo, *session.id())
    }
}
