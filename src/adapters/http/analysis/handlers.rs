//! HTTP handlers for the AHP and analysis session endpoints.
//!
//! These handlers connect Axum routes to the application layer handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::application::handlers::analysis::{
    AddAlternativeCommand, AddAlternativeHandler, AnalysisError, BackToAlternativesHandler,
    ComputeAhpCommand, ComputeAhpHandler, ComputeRankingCommand, ComputeRankingHandler,
    CreateAnalysisSessionHandler, DeleteAnalysisSessionCommand, DeleteAnalysisSessionHandler,
    GetAnalysisSessionHandler, GetAnalysisSessionQuery, ProceedToJudgmentsHandler, RecordJudgmentCommand, RecordJudgmentHandler,
    RemoveAlternativeCommand, RemoveAlternativeHandler, SessionCommand, StartNewAnalysisHandler,
    UpdateAlternativeCommand, UpdateAlternativeHandler,
};
use crate::domain::ahp::{AhpEngine, AhpError, CriterionPair, PairwiseJudgment};
use crate::domain::foundation::{AlternativeId, ErrorCode, SessionId, Timestamp};
use crate::domain::workflow::WorkflowError;
use crate::ports::AnalysisSessionRepository;

use super::dto::{
    AddAlternativeResponse, AhpResultResponse, ComputeAhpRequest, CriteriaResponse,
    ErrorResponse, SessionResponse, UpdateAlternativeRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the analysis endpoints.
#[derive(Clone)]
pub struct AnalysisAppState {
    pub session_repository: Arc<dyn AnalysisSessionRepository>,
    pub engine: AhpEngine,
}

impl AnalysisAppState {
    pub fn new(session_repository: Arc<dyn AnalysisSessionRepository>, engine: AhpEngine) -> Self {
        Self {
            session_repository,
            engine,
        }
    }

    pub fn create_session_handler(&self) -> CreateAnalysisSessionHandler {
        CreateAnalysisSessionHandler::new(self.session_repository.clone())
    }

    pub fn get_session_handler(&self) -> GetAnalysisSessionHandler {
        GetAnalysisSessionHandler::new(self.session_repository.clone())
    }

    pub fn delete_session_handler(&self) -> DeleteAnalysisSessionHandler {
        DeleteAnalysisSessionHandler::new(self.session_repository.clone())
    }

    pub fn add_alternative_handler(&self) -> AddAlternativeHandler {
        AddAlternativeHandler::new(self.session_repository.clone())
    }

    pub fn update_alternative_handler(&self) -> UpdateAlternativeHandler {
        UpdateAlternativeHandler::new(self.session_repository.clone())
    }

    pub fn remove_alternative_handler(&self) -> RemoveAlternativeHandler {
        RemoveAlternativeHandler::new(self.session_repository.clone())
    }

    pub fn proceed_handler(&self) -> ProceedToJudgmentsHandler {
        ProceedToJudgmentsHandler::new(self.session_repository.clone())
    }

    pub fn back_handler(&self) -> BackToAlternativesHandler {
        BackToAlternativesHandler::new(self.session_repository.clone())
    }

    pub fn record_judgment_handler(&self) -> RecordJudgmentHandler {
        RecordJudgmentHandler::new(self.session_repository.clone())
    }

    pub fn compute_ranking_handler(&self) -> ComputeRankingHandler {
        ComputeRankingHandler::new(self.session_repository.clone(), self.engine)
    }

    pub fn start_new_analysis_handler(&self) -> StartNewAnalysisHandler {
        StartNewAnalysisHandler::new(self.session_repository.clone())
    }

    pub fn compute_ahp_handler(&self) -> ComputeAhpHandler {
        ComputeAhpHandler::new(self.engine)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Stateless AHP endpoints
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/ahp/compute - Weights and ranking for the supplied data
pub async fn compute_ahp(
    State(state): State<AnalysisAppState>,
    body: Result<Json<ComputeAhpRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let Json(req) = body?;
    let cmd = ComputeAhpCommand {
        alternatives: req.alternatives,
        judgments: req.judgments,
    };

    let result = state.compute_ahp_handler().handle(cmd)?;
    Ok(Json(AhpResultResponse::new(&result, Timestamp::now())))
}

/// GET /api/ahp/criteria - Criteria table and judgment scale
pub async fn get_criteria() -> impl IntoResponse {
    Json(CriteriaResponse::current())
}

// ════════════════════════════════════════════════════════════════════════════════
// Session endpoints
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Start a new wizard session
pub async fn create_session(
    State(state): State<AnalysisAppState>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let session = state.create_session_handler().handle().await?;
    Ok((StatusCode::CREATED, Json(SessionResponse::from(session))))
}

/// GET /api/sessions/:id - Current wizard state
pub async fn get_session(
    State(state): State<AnalysisAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let query = GetAnalysisSessionQuery {
        session_id: parse_session_id(&session_id)?,
    };
    let session = state.get_session_handler().handle(query).await?;
    Ok(Json(SessionResponse::from(session)))
}

/// DELETE /api/sessions/:id - Discard a session
pub async fn delete_session(
    State(state): State<AnalysisAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let cmd = DeleteAnalysisSessionCommand {
        session_id: parse_session_id(&session_id)?,
    };
    state.delete_session_handler().handle(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/sessions/:id/alternatives - Append a blank alternative row
pub async fn add_alternative(
    State(state): State<AnalysisAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let cmd = AddAlternativeCommand {
        session_id: parse_session_id(&session_id)?,
    };
    let result = state.add_alternative_handler().handle(cmd).await?;
    let response = AddAlternativeResponse {
        alternative_id: result.alternative_id,
        session: result.session.into(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// PATCH /api/sessions/:id/alternatives/:alt_id - Edit one field of a row
pub async fn update_alternative(
    State(state): State<AnalysisAppState>,
    Path((session_id, alternative_id)): Path<(String, String)>,
    body: Result<Json<UpdateAlternativeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let Json(req) = body?;
    let cmd = UpdateAlternativeCommand {
        session_id: parse_session_id(&session_id)?,
        alternative_id: parse_alternative_id(&alternative_id)?,
        field: req.field,
        value: req.value,
    };
    let session = state.update_alternative_handler().handle(cmd).await?;
    Ok(Json(SessionResponse::from(session)))
}

/// DELETE /api/sessions/:id/alternatives/:alt_id - Remove a row
pub async fn remove_alternative(
    State(state): State<AnalysisAppState>,
    Path((session_id, alternative_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let cmd = RemoveAlternativeCommand {
        session_id: parse_session_id(&session_id)?,
        alternative_id: parse_alternative_id(&alternative_id)?,
    };
    let session = state.remove_alternative_handler().handle(cmd).await?;
    Ok(Json(SessionResponse::from(session)))
}

/// POST /api/sessions/:id/proceed - Move on to pairwise judgments
pub async fn proceed_to_judgments(
    State(state): State<AnalysisAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let cmd = SessionCommand {
        session_id: parse_session_id(&session_id)?,
    };
    let session = state.proceed_handler().handle(cmd).await?;
    Ok(Json(SessionResponse::from(session)))
}

/// POST /api/sessions/:id/back - Return to alternatives
pub async fn back_to_alternatives(
    State(state): State<AnalysisAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let cmd = SessionCommand {
        session_id: parse_session_id(&session_id)?,
    };
    let session = state.back_handler().handle(cmd).await?;
    Ok(Json(SessionResponse::from(session)))
}

/// PUT /api/sessions/:id/judgments/:pair - Set one pairwise judgment
pub async fn record_judgment(
    State(state): State<AnalysisAppState>,
    Path((session_id, pair)): Path<(String, String)>,
    body: Result<Json<PairwiseJudgment>, JsonRejection>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let Json(judgment) = body?;
    let cmd = RecordJudgmentCommand {
        session_id: parse_session_id(&session_id)?,
        pair: parse_pair(&pair)?,
        judgment,
    };
    let session = state.record_judgment_handler().handle(cmd).await?;
    Ok(Json(SessionResponse::from(session)))
}

/// POST /api/sessions/:id/compute - Compute and show the ranking
pub async fn compute_ranking(
    State(state): State<AnalysisAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let cmd = ComputeRankingCommand {
        session_id: parse_session_id(&session_id)?,
    };
    let session = state.compute_ranking_handler().handle(cmd).await?;
    Ok(Json(SessionResponse::from(session)))
}

/// POST /api/sessions/:id/reset - Start a new analysis with the same alternatives
pub async fn start_new_analysis(
    State(state): State<AnalysisAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let cmd = SessionCommand {
        session_id: parse_session_id(&session_id)?,
    };
    let session = state.start_new_analysis_handler().handle(cmd).await?;
    Ok(Json(SessionResponse::from(session)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Path parsing
// ════════════════════════════════════════════════════════════════════════════════

fn parse_session_id(raw: &str) -> Result<SessionId, AnalysisApiError> {
    raw.parse()
        .map_err(|_| AnalysisApiError::BadRequest(format!("Invalid session ID: {}", raw)))
}

fn parse_alternative_id(raw: &str) -> Result<AlternativeId, AnalysisApiError> {
    raw.parse()
        .map_err(|e| AnalysisApiError::BadRequest(format!("Invalid alternative ID: {}", e)))
}

fn parse_pair(raw: &str) -> Result<CriterionPair, AnalysisApiError> {
    raw.parse()
        .map_err(|e| AnalysisApiError::BadRequest(format!("Invalid criterion pair: {}", e)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper that converts analysis errors to HTTP responses.
#[derive(Debug)]
pub enum AnalysisApiError {
    /// Malformed path segment or request body.
    BadRequest(String),
    Analysis(AnalysisError),
}

impl From<AnalysisError> for AnalysisApiError {
    fn from(err: AnalysisError) -> Self {
        Self::Analysis(err)
    }
}

impl From<JsonRejection> for AnalysisApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// HTTP status for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::SessionNotFound | ErrorCode::AlternativeNotFound => StatusCode::NOT_FOUND,
        ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::InvalidStateTransition
        | ErrorCode::AlternativeLimitReached
        | ErrorCode::LastAlternative
        | ErrorCode::IncompleteAlternatives
        | ErrorCode::IncompleteJudgments
        | ErrorCode::InconsistentJudgments => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::ConcurrencyConflict => StatusCode::CONFLICT,
        ErrorCode::RepositoryError | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn details_for(err: &AnalysisError) -> Option<serde_json::Value> {
    let pair_keys = |pairs: &[CriterionPair]| -> Vec<String> {
        pairs.iter().map(CriterionPair::key).collect()
    };
    match err {
        AnalysisError::Workflow(WorkflowError::IncompleteAlternatives(ids)) => {
            Some(json!({ "alternative_ids": ids }))
        }
        AnalysisError::Workflow(WorkflowError::IncompleteJudgments(pairs))
        | AnalysisError::Engine(AhpError::MissingJudgments(pairs))
        | AnalysisError::Workflow(WorkflowError::Engine(AhpError::MissingJudgments(pairs))) => {
            Some(json!({ "missing_pairs": pair_keys(pairs) }))
        }
        AnalysisError::Engine(AhpError::Inconsistent { ratio, threshold })
        | AnalysisError::Workflow(WorkflowError::Engine(AhpError::Inconsistent {
            ratio,
            threshold,
        })) => Some(json!({ "consistency_ratio": ratio, "threshold": threshold })),
        AnalysisError::Workflow(WorkflowError::WrongStep { expected, actual }) => {
            Some(json!({ "expected_step": expected, "actual_step": actual }))
        }
        _ => None,
    }
}

impl IntoResponse for AnalysisApiError {
    fn into_response(self) -> Response {
        match self {
            AnalysisApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(message)))
                    .into_response()
            }
            AnalysisApiError::Analysis(err) => {
                let code = err.code();
                let status = status_for(code);
                if status.is_server_error() {
                    tracing::error!(error = %err, "analysis request failed");
                }
                let mut body = ErrorResponse::new(code.to_string(), err.to_string());
                if let Some(details) = details_for(&err) {
                    body = body.with_details(details);
                }
                (status, Json(body)).into_response()
            }
        }
    }
}
