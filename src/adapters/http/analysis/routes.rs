//! Axum router configuration for the analysis endpoints.

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use super::handlers::{
    add_alternative, back_to_alternatives, compute_ahp, compute_ranking, create_session,
    delete_session, get_criteria, get_session, proceed_to_judgments, record_judgment,
    remove_alternative, start_new_analysis, update_alternative, AnalysisAppState,
};

/// Stateless engine routes.
///
/// # Routes
/// - `POST /compute` - Compute weights and ranking for the request body
/// - `GET /criteria` - Criteria table and judgment scale
pub fn ahp_routes() -> Router<AnalysisAppState> {
    Router::new()
        .route("/compute", post(compute_ahp))
        .route("/criteria", get(get_criteria))
}

/// Wizard session routes.
///
/// # Routes
/// - `POST /` - Create a session
/// - `GET /:id` - Get a session
/// - `DELETE /:id` - Delete a session
/// - `POST /:id/alternatives` - Add an alternative row
/// - `PATCH /:id/alternatives/:alt_id` - Edit one field of a row
/// - `DELETE /:id/alternatives/:alt_id` - Remove a row
/// - `POST /:id/proceed` - Step 1 → step 2
/// - `POST /:id/back` - Step 2 → step 1
/// - `PUT /:id/judgments/:pair` - Record a judgment
/// - `POST /:id/compute` - Step 2 → step 3
/// - `POST /:id/reset` - Step 3 → step 1
pub fn session_routes() -> Router<AnalysisAppState> {
    Router::new()
        .route("/", post(create_session))
        .route("/:id", get(get_session).delete(delete_session))
        .route("/:id/alternatives", post(add_alternative))
        .route(
            "/:id/alternatives/:alt_id",
            patch(update_alternative).delete(remove_alternative),
        )
        .route("/:id/proceed", post(proceed_to_judgments))
        .route("/:id/back", post(back_to_alternatives))
        .route("/:id/judgments/:pair", put(record_judgment))
        .route("/:id/compute", post(compute_ranking))
        .route("/:id/reset", post(start_new_analysis))
}

/// All analysis routes, ready to be nested under `/api`.
pub fn analysis_router() -> Router<AnalysisAppState> {
    Router::new()
        .nest("/ahp", ahp_routes())
        .nest("/sessions", session_routes())
}
