//! HTTP adapter for the AHP engine and analysis session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AddAlternativeResponse, AhpResultResponse, AlternativeEntryResponse, ComputeAhpRequest,
    CriteriaResponse, CriterionWeightResponse, ErrorResponse, HealthResponse, IntensityResponse,
    SessionResponse, UpdateAlternativeRequest,
};
pub use handlers::{status_for, AnalysisApiError, AnalysisAppState};
pub use routes::{ahp_routes, analysis_router, session_routes};
