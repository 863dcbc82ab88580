//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::analysis::{
    AddAlternativeCommand, AddAlternativeHandler, AddAlternativeResult, AnalysisError,
    BackToAlternativesHandler, ComputeAhpCommand, ComputeAhpHandler, ComputeRankingCommand,
    ComputeRankingHandler, CreateAnalysisSessionHandler, DeleteAnalysisSessionCommand,
    DeleteAnalysisSessionHandler, GetAnalysisSessionHandler, GetAnalysisSessionQuery,
    ProceedToJudgmentsHandler, RecordJudgmentCommand, RecordJudgmentHandler,
    RemoveAlternativeCommand, RemoveAlternativeHandler, SessionCommand, SessionSweeper,
    SessionSweeperConfig, StartNewAnalysisHandler, UpdateAlternativeCommand,
    UpdateAlternativeHandler,
};
