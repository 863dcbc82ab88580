//! Ports - Interfaces for external dependencies.
//!
//! Ports define the contracts between the domain and the outside world.
//! Adapters implement these ports.
//!
//! - `AnalysisSessionRepository` - Persistence for wizard sessions

mod session_repository;

pub use session_repository::AnalysisSessionRepository;
