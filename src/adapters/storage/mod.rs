//! Storage Adapters
//!
//! Implementations of the AnalysisSessionRepository port.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionRepository** - Stores sessions in memory

mod in_memory_session_repository;

pub use in_memory_session_repository::InMemorySessionRepository;
