//! Adapters - Implementations of port interfaces.
//!
//! - `http` - Axum REST endpoints
//! - `storage` - Session repository implementations

pub mod http;
pub mod storage;

pub use storage::InMemorySessionRepository;
