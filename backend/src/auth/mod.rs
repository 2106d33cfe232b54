//! Authentication module for managing the process session and access control.
//!
//! This module provides the public interface for signing in, signing up,
//! signing out and hydrating the session, plus the extractor that hands a
//! session snapshot to every handler.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;

// Re-exports for convenience
pub use errors::*;
pub use middleware::*;
pub use models::*;
pub use routes::*;
pub use service::*;
