//! Custom error types specific to authentication failures.
//!
//! The only meaningful failure of the session layer is an unrecognised
//! address; directory failures are carried through unchanged.

use axum::http::StatusCode;
use nexushub_adapters::AdapterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("identity directory error: {0}")]
    Directory(#[from] AdapterError),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Directory(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}
