//! Custom error types specific to the `adapters` crate.
//!
//! This module defines errors that can occur while querying or mutating an
//! identity directory, providing a unified error type for every adapter.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}
