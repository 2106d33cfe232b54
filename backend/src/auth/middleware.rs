//! Session context extraction for view and API handlers.
//!
//! Handlers never reach into the store's state directly: they receive an
//! owned snapshot of the session through the `CurrentSession` extractor.

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::models::Session;
use crate::AppState;

/// Snapshot of the process session taken when the request was received.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

#[async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(Self(state.sessions.snapshot().await))
    }
}
