//! Handler functions for authentication-related API endpoints.
//!
//! These functions parse request bodies for login, signup, logout and
//! session hydration, and delegate every state change to the session store.

use axum::extract::State;
use axum::Json;
use nexushub_adapters::{Credentials, SignupData};

use super::middleware::CurrentSession;
use super::models::{ReplaceIdentityRequest, SessionView};
use crate::errors::AppResult;
use crate::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> AppResult<Json<SessionView>> {
    let session = state.sessions.begin_session(&credentials).await?;
    Ok(Json(SessionView::from(&session)))
}

pub async fn signup(
    State(state): State<AppState>,
    Json(data): Json<SignupData>,
) -> AppResult<Json<SessionView>> {
    let session = state.sessions.register_identity(data).await?;
    Ok(Json(SessionView::from(&session)))
}

pub async fn logout(State(state): State<AppState>) -> Json<SessionView> {
    let session = state.sessions.end_session().await;
    Json(SessionView::from(&session))
}

pub async fn current_session(CurrentSession(session): CurrentSession) -> Json<SessionView> {
    Json(SessionView::from(&session))
}

pub async fn replace_session(
    State(state): State<AppState>,
    Json(request): Json<ReplaceIdentityRequest>,
) -> Json<SessionView> {
    let session = state.sessions.replace_identity(request.user).await;
    Json(SessionView::from(&session))
}
