//! Handler functions for the webinar API.
//!
//! These functions serve the webinar catalog, accept the creation form and
//! drive the local state of the live-session screen.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::auth::CurrentSession;
use crate::errors::AppResult;
use crate::services::catalog::{NewWebinar, Webinar};
use crate::services::live_room::{Control, LiveRoom};
use crate::AppState;

pub async fn list_webinars(State(state): State<AppState>) -> Json<Vec<Webinar>> {
    Json(state.catalog.webinars().await)
}

pub async fn create_webinar(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(form): Json<NewWebinar>,
) -> AppResult<(StatusCode, Json<Webinar>)> {
    let default_host = session.user().map_or("TBA", |u| u.name.as_str());
    let webinar = state.catalog.create_webinar(form, default_host).await?;
    Ok((StatusCode::CREATED, Json(webinar)))
}

pub async fn live_room(State(state): State<AppState>, Path(id): Path<String>) -> Json<LiveRoom> {
    Json(state.rooms.room(&id).await)
}

pub async fn toggle_control(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path((id, control)): Path<(String, String)>,
) -> AppResult<Json<LiveRoom>> {
    let control: Control = control.parse()?;
    Ok(Json(state.rooms.toggle(&id, control, session.role()).await?))
}

#[derive(Debug, Deserialize)]
pub struct ChatInput {
    pub message: String,
}

pub async fn send_chat(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<String>,
    Json(input): Json<ChatInput>,
) -> Json<LiveRoom> {
    Json(state.rooms.send_message(&id, session.user(), &input.message).await)
}

pub async fn end_webinar(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.rooms.end(&id, session.user()).await?;
    Ok(StatusCode::NO_CONTENT)
}
