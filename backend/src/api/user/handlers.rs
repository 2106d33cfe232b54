//! Handler functions for user management API endpoints.
//!
//! These functions read the identity directory and return the filtered user
//! table with its summary counts.

use axum::extract::{Query, State};
use axum::Json;

use crate::errors::AppResult;
use crate::services::accounts::{user_table, UserQuery, UserTable};
use crate::AppState;

pub async fn list_users(State(state): State<AppState>, Query(query): Query<UserQuery>) -> AppResult<Json<UserTable>> {
    let users = state.sessions.directory().list().await?;
    Ok(Json(user_table(users, &query)))
}
