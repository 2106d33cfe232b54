//! Defines the HTTP routes for user management.

use axum::routing::get;
use axum::Router;

use super::handlers::list_users;
use crate::AppState;

pub fn user_router() -> Router<AppState> {
    Router::new().route("/", get(list_users))
}
