//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle login, signup, logout and session hydration. They are
//! nested under `/api/auth` by the main router.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{current_session, login, logout, replace_session, signup};
use crate::AppState;

pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/signup", post(signup))
        .route("/logout", post(logout))
        .route("/session", get(current_session).put(replace_session))
}
