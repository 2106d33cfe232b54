//! Defines the HTTP routes for the content vault.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{list_items, start_upload, upload_status};
use crate::AppState;

pub fn vault_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items))
        .route("/uploads", post(start_upload))
        .route("/uploads/:id", get(upload_status))
}
