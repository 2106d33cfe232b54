//! Defines the HTTP routes for analytics and settings.

use axum::routing::get;
use axum::Router;

use super::handlers::{analytics_report, get_settings, save_settings};
use crate::AppState;

pub fn platform_router() -> Router<AppState> {
    Router::new()
        .route("/analytics", get(analytics_report))
        .route("/settings", get(get_settings).put(save_settings))
}
