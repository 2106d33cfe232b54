//! Defines the HTTP routes for webinars and live sessions.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{create_webinar, end_webinar, list_webinars, live_room, send_chat, toggle_control};
use crate::AppState;

pub fn webinar_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_webinars).post(create_webinar))
        .route("/live/:id", get(live_room))
        .route("/live/:id/controls/:control", post(toggle_control))
        .route("/live/:id/chat", post(send_chat))
        .route("/live/:id/end", post(end_webinar))
}
