//! Fallback handler that serves GET requests for every non-API path through
//! the route table.

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::Json;

use super::render::{render, Page};
use super::routes::resolve;
use crate::auth::CurrentSession;
use crate::errors::AppResult;
use crate::AppState;

pub async fn render_page(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    uri: Uri,
) -> AppResult<(StatusCode, Json<Page>)> {
    let path = uri.path();
    let page = render(path, resolve(path), &session, &state).await?;
    let status = if page.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    Ok((status, Json(page)))
}
