//! Handler functions for browsing the vault and tracking simulated uploads.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::errors::{AppError, AppResult};
use crate::services::catalog::VaultItem;
use crate::services::uploads::{UploadRequest, UploadStatus};
use crate::AppState;

pub async fn list_items(State(state): State<AppState>) -> Json<Vec<VaultItem>> {
    Json(state.catalog.vault_items().await)
}

pub async fn start_upload(
    State(state): State<AppState>,
    Json(request): Json<UploadRequest>,
) -> AppResult<(StatusCode, Json<UploadStatus>)> {
    let status = state.uploads.start(request).await?;
    Ok((StatusCode::ACCEPTED, Json(status)))
}

pub async fn upload_status(State(state): State<AppState>, Path(id): Path<u64>) -> AppResult<Json<UploadStatus>> {
    state
        .uploads
        .status(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("upload {id}")))
}
