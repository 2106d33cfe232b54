//! Handler functions for the analytics dashboard and the settings panel.

use axum::extract::State;
use axum::Json;

use crate::errors::AppResult;
use crate::services::analytics::{self, AnalyticsReport};
use crate::services::settings::{PlatformSettings, SettingsPanel};
use crate::AppState;

pub async fn analytics_report() -> Json<AnalyticsReport> {
    Json(analytics::report())
}

pub async fn get_settings(State(state): State<AppState>) -> Json<SettingsPanel> {
    Json(state.settings.panel().await)
}

pub async fn save_settings(
    State(state): State<AppState>,
    Json(settings): Json<PlatformSettings>,
) -> AppResult<Json<SettingsPanel>> {
    Ok(Json(state.settings.save(settings).await?))
}
