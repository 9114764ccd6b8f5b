//! Handlers for the service settings endpoints.

use axum::{Json, extract::State};

use crate::api::dto::settings::{SettingsResponse, UpdateSettingsRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the current service-wide defaults.
///
/// # Endpoint
///
/// `GET /api/settings`
pub async fn settings_handler(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, AppError> {
    let settings = state.settings_service.overview().await?;
    Ok(Json(SettingsResponse::from(&settings)))
}

/// Partially updates the service-wide defaults.
///
/// # Endpoint
///
/// `PATCH /api/settings`
///
/// Unknown method or school names are rejected here; `"default_location":
/// null` clears the default location.
pub async fn update_settings_handler(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, AppError> {
    if let Some(name) = request.default_method.as_deref() {
        state.settings_service.set_default_method(name).await?;
    }
    if let Some(name) = request.default_asr_school.as_deref() {
        state.settings_service.set_default_asr_school(name).await?;
    }
    if let Some(slug) = request.default_location {
        state
            .settings_service
            .set_default_location(slug.as_deref())
            .await?;
    }

    let settings = state.settings_service.overview().await?;
    Ok(Json(SettingsResponse::from(&settings)))
}
