//! Handlers for location preset CRUD endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::location::{
    CreateLocationRequest, LocationListResponse, LocationResponse, UpdateLocationRequest,
};
use crate::domain::entities::{LocationPatch, NewLocation};
use crate::domain::method::{AsrSchool, CalculationMethod};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all stored location presets.
///
/// # Endpoint
///
/// `GET /api/locations`
pub async fn location_list_handler(
    State(state): State<AppState>,
) -> Result<Json<LocationListResponse>, AppError> {
    let locations = state.location_service.list().await?;
    Ok(Json(LocationListResponse {
        locations: locations.iter().map(LocationResponse::from).collect(),
    }))
}

/// Creates a location preset.
///
/// # Endpoint
///
/// `POST /api/locations`
///
/// Unlike the read paths, write paths reject unknown `method` and
/// `asr_school` names with `400`.
pub async fn create_location_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateLocationRequest>,
) -> Result<(StatusCode, Json<LocationResponse>), AppError> {
    request.validate()?;

    let new_location = NewLocation {
        slug: request.slug,
        name: request.name,
        latitude: request.latitude,
        longitude: request.longitude,
        utc_offset: request.utc_offset,
        method: parse_method(request.method.as_deref())?,
        asr_school: parse_asr_school(request.asr_school.as_deref())?,
    };

    let location = state.location_service.create(new_location).await?;
    Ok((StatusCode::CREATED, Json(LocationResponse::from(&location))))
}

/// Returns one location preset by slug.
///
/// # Endpoint
///
/// `GET /api/locations/{slug}`
pub async fn get_location_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<LocationResponse>, AppError> {
    let location = state.location_service.get(&slug).await?;
    Ok(Json(LocationResponse::from(&location)))
}

/// Partially updates a location preset.
///
/// # Endpoint
///
/// `PATCH /api/locations/{slug}`
///
/// Absent fields are untouched. `"method": null` clears the stored
/// override so the service default applies again.
pub async fn update_location_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<UpdateLocationRequest>,
) -> Result<Json<LocationResponse>, AppError> {
    request.validate()?;

    let method = match request.method {
        None => None,
        Some(None) => Some(None),
        Some(Some(name)) => Some(parse_method(Some(&name))?),
    };
    let asr_school = match request.asr_school {
        None => None,
        Some(None) => Some(None),
        Some(Some(name)) => Some(parse_asr_school(Some(&name))?),
    };

    let patch = LocationPatch {
        name: request.name,
        latitude: request.latitude,
        longitude: request.longitude,
        utc_offset: request.utc_offset,
        method,
        asr_school,
    };

    let location = state.location_service.update(&slug, patch).await?;
    Ok(Json(LocationResponse::from(&location)))
}

/// Deletes a location preset.
///
/// # Endpoint
///
/// `DELETE /api/locations/{slug}`
///
/// Returns `204 No Content` on success.
pub async fn delete_location_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<StatusCode, AppError> {
    state.location_service.delete(&slug).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_method(name: Option<&str>) -> Result<Option<CalculationMethod>, AppError> {
    match name {
        None => Ok(None),
        Some(name) => CalculationMethod::parse(name).map(Some).ok_or_else(|| {
            AppError::bad_request("Unknown calculation method", json!({ "method": name }))
        }),
    }
}

fn parse_asr_school(name: Option<&str>) -> Result<Option<AsrSchool>, AppError> {
    match name {
        None => Ok(None),
        Some(name) => AsrSchool::parse(name).map(Some).ok_or_else(|| {
            AppError::bad_request("Unknown Asr school", json!({ "asr_school": name }))
        }),
    }
}
