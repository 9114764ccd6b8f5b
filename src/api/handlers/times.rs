//! Handlers for prayer time computation endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::times::{LocationTimesQuery, TimesQuery, TimesResponse};
use crate::application::services::TimesRequest;
use crate::domain::calculator::GeoPosition;
use crate::error::AppError;
use crate::state::AppState;

/// Computes prayer times for an arbitrary coordinate.
///
/// # Endpoint
///
/// `GET /api/times?latitude=-0.5&longitude=117.15&utc_offset=8`
///
/// Optional parameters: `date` (ISO, defaults to today at the given offset),
/// `method`, `asr_school`. Unknown method or school names fall back to the
/// configured defaults rather than failing the request.
pub async fn times_handler(
    State(state): State<AppState>,
    Query(query): Query<TimesQuery>,
) -> Result<Json<TimesResponse>, AppError> {
    query.validate()?;

    let request = TimesRequest {
        date: query.date,
        position: GeoPosition {
            latitude: query.latitude,
            longitude: query.longitude,
            utc_offset: query.utc_offset,
        },
        method: query.method,
        asr_school: query.asr_school,
    };

    let day = state.times_service.compute(request).await?;
    Ok(Json(TimesResponse::from(&day)))
}

/// Computes prayer times for a stored location preset.
///
/// # Endpoint
///
/// `GET /api/locations/{slug}/times`
///
/// Query `method` and `asr_school` override the location's stored
/// preferences for this request only.
pub async fn location_times_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<LocationTimesQuery>,
) -> Result<Json<TimesResponse>, AppError> {
    let day = state
        .times_service
        .compute_for_location(
            &slug,
            query.date,
            query.method.as_deref(),
            query.asr_school.as_deref(),
        )
        .await?;
    Ok(Json(TimesResponse::from(&day)))
}
