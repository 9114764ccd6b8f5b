//! Handler for the method listing endpoint.

use axum::Json;

use crate::api::dto::methods::{MethodInfo, MethodListResponse};
use crate::domain::method::CalculationMethod;

/// Lists all calculation-method presets with their parameters.
///
/// # Endpoint
///
/// `GET /api/methods`
pub async fn method_list_handler() -> Json<MethodListResponse> {
    Json(MethodListResponse {
        methods: CalculationMethod::ALL
            .iter()
            .copied()
            .map(MethodInfo::from)
            .collect(),
    })
}
