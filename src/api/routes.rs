//! API route configuration.

use crate::api::handlers::{
    create_location_handler, delete_location_handler, get_location_handler,
    location_list_handler, location_times_handler, method_list_handler, settings_handler,
    times_handler, update_location_handler, update_settings_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /times`                    - Compute times for arbitrary coordinates
/// - `GET    /methods`                  - List calculation-method presets
/// - `GET    /locations`                - List stored location presets
/// - `POST   /locations`                - Create a location preset
/// - `GET    /locations/{slug}`         - Fetch one location preset
/// - `PATCH  /locations/{slug}`         - Partially update a location preset
/// - `DELETE /locations/{slug}`         - Delete a location preset
/// - `GET    /locations/{slug}/times`   - Compute times for a stored location
/// - `GET    /settings`                 - Current service defaults
/// - `PATCH  /settings`                 - Update service defaults
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/times", get(times_handler))
        .route("/methods", get(method_list_handler))
        .route(
            "/locations",
            get(location_list_handler).post(create_location_handler),
        )
        .route(
            "/locations/{slug}",
            delete(delete_location_handler)
                .get(get_location_handler)
                .patch(update_location_handler),
        )
        .route("/locations/{slug}/times", get(location_times_handler))
        .route(
            "/settings",
            get(settings_handler).patch(update_settings_handler),
        )
}
