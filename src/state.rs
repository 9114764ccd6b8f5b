//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{LocationService, SettingsService, TimesService};
use crate::domain::repositories::{LocationRepository, SettingsRepository};

/// Service handles shared across the router.
///
/// Cloning is cheap; all services are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub times_service: Arc<TimesService>,
    pub location_service: Arc<LocationService>,
    pub settings_service: Arc<SettingsService>,
}

impl AppState {
    /// Wires the service graph on top of the given repositories.
    pub fn new(
        locations: Arc<dyn LocationRepository>,
        settings: Arc<dyn SettingsRepository>,
    ) -> Self {
        let settings_service = Arc::new(SettingsService::new(settings, locations.clone()));
        let location_service = Arc::new(LocationService::new(locations.clone()));
        let times_service = Arc::new(TimesService::new(locations, settings_service.clone()));

        Self {
            times_service,
            location_service,
            settings_service,
        }
    }
}
