//! Business logic services for the application layer.

pub mod location_service;
pub mod settings_service;
pub mod times_service;

pub use location_service::LocationService;
pub use settings_service::{Settings, SettingsService};
pub use times_service::{DayTimes, TimesRequest, TimesService};
