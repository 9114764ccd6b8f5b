//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls, validation and default resolution. Services consume repository
//! traits and provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::times_service::TimesService`] - Daily schedule computation
//! - [`services::location_service::LocationService`] - Location preset management
//! - [`services::settings_service::SettingsService`] - Persisted service defaults

pub mod services;
