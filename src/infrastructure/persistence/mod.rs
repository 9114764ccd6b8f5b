//! PostgreSQL persistence implementations of the repository traits.

mod pg_location_repository;
mod pg_settings_repository;

pub use pg_location_repository::PgLocationRepository;
pub use pg_settings_repository::PgSettingsRepository;
