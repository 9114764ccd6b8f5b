//! Repository traits decoupling domain logic from persistence.

mod location_repository;
mod settings_repository;

pub use location_repository::LocationRepository;
pub use settings_repository::{SettingsRepository, keys};

#[cfg(test)]
pub use location_repository::MockLocationRepository;
#[cfg(test)]
pub use settings_repository::MockSettingsRepository;
