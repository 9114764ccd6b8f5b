//! Repository trait for the settings key-value table.
//!
//! Service defaults (calculation method, Asr school, default location) are
//! persisted as rows rather than loose files or constants in source.

use crate::error::AppError;
use async_trait::async_trait;

/// Well-known settings keys.
pub mod keys {
    pub const DEFAULT_METHOD: &str = "default_method";
    pub const DEFAULT_ASR_SCHOOL: &str = "default_asr_school";
    pub const DEFAULT_LOCATION: &str = "default_location";
}

/// Repository interface for persisted service settings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSettingsRepository`] - PostgreSQL implementation
/// - In-memory fakes in `tests/common/mod.rs`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Reads a setting; `Ok(None)` when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Writes a setting, inserting or overwriting.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Removes a setting; missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, key: &str) -> Result<(), AppError>;
}
