//! Repository trait for location preset data access.

use crate::domain::entities::{Location, LocationPatch, NewLocation};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing named locations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLocationRepository`] - PostgreSQL implementation
/// - In-memory fakes in `tests/common/mod.rs`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Creates a new location.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug already exists and
    /// [`AppError::Internal`] on database errors.
    async fn create(&self, new_location: NewLocation) -> Result<Location, AppError>;

    /// Finds a location by its slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Location>, AppError>;

    /// Lists all locations ordered by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Location>, AppError>;

    /// Applies a partial update; `Ok(None)` when the slug does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, slug: &str, patch: LocationPatch) -> Result<Option<Location>, AppError>;

    /// Deletes a location; `Ok(false)` when the slug does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, slug: &str) -> Result<bool, AppError>;
}
