//! Location preset management.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Location, LocationPatch, NewLocation};
use crate::domain::repositories::LocationRepository;
use crate::error::AppError;
use crate::utils::slug::validate_slug;

/// Service for creating and managing named locations.
pub struct LocationService {
    locations: Arc<dyn LocationRepository>,
}

impl LocationService {
    pub fn new(locations: Arc<dyn LocationRepository>) -> Self {
        Self { locations }
    }

    /// Creates a location preset.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed slug and
    /// [`AppError::Conflict`] when the slug is already taken.
    pub async fn create(&self, new_location: NewLocation) -> Result<Location, AppError> {
        validate_slug(&new_location.slug)?;

        if self
            .locations
            .find_by_slug(&new_location.slug)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "Location slug already exists",
                json!({ "slug": new_location.slug }),
            ));
        }

        self.locations.create(new_location).await
    }

    /// Retrieves a location by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the slug does not exist.
    pub async fn get(&self, slug: &str) -> Result<Location, AppError> {
        self.locations
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Location not found", json!({ "slug": slug })))
    }

    /// Lists all locations.
    pub async fn list(&self) -> Result<Vec<Location>, AppError> {
        self.locations.list().await
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the slug does not exist.
    pub async fn update(&self, slug: &str, patch: LocationPatch) -> Result<Location, AppError> {
        self.locations
            .update(slug, patch)
            .await?
            .ok_or_else(|| AppError::not_found("Location not found", json!({ "slug": slug })))
    }

    /// Deletes a location.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the slug does not exist.
    pub async fn delete(&self, slug: &str) -> Result<(), AppError> {
        if self.locations.delete(slug).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Location not found",
                json!({ "slug": slug }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLocationRepository;
    use chrono::Utc;

    fn sample_location(slug: &str) -> Location {
        Location {
            id: 1,
            slug: slug.to_string(),
            name: "Samarinda".to_string(),
            latitude: -0.502106,
            longitude: 117.153709,
            utc_offset: 8.0,
            method: None,
            asr_school: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_new_location(slug: &str) -> NewLocation {
        NewLocation {
            slug: slug.to_string(),
            name: "Samarinda".to_string(),
            latitude: -0.502106,
            longitude: 117.153709,
            utc_offset: 8.0,
            method: None,
            asr_school: None,
        }
    }

    #[tokio::test]
    async fn create_rejects_malformed_slugs() {
        let service = LocationService::new(Arc::new(MockLocationRepository::new()));
        let err = service
            .create(sample_new_location("Not A Slug"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn create_detects_duplicate_slugs() {
        let mut repo = MockLocationRepository::new();
        repo.expect_find_by_slug()
            .returning(|slug| Ok(Some(sample_location(slug))));

        let service = LocationService::new(Arc::new(repo));
        let err = service
            .create(sample_new_location("samarinda"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn create_passes_through_to_the_repository() {
        let mut repo = MockLocationRepository::new();
        repo.expect_find_by_slug().returning(|_| Ok(None));
        repo.expect_create()
            .returning(|new_location| Ok(sample_location(&new_location.slug)));

        let service = LocationService::new(Arc::new(repo));
        let location = service.create(sample_new_location("samarinda")).await.unwrap();
        assert_eq!(location.slug, "samarinda");
    }

    #[tokio::test]
    async fn missing_slug_maps_to_not_found() {
        let mut repo = MockLocationRepository::new();
        repo.expect_find_by_slug().returning(|_| Ok(None));
        repo.expect_delete().returning(|_| Ok(false));

        let service = LocationService::new(Arc::new(repo));
        assert!(matches!(
            service.get("atlantis").await.unwrap_err(),
            AppError::NotFound { .. }
        ));
        assert!(matches!(
            service.delete("atlantis").await.unwrap_err(),
            AppError::NotFound { .. }
        ));
    }
}
