//! Typed access to the persisted service settings.

use std::sync::Arc;

use serde_json::json;

use crate::domain::method::{AsrSchool, CalculationMethod};
use crate::domain::repositories::{LocationRepository, SettingsRepository, keys};
use crate::error::AppError;

/// The resolved service-wide defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub default_method: CalculationMethod,
    pub default_asr_school: AsrSchool,
    pub default_location: Option<String>,
}

/// Service reading and writing the settings key-value table.
///
/// Reads are permissive: an unparseable stored value falls back to the
/// built-in default instead of failing the request. Writes are strict and
/// reject unknown method or school names, so a typo cannot silently change
/// future behavior.
pub struct SettingsService {
    settings: Arc<dyn SettingsRepository>,
    locations: Arc<dyn LocationRepository>,
}

impl SettingsService {
    pub fn new(
        settings: Arc<dyn SettingsRepository>,
        locations: Arc<dyn LocationRepository>,
    ) -> Self {
        Self {
            settings,
            locations,
        }
    }

    /// All defaults in one read.
    pub async fn overview(&self) -> Result<Settings, AppError> {
        Ok(Settings {
            default_method: self.default_method().await?,
            default_asr_school: self.default_asr_school().await?,
            default_location: self.default_location().await?,
        })
    }

    /// The configured default calculation method; MWL when unset.
    pub async fn default_method(&self) -> Result<CalculationMethod, AppError> {
        let stored = self.settings.get(keys::DEFAULT_METHOD).await?;
        Ok(stored
            .as_deref()
            .and_then(CalculationMethod::parse)
            .unwrap_or_default())
    }

    /// The configured default Asr school; Shafii when unset.
    pub async fn default_asr_school(&self) -> Result<AsrSchool, AppError> {
        let stored = self.settings.get(keys::DEFAULT_ASR_SCHOOL).await?;
        Ok(stored
            .as_deref()
            .and_then(AsrSchool::parse)
            .unwrap_or_default())
    }

    /// Slug of the default location, if one is configured.
    pub async fn default_location(&self) -> Result<Option<String>, AppError> {
        self.settings.get(keys::DEFAULT_LOCATION).await
    }

    /// Sets the default method.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for unknown method names.
    pub async fn set_default_method(&self, name: &str) -> Result<CalculationMethod, AppError> {
        let method = CalculationMethod::parse(name).ok_or_else(|| {
            AppError::bad_request("Unknown calculation method", json!({ "method": name }))
        })?;
        self.settings.set(keys::DEFAULT_METHOD, method.name()).await?;
        Ok(method)
    }

    /// Sets the default Asr school.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for unknown school names.
    pub async fn set_default_asr_school(&self, name: &str) -> Result<AsrSchool, AppError> {
        let school = AsrSchool::parse(name).ok_or_else(|| {
            AppError::bad_request("Unknown Asr school", json!({ "asr_school": name }))
        })?;
        self.settings
            .set(keys::DEFAULT_ASR_SCHOOL, school.name())
            .await?;
        Ok(school)
    }

    /// Sets or clears the default location.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the slug does not exist.
    pub async fn set_default_location(&self, slug: Option<&str>) -> Result<(), AppError> {
        match slug {
            Some(slug) => {
                if self.locations.find_by_slug(slug).await?.is_none() {
                    return Err(AppError::not_found(
                        "Location not found",
                        json!({ "slug": slug }),
                    ));
                }
                self.settings.set(keys::DEFAULT_LOCATION, slug).await
            }
            None => self.settings.delete(keys::DEFAULT_LOCATION).await,
        }
    }
}
