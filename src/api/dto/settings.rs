//! DTOs for the settings endpoints.

use serde::{Deserialize, Serialize};

use crate::application::services::Settings;

/// The current service-wide defaults.
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub default_method: String,
    pub default_asr_school: String,
    pub default_location: Option<String>,
}

/// Partial update of the service defaults.
///
/// Absent fields are left unchanged; `default_location` distinguishes an
/// explicit JSON `null` (clear) from absence.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSettingsRequest {
    pub default_method: Option<String>,
    pub default_asr_school: Option<String>,
    #[serde(default, with = "serde_with::rust::double_option")]
    pub default_location: Option<Option<String>>,
}

impl From<&Settings> for SettingsResponse {
    fn from(settings: &Settings) -> Self {
        Self {
            default_method: settings.default_method.name().to_string(),
            default_asr_school: settings.default_asr_school.name().to_string(),
            default_location: settings.default_location.clone(),
        }
    }
}
