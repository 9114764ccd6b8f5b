//! DTOs for location preset endpoints.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::Location;

/// Compiled regex for slug validation.
static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

/// Request to create a location preset.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLocationRequest {
    #[validate(length(min = 2, max = 50))]
    #[validate(regex(path = "*SLUG_REGEX"))]
    pub slug: String,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    #[validate(range(min = -14.0, max = 14.0))]
    pub utc_offset: f64,

    /// Optional method override; must be a known method name.
    pub method: Option<String>,

    /// Optional Asr school override; must be a known school name.
    pub asr_school: Option<String>,
}

/// Partial update for a location preset.
///
/// Absent fields are left unchanged. For `method` and `asr_school` an
/// explicit JSON `null` clears the override while a string sets it.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateLocationRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,

    #[validate(range(min = -14.0, max = 14.0))]
    pub utc_offset: Option<f64>,

    #[serde(default, with = "serde_with::rust::double_option")]
    pub method: Option<Option<String>>,

    #[serde(default, with = "serde_with::rust::double_option")]
    pub asr_school: Option<Option<String>>,
}

/// A stored location preset.
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub slug: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub utc_offset: f64,
    pub method: Option<String>,
    pub asr_school: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing wrapper for location presets.
#[derive(Debug, Serialize)]
pub struct LocationListResponse {
    pub locations: Vec<LocationResponse>,
}

impl From<&Location> for LocationResponse {
    fn from(location: &Location) -> Self {
        Self {
            slug: location.slug.clone(),
            name: location.name.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
            utc_offset: location.utc_offset,
            method: location.method.map(|m| m.name().to_string()),
            asr_school: location.asr_school.map(|s| s.name().to_string()),
            created_at: location.created_at,
            updated_at: location.updated_at,
        }
    }
}
