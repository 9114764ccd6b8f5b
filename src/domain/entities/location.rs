//! Location entity representing a stored calculation preset.

use chrono::{DateTime, Utc};

use crate::domain::calculator::GeoPosition;
use crate::domain::method::{AsrSchool, CalculationMethod};

/// A named location with its coordinates and optional method overrides.
///
/// `method` and `asr_school` override the service-wide defaults when set;
/// `None` means the configured defaults apply at request time.
#[derive(Debug, Clone)]
pub struct Location {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Flat additive UTC offset in hours; no DST handling.
    pub utc_offset: f64,
    pub method: Option<CalculationMethod>,
    pub asr_school: Option<AsrSchool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Location {
    /// The geographic position used by the calculator.
    pub fn position(&self) -> GeoPosition {
        GeoPosition {
            latitude: self.latitude,
            longitude: self.longitude,
            utc_offset: self.utc_offset,
        }
    }
}

/// Input data for creating a new location.
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub slug: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub utc_offset: f64,
    pub method: Option<CalculationMethod>,
    pub asr_school: Option<AsrSchool>,
}

/// Partial update for an existing location.
///
/// `None` fields are left unchanged.
/// `method: Some(None)` clears the override; `Some(Some(m))` sets it.
#[derive(Debug, Clone, Default)]
pub struct LocationPatch {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub utc_offset: Option<f64>,
    pub method: Option<Option<CalculationMethod>>,
    pub asr_school: Option<Option<AsrSchool>>,
}
