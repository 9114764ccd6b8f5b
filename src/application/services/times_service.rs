//! Daily schedule computation with default resolution.
//!
//! Wraps the pure [`PrayerCalculator`] with the request-time concerns: which
//! date "today" means at the caller's UTC offset, and which method and Asr
//! school apply when the request does not pin them down.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use serde_json::json;

use crate::application::services::SettingsService;
use crate::domain::calculator::{GeoPosition, PrayerCalculator};
use crate::domain::entities::Location;
use crate::domain::hijri::HijriDate;
use crate::domain::method::{AsrSchool, CalculationMethod};
use crate::domain::repositories::LocationRepository;
use crate::domain::schedule::PrayerSchedule;
use crate::error::AppError;

/// Parameters of an ad-hoc times request.
#[derive(Debug, Clone)]
pub struct TimesRequest {
    /// Defaults to today at the given UTC offset.
    pub date: Option<NaiveDate>,
    pub position: GeoPosition,
    /// Method name; unknown or missing names fall back to the configured
    /// default rather than failing the request.
    pub method: Option<String>,
    /// Asr school name; same fallback behavior as `method`.
    pub asr_school: Option<String>,
}

/// One computed day, ready for serialization.
#[derive(Debug, Clone)]
pub struct DayTimes {
    pub date: NaiveDate,
    pub hijri: HijriDate,
    /// Slug of the stored location, when one was used.
    pub location: Option<String>,
    pub method: CalculationMethod,
    pub asr_school: AsrSchool,
    pub schedule: PrayerSchedule,
}

/// Service computing prayer schedules.
pub struct TimesService {
    locations: Arc<dyn LocationRepository>,
    settings: Arc<SettingsService>,
}

impl TimesService {
    pub fn new(locations: Arc<dyn LocationRepository>, settings: Arc<SettingsService>) -> Self {
        Self {
            locations,
            settings,
        }
    }

    /// Computes the schedule for an ad-hoc position.
    pub async fn compute(&self, request: TimesRequest) -> Result<DayTimes, AppError> {
        let method = self.resolve_method(request.method.as_deref(), None).await?;
        let asr_school = self
            .resolve_asr_school(request.asr_school.as_deref(), None)
            .await?;
        let date = request
            .date
            .unwrap_or_else(|| local_today(request.position.utc_offset));

        Ok(self.run(date, request.position, None, method, asr_school))
    }

    /// Computes the schedule for a stored location.
    ///
    /// A request-supplied method or school overrides the location's stored
    /// override, which in turn overrides the service default.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the slug does not exist.
    pub async fn compute_for_location(
        &self,
        slug: &str,
        date: Option<NaiveDate>,
        method: Option<&str>,
        asr_school: Option<&str>,
    ) -> Result<DayTimes, AppError> {
        let location = self
            .locations
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Location not found", json!({ "slug": slug })))?;

        self.compute_for(&location, date, method, asr_school).await
    }

    /// Computes the schedule for an already-loaded location.
    pub async fn compute_for(
        &self,
        location: &Location,
        date: Option<NaiveDate>,
        method: Option<&str>,
        asr_school: Option<&str>,
    ) -> Result<DayTimes, AppError> {
        let resolved_method = self.resolve_method(method, location.method).await?;
        let resolved_school = self
            .resolve_asr_school(asr_school, location.asr_school)
            .await?;
        let position = location.position();
        let date = date.unwrap_or_else(|| local_today(position.utc_offset));

        Ok(self.run(
            date,
            position,
            Some(location.slug.clone()),
            resolved_method,
            resolved_school,
        ))
    }

    fn run(
        &self,
        date: NaiveDate,
        position: GeoPosition,
        location: Option<String>,
        method: CalculationMethod,
        asr_school: AsrSchool,
    ) -> DayTimes {
        let schedule = PrayerCalculator::new(position, method, asr_school).compute(date);
        DayTimes {
            date,
            hijri: HijriDate::from_gregorian(date),
            location,
            method,
            asr_school,
            schedule,
        }
    }

    /// Request name beats stored override beats configured default.
    ///
    /// Unknown names are deliberately not rejected here; read paths fall
    /// back instead of failing.
    async fn resolve_method(
        &self,
        requested: Option<&str>,
        stored: Option<CalculationMethod>,
    ) -> Result<CalculationMethod, AppError> {
        if let Some(method) = requested.and_then(CalculationMethod::parse) {
            return Ok(method);
        }
        if let Some(method) = stored {
            return Ok(method);
        }
        self.settings.default_method().await
    }

    async fn resolve_asr_school(
        &self,
        requested: Option<&str>,
        stored: Option<AsrSchool>,
    ) -> Result<AsrSchool, AppError> {
        if let Some(school) = requested.and_then(AsrSchool::parse) {
            return Ok(school);
        }
        if let Some(school) = stored {
            return Ok(school);
        }
        self.settings.default_asr_school().await
    }
}

/// Today's calendar date at a flat UTC offset.
fn local_today(utc_offset: f64) -> NaiveDate {
    let shifted = Utc::now() + Duration::seconds((utc_offset * 3600.0) as i64);
    shifted.date_naive()
}
