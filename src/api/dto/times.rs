//! DTOs for the times endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::DayTimes;
use crate::domain::schedule::format_hours;

/// Query parameters for an ad-hoc times computation.
#[derive(Debug, Deserialize, Validate)]
pub struct TimesQuery {
    /// Calendar date; defaults to today at `utc_offset`.
    pub date: Option<NaiveDate>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    /// Flat additive UTC offset in hours; no DST handling.
    #[validate(range(min = -14.0, max = 14.0))]
    pub utc_offset: f64,

    /// Method name; unknown names fall back to the configured default.
    pub method: Option<String>,

    /// Asr school name; unknown names fall back to the configured default.
    pub asr_school: Option<String>,
}

/// Query parameters for a stored-location times computation.
#[derive(Debug, Deserialize)]
pub struct LocationTimesQuery {
    pub date: Option<NaiveDate>,
    pub method: Option<String>,
    pub asr_school: Option<String>,
}

/// One computed day.
#[derive(Debug, Serialize)]
pub struct TimesResponse {
    /// ISO calendar date the schedule was computed for.
    pub date: String,
    /// Tabular Hijri date, e.g. `10 Ramadan 1445 H`.
    pub hijri_date: String,
    /// Slug of the stored location, when one was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub method: String,
    pub asr_school: String,
    pub times: PrayerTimesDto,
}

/// The seven daily events as `HH:MM` strings.
///
/// `null` means the event does not occur on that date at that latitude.
#[derive(Debug, Serialize)]
pub struct PrayerTimesDto {
    #[serde(rename = "Fajr")]
    pub fajr: Option<String>,
    #[serde(rename = "Sunrise")]
    pub sunrise: Option<String>,
    #[serde(rename = "Dhuhr")]
    pub dhuhr: Option<String>,
    #[serde(rename = "Asr")]
    pub asr: Option<String>,
    #[serde(rename = "Sunset")]
    pub sunset: Option<String>,
    #[serde(rename = "Maghrib")]
    pub maghrib: Option<String>,
    #[serde(rename = "Isha")]
    pub isha: Option<String>,
}

impl From<&DayTimes> for TimesResponse {
    fn from(day: &DayTimes) -> Self {
        let schedule = &day.schedule;
        Self {
            date: day.date.to_string(),
            hijri_date: day.hijri.to_string(),
            location: day.location.clone(),
            method: day.method.name().to_string(),
            asr_school: day.asr_school.name().to_string(),
            times: PrayerTimesDto {
                fajr: schedule.fajr.map(format_hours),
                sunrise: schedule.sunrise.map(format_hours),
                dhuhr: Some(format_hours(schedule.dhuhr)),
                asr: schedule.asr.map(format_hours),
                sunset: schedule.sunset.map(format_hours),
                maghrib: schedule.maghrib.map(format_hours),
                isha: schedule.isha.map(format_hours),
            },
        }
    }
}
