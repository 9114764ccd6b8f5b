//! The prayer-time calculator.
//!
//! A pure function of (date, location, method): no I/O, no shared state,
//! safe to call concurrently. The sun's declination and the equation of
//! time are evaluated once per day at local mean noon, then each event is
//! solved from the hour-angle equation
//!
//! ```text
//! cos(H) = (sin(a) - sin(decl) * sin(lat)) / (cos(decl) * cos(lat))
//! ```
//!
//! for the altitude `a` specific to that event: -0.833 deg for sunrise and
//! sunset (refraction plus solar radius), the method's configured
//! depression angles for Fajr/Maghrib/Isha, and a shadow-length altitude
//! for Asr. When the right-hand side falls outside [-1, 1] the event does
//! not occur on that date and the result is `None`.

use chrono::{Datelike, NaiveDate};

use crate::domain::astro::{self, SunPosition, fix_hour};
use crate::domain::method::{
    AsrSchool, CalculationMethod, IshaRule, MaghribRule, MethodParams,
};
use crate::domain::schedule::PrayerSchedule;

/// Altitude of the solar centre at apparent rise and set, in degrees.
const HORIZON_ALTITUDE: f64 = -0.833;

/// A fixed observer location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    /// Latitude in signed degrees, north positive.
    pub latitude: f64,
    /// Longitude in signed degrees, east positive.
    pub longitude: f64,
    /// Flat additive UTC offset in hours; no DST handling.
    pub utc_offset: f64,
}

/// Computes one day of prayer times for a fixed location and method.
#[derive(Debug, Clone, Copy)]
pub struct PrayerCalculator {
    position: GeoPosition,
    params: MethodParams,
    asr_school: AsrSchool,
}

impl PrayerCalculator {
    pub fn new(position: GeoPosition, method: CalculationMethod, asr_school: AsrSchool) -> Self {
        Self {
            position,
            params: method.params(),
            asr_school,
        }
    }

    /// Computes the schedule for one calendar date, in local clock hours.
    pub fn compute(&self, date: NaiveDate) -> PrayerSchedule {
        let d = astro::days_since_j2000(
            date.year(),
            date.month(),
            date.day(),
            self.position.longitude,
        );
        let sun = astro::sun_position(d);

        // Apparent solar noon in local mean time.
        let noon = fix_hour(12.0 - sun.equation_of_time);

        let morning = |altitude: f64| self.hour_angle(altitude, &sun).map(|h| noon - h);
        let evening = |altitude: f64| self.hour_angle(altitude, &sun).map(|h| noon + h);

        let sunset = evening(HORIZON_ALTITUDE);
        let maghrib = match self.params.maghrib {
            MaghribRule::AtSunset => sunset,
            MaghribRule::Angle(angle) => evening(-angle),
        };
        let isha = match self.params.isha {
            IshaRule::Angle(angle) => evening(-angle),
            IshaRule::MinutesAfterMaghrib(minutes) => maghrib.map(|t| t + minutes / 60.0),
        };

        PrayerSchedule {
            fajr: morning(-self.params.fajr_angle).map(|t| self.to_clock(t)),
            sunrise: morning(HORIZON_ALTITUDE).map(|t| self.to_clock(t)),
            dhuhr: self.to_clock(noon),
            asr: evening(self.asr_altitude(&sun)).map(|t| self.to_clock(t)),
            sunset: sunset.map(|t| self.to_clock(t)),
            maghrib: maghrib.map(|t| self.to_clock(t)),
            isha: isha.map(|t| self.to_clock(t)),
        }
    }

    /// Solves the hour angle for a given solar altitude, in hours from noon.
    ///
    /// `None` when the sun never crosses the altitude on this date, which
    /// happens near the poles and at extreme declinations.
    fn hour_angle(&self, altitude: f64, sun: &SunPosition) -> Option<f64> {
        let lat = self.position.latitude;
        let cos_h = (astro::dsin(altitude) - astro::dsin(sun.declination) * astro::dsin(lat))
            / (astro::dcos(sun.declination) * astro::dcos(lat));
        if !(-1.0..=1.0).contains(&cos_h) {
            return None;
        }
        Some(astro::darccos(cos_h) / 15.0)
    }

    /// Altitude of the sun at Asr from the shadow-length rule.
    ///
    /// Asr falls when an object's shadow equals `factor` times its length
    /// plus its noon shadow; the equivalent altitude is
    /// `arccot(factor + tan(|lat - decl|))`.
    fn asr_altitude(&self, sun: &SunPosition) -> f64 {
        let factor = self.asr_school.shadow_factor();
        astro::darctan(1.0 / (factor + astro::dtan((self.position.latitude - sun.declination).abs())))
    }

    /// Converts local mean time to local clock time and wraps into [0, 24).
    fn to_clock(&self, t: f64) -> f64 {
        fix_hour(t + self.position.utc_offset - self.position.longitude / 15.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schedule::format_hours;

    // The location embedded in the system this replaces: Samarinda, UTC+8.
    const SAMARINDA: GeoPosition = GeoPosition {
        latitude: -0.502106,
        longitude: 117.153709,
        utc_offset: 8.0,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn formatted(schedule: &PrayerSchedule) -> Vec<(&'static str, Option<String>)> {
        schedule
            .events()
            .iter()
            .map(|(name, t)| (*name, t.map(format_hours)))
            .collect()
    }

    #[test]
    fn samarinda_equinox_regression() {
        let calc = PrayerCalculator::new(SAMARINDA, CalculationMethod::Mwl, AsrSchool::Shafii);
        let schedule = calc.compute(date(2024, 3, 20));

        let expected = [
            ("Fajr", "05:06"),
            ("Sunrise", "06:15"),
            ("Dhuhr", "12:18"),
            ("Asr", "15:19"),
            ("Sunset", "18:22"),
            ("Maghrib", "18:22"),
            ("Isha", "19:26"),
        ];
        for ((name, time), (expected_name, expected_time)) in
            formatted(&schedule).iter().zip(expected)
        {
            assert_eq!(*name, expected_name);
            assert_eq!(time.as_deref(), Some(expected_time), "{name}");
        }
    }

    #[test]
    fn computation_is_deterministic() {
        let calc = PrayerCalculator::new(SAMARINDA, CalculationMethod::Karachi, AsrSchool::Hanafi);
        let a = calc.compute(date(2024, 11, 1));
        let b = calc.compute(date(2024, 11, 1));
        assert_eq!(a, b);
    }

    #[test]
    fn method_angles_only_move_fajr_and_isha() {
        let mwl = PrayerCalculator::new(SAMARINDA, CalculationMethod::Mwl, AsrSchool::Shafii)
            .compute(date(2024, 3, 20));
        let isna = PrayerCalculator::new(SAMARINDA, CalculationMethod::Isna, AsrSchool::Shafii)
            .compute(date(2024, 3, 20));

        assert_ne!(mwl.fajr, isna.fajr);
        assert_ne!(mwl.isha, isna.isha);
        assert_eq!(mwl.sunrise, isna.sunrise);
        assert_eq!(mwl.dhuhr, isna.dhuhr);
        assert_eq!(mwl.asr, isna.asr);
        assert_eq!(mwl.sunset, isna.sunset);
    }

    #[test]
    fn makkah_isha_is_ninety_minutes_after_maghrib() {
        let schedule = PrayerCalculator::new(SAMARINDA, CalculationMethod::Makkah, AsrSchool::Shafii)
            .compute(date(2024, 3, 20));
        let maghrib = schedule.maghrib.unwrap();
        let isha = schedule.isha.unwrap();
        assert!((isha - maghrib - 1.5).abs() < 1e-9);
    }

    #[test]
    fn jafari_maghrib_falls_after_sunset() {
        let schedule = PrayerCalculator::new(SAMARINDA, CalculationMethod::Jafari, AsrSchool::Shafii)
            .compute(date(2024, 3, 20));
        assert!(schedule.maghrib.unwrap() > schedule.sunset.unwrap());
    }

    #[test]
    fn hanafi_asr_is_later_than_shafii() {
        let shafii = PrayerCalculator::new(SAMARINDA, CalculationMethod::Mwl, AsrSchool::Shafii)
            .compute(date(2024, 3, 20));
        let hanafi = PrayerCalculator::new(SAMARINDA, CalculationMethod::Mwl, AsrSchool::Hanafi)
            .compute(date(2024, 3, 20));
        assert!(hanafi.asr.unwrap() > shafii.asr.unwrap());
        assert_eq!(format_hours(hanafi.asr.unwrap()), "16:32");
    }

    #[test]
    fn polar_winter_has_no_events_but_a_noon() {
        let polar = GeoPosition {
            latitude: 89.0,
            longitude: 0.0,
            utc_offset: 0.0,
        };
        let schedule = PrayerCalculator::new(polar, CalculationMethod::Mwl, AsrSchool::Shafii)
            .compute(date(2024, 12, 21));

        assert!(schedule.fajr.is_none());
        assert!(schedule.sunrise.is_none());
        assert!(schedule.sunset.is_none());
        assert!(schedule.maghrib.is_none());
        assert!(schedule.isha.is_none());
        assert_eq!(format_hours(schedule.dhuhr), "11:58");
    }

    #[test]
    fn equator_equinox_is_symmetric_about_noon() {
        let equator = GeoPosition {
            latitude: 0.0,
            longitude: 0.0,
            utc_offset: 0.0,
        };
        let schedule = PrayerCalculator::new(equator, CalculationMethod::Mwl, AsrSchool::Shafii)
            .compute(date(2024, 3, 20));

        let sunrise = schedule.sunrise.unwrap();
        let sunset = schedule.sunset.unwrap();
        let noon = schedule.dhuhr;
        // Roughly six hours either side of solar noon, within a few minutes.
        assert!((noon - sunrise - 6.0).abs() < 0.1, "{}", noon - sunrise);
        assert!((sunset - noon - 6.0).abs() < 0.1, "{}", sunset - noon);
    }
}
