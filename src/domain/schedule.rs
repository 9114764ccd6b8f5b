//! The computed set of daily prayer events.

use crate::domain::astro::fix_hour;

/// One day's prayer events as fractional local clock hours in [0, 24).
///
/// An event is `None` when the sun never reaches the required altitude on
/// that date (polar and extreme-latitude cases). Dhuhr always occurs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PrayerSchedule {
    pub fajr: Option<f64>,
    pub sunrise: Option<f64>,
    pub dhuhr: f64,
    pub asr: Option<f64>,
    pub sunset: Option<f64>,
    pub maghrib: Option<f64>,
    pub isha: Option<f64>,
}

impl PrayerSchedule {
    /// The events in canonical order, Dhuhr included, for iteration.
    pub fn events(&self) -> [(&'static str, Option<f64>); 7] {
        [
            ("Fajr", self.fajr),
            ("Sunrise", self.sunrise),
            ("Dhuhr", Some(self.dhuhr)),
            ("Asr", self.asr),
            ("Sunset", self.sunset),
            ("Maghrib", self.maghrib),
            ("Isha", self.isha),
        ]
    }
}

/// Formats fractional hours as zero-padded `HH:MM`.
///
/// Sub-minute precision is truncated, not rounded; the input is wrapped
/// into [0, 24) first.
pub fn format_hours(time: f64) -> String {
    let time = fix_hour(time);
    let hours = time.floor();
    let minutes = ((time - hours) * 60.0).floor();
    format!("{:02}:{:02}", hours as u32, minutes as u32)
}

/// Whole minutes since local midnight, truncating sub-minute precision.
pub fn minutes_since_midnight(time: f64) -> u32 {
    let time = fix_hour(time);
    let hours = time.floor();
    (hours * 60.0 + ((time - hours) * 60.0).floor()) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_truncates_instead_of_rounding() {
        // 05:59:59 stays 05:59.
        assert_eq!(format_hours(5.0 + 59.0 / 60.0 + 59.0 / 3600.0), "05:59");
        assert_eq!(format_hours(12.5), "12:30");
        assert_eq!(format_hours(0.0), "00:00");
    }

    #[test]
    fn formatting_wraps_into_a_day() {
        assert_eq!(format_hours(24.25), "00:15");
        assert_eq!(format_hours(-0.5), "23:30");
    }

    #[test]
    fn minutes_since_midnight_matches_formatting() {
        assert_eq!(minutes_since_midnight(0.0), 0);
        assert_eq!(minutes_since_midnight(23.0 + 59.5 / 60.0), 23 * 60 + 59);
        assert_eq!(minutes_since_midnight(6.25), 375);
    }

    #[test]
    fn events_iterate_in_canonical_order() {
        let schedule = PrayerSchedule {
            dhuhr: 12.0,
            ..Default::default()
        };
        let names: Vec<&str> = schedule.events().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["Fajr", "Sunrise", "Dhuhr", "Asr", "Sunset", "Maghrib", "Isha"]
        );
    }
}
