//! Tabular Gregorian-to-Hijri conversion.
//!
//! Arithmetic (civil) Islamic calendar over the 30-year intercalation
//! cycle, not moon sighting: dates can differ by a day from locally
//! announced ones. Good enough for display next to a day's prayer
//! schedule.

use chrono::{Datelike, NaiveDate};

/// Month names as displayed, Indonesian transliteration.
const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabiul Awal",
    "Rabiul Akhir",
    "Jumadil Awal",
    "Jumadil Akhir",
    "Rajab",
    "Syaban",
    "Ramadan",
    "Syawal",
    "Zulqaidah",
    "Zulhijjah",
];

/// A date in the tabular Islamic calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HijriDate {
    /// 1-based day of month, 1..=30.
    pub day: u32,
    /// 1-based month, Muharram = 1.
    pub month: u32,
    pub year: i32,
}

impl HijriDate {
    /// Converts a proleptic Gregorian calendar date.
    pub fn from_gregorian(date: NaiveDate) -> Self {
        let jd = gregorian_julian_day(date.year(), date.month(), date.day());

        // Civil tabular calendar, epoch JD 1948440 (16 July 622).
        let mut l = jd - 1948440 + 10632;
        let n = (l - 1).div_euclid(10631);
        l = l - 10631 * n + 354;
        let j = ((10985 - l) / 5316) * ((50 * l) / 17719) + (l / 5670) * ((43 * l) / 15238);
        l = l - ((30 - j) / 15) * ((17719 * j) / 50) - (j / 16) * ((15238 * j) / 43) + 29;
        let month = (24 * l) / 709;
        let day = l - (709 * month) / 24;
        let year = 30 * n + j - 30;

        Self {
            day: day as u32,
            month: month as u32,
            year: year as i32,
        }
    }

    /// Transliterated month name.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month as usize).clamp(1, 12) - 1]
    }
}

impl std::fmt::Display for HijriDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} H", self.day, self.month_name(), self.year)
    }
}

/// Julian day number at noon of a proleptic Gregorian date.
fn gregorian_julian_day(mut year: i32, mut month: u32, day: u32) -> i64 {
    if month <= 2 {
        year -= 1;
        month += 12;
    }
    let a = (year as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    ((365.25 * (year as f64 + 4716.0)).floor()
        + (30.6001 * (month as f64 + 1.0)).floor()
        + day as f64
        + b
        - 1524.0) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(y: i32, m: u32, d: u32) -> HijriDate {
        HijriDate::from_gregorian(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn known_anchor_dates() {
        assert_eq!(
            convert(2024, 3, 11),
            HijriDate { day: 1, month: 9, year: 1445 }
        );
        assert_eq!(
            convert(2024, 4, 10),
            HijriDate { day: 1, month: 10, year: 1445 }
        );
        assert_eq!(
            convert(2000, 1, 1),
            HijriDate { day: 24, month: 9, year: 1420 }
        );
        assert_eq!(
            convert(1970, 1, 1),
            HijriDate { day: 22, month: 10, year: 1389 }
        );
    }

    #[test]
    fn display_uses_month_name() {
        let hijri = convert(2024, 3, 20);
        assert_eq!(hijri.to_string(), "10 Ramadan 1445 H");
    }

    #[test]
    fn components_stay_in_calendar_range() {
        let mut date = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
        for _ in 0..5000 {
            let hijri = HijriDate::from_gregorian(date);
            assert!((1..=12).contains(&hijri.month), "{date}: {hijri:?}");
            assert!((1..=30).contains(&hijri.day), "{date}: {hijri:?}");
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn consecutive_days_advance_by_one() {
        let mut previous = convert(2024, 1, 1);
        let mut date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        for _ in 0..1000 {
            let current = HijriDate::from_gregorian(date);
            if current.month == previous.month && current.year == previous.year {
                assert_eq!(current.day, previous.day + 1, "{date}");
            } else {
                assert_eq!(current.day, 1, "{date}");
            }
            previous = current;
            date = date.succ_opt().unwrap();
        }
    }
}
