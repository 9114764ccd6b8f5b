//! Low-order solar position model.
//!
//! Implements the standard solar-position series used by prayer-time
//! calculators: mean anomaly and ecliptic longitude from a days-since-J2000
//! count, then declination and the equation of time from the ecliptic
//! longitude and obliquity. Accuracy is on the order of one arc-minute,
//! which is adequate for HH:MM output.
//!
//! All angles are in degrees and all clock quantities in fractional hours;
//! the degree-mode trig helpers keep the formulas close to their published
//! form.

use std::f64::consts::PI;

/// Days since the J2000.0 epoch (Julian date 2451545.0).
const J2000: f64 = 2451545.0;

/// Solar declination and equation of time for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Declination of the sun in degrees.
    pub declination: f64,
    /// Equation of time in hours, range-reduced; combine with
    /// `fix_hour(12.0 - eqt)` to obtain apparent solar noon.
    pub equation_of_time: f64,
}

/// Julian day number for midnight UT of a proleptic Gregorian date.
pub fn julian_day(mut year: i32, mut month: u32, day: u32) -> f64 {
    if month <= 2 {
        year -= 1;
        month += 12;
    }

    let a = (year as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (year as f64 + 4716.0)).floor()
        + (30.6001 * (month as f64 + 1.0)).floor()
        + day as f64
        + b
        - 1524.5
}

/// Days since J2000 at local mean noon for the given date and longitude.
///
/// The half-day term moves the reference instant from midnight UT to noon;
/// the longitude term shifts it to the meridian of the observer so the
/// declination is sampled near the local transit.
pub fn days_since_j2000(year: i32, month: u32, day: u32, longitude: f64) -> f64 {
    julian_day(year, month, day) + 0.5 - longitude / (15.0 * 24.0) - J2000
}

/// Computes the declination angle of the sun and the equation of time.
pub fn sun_position(d: f64) -> SunPosition {
    let g = fix_angle(357.529 + 0.98560028 * d);
    let q = fix_angle(280.459 + 0.98564736 * d);
    let l = fix_angle(q + 1.915 * dsin(g) + 0.020 * dsin(2.0 * g));

    let e = 23.439 - 0.00000036 * d;

    let declination = darcsin(dsin(e) * dsin(l));
    let ra = fix_hour(darctan2(dcos(e) * dsin(l), dcos(l)) / 15.0);
    let equation_of_time = q / 15.0 - ra;

    SunPosition {
        declination,
        equation_of_time,
    }
}

/* ---------------------- Degree-mode trigonometry ----------------------- */

pub(crate) fn dsin(d: f64) -> f64 {
    deg2rad(d).sin()
}

pub(crate) fn dcos(d: f64) -> f64 {
    deg2rad(d).cos()
}

pub(crate) fn dtan(d: f64) -> f64 {
    deg2rad(d).tan()
}

pub(crate) fn darcsin(x: f64) -> f64 {
    rad2deg(x.asin())
}

pub(crate) fn darccos(x: f64) -> f64 {
    rad2deg(x.acos())
}

pub(crate) fn darctan(x: f64) -> f64 {
    rad2deg(x.atan())
}

pub(crate) fn darctan2(y: f64, x: f64) -> f64 {
    rad2deg(y.atan2(x))
}

fn deg2rad(d: f64) -> f64 {
    d * PI / 180.0
}

fn rad2deg(r: f64) -> f64 {
    r * 180.0 / PI
}

/// Range-reduces an angle in degrees into [0, 360).
pub fn fix_angle(a: f64) -> f64 {
    let a = a - 360.0 * (a / 360.0).floor();
    if a < 0.0 { a + 360.0 } else { a }
}

/// Range-reduces a clock value in hours into [0, 24).
pub fn fix_hour(a: f64) -> f64 {
    let a = a - 24.0 * (a / 24.0).floor();
    if a < 0.0 { a + 24.0 } else { a }
}
