//! Calculation method presets and the Asr juristic school.
//!
//! Each method is a published angle convention for Fajr and Isha, with
//! optional Maghrib angle and midnight convention. Unknown method names are
//! not rejected by [`CalculationMethod::parse`]; callers fall back to the
//! configured default instead.

use serde::{Deserialize, Serialize};

/// A named calculation-method preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationMethod {
    /// Muslim World League.
    Mwl,
    /// Islamic Society of North America.
    Isna,
    /// Egyptian General Authority of Survey.
    Egypt,
    /// Umm al-Qura, Makkah.
    Makkah,
    /// University of Islamic Sciences, Karachi.
    Karachi,
    /// Institute of Geophysics, University of Tehran.
    Tehran,
    /// Shia Ithna-Ashari (Jafari).
    Jafari,
}

/// How Maghrib is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaghribRule {
    /// Maghrib coincides with sunset (the common case).
    AtSunset,
    /// Depression angle below the horizon, in degrees.
    Angle(f64),
}

/// How Isha is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IshaRule {
    /// Depression angle below the horizon, in degrees.
    Angle(f64),
    /// Fixed offset after Maghrib, in minutes (Umm al-Qura convention).
    MinutesAfterMaghrib(f64),
}

/// Midnight convention carried by a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MidnightConvention {
    /// Midpoint of sunset to sunrise.
    Standard,
    /// Midpoint of sunset to Fajr.
    Jafari,
}

/// The angle-parameter set selected by a [`CalculationMethod`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodParams {
    pub fajr_angle: f64,
    pub maghrib: MaghribRule,
    pub isha: IshaRule,
    pub midnight: MidnightConvention,
}

impl CalculationMethod {
    /// Every preset, in a stable listing order.
    pub const ALL: [CalculationMethod; 7] = [
        CalculationMethod::Mwl,
        CalculationMethod::Isna,
        CalculationMethod::Egypt,
        CalculationMethod::Makkah,
        CalculationMethod::Karachi,
        CalculationMethod::Tehran,
        CalculationMethod::Jafari,
    ];

    /// Parses a method name, case-insensitively.
    ///
    /// Returns `None` for unknown names; callers are expected to fall back
    /// to the configured default rather than reject the request.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "MWL" => Some(Self::Mwl),
            "ISNA" => Some(Self::Isna),
            "EGYPT" => Some(Self::Egypt),
            "MAKKAH" => Some(Self::Makkah),
            "KARACHI" => Some(Self::Karachi),
            "TEHRAN" => Some(Self::Tehran),
            "JAFARI" => Some(Self::Jafari),
            _ => None,
        }
    }

    /// Canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mwl => "MWL",
            Self::Isna => "ISNA",
            Self::Egypt => "Egypt",
            Self::Makkah => "Makkah",
            Self::Karachi => "Karachi",
            Self::Tehran => "Tehran",
            Self::Jafari => "Jafari",
        }
    }

    /// The angle-parameter set for this preset.
    pub fn params(&self) -> MethodParams {
        use IshaRule::*;
        use MaghribRule::*;
        match self {
            Self::Mwl => MethodParams {
                fajr_angle: 18.0,
                maghrib: AtSunset,
                isha: IshaRule::Angle(17.0),
                midnight: MidnightConvention::Standard,
            },
            Self::Isna => MethodParams {
                fajr_angle: 15.0,
                maghrib: AtSunset,
                isha: IshaRule::Angle(15.0),
                midnight: MidnightConvention::Standard,
            },
            Self::Egypt => MethodParams {
                fajr_angle: 19.5,
                maghrib: AtSunset,
                isha: IshaRule::Angle(17.5),
                midnight: MidnightConvention::Standard,
            },
            Self::Makkah => MethodParams {
                fajr_angle: 18.5,
                maghrib: AtSunset,
                isha: MinutesAfterMaghrib(90.0),
                midnight: MidnightConvention::Standard,
            },
            Self::Karachi => MethodParams {
                fajr_angle: 18.0,
                maghrib: AtSunset,
                isha: IshaRule::Angle(18.0),
                midnight: MidnightConvention::Standard,
            },
            Self::Tehran => MethodParams {
                fajr_angle: 17.7,
                maghrib: MaghribRule::Angle(4.5),
                isha: IshaRule::Angle(14.0),
                midnight: MidnightConvention::Jafari,
            },
            Self::Jafari => MethodParams {
                fajr_angle: 16.0,
                maghrib: MaghribRule::Angle(4.0),
                isha: IshaRule::Angle(14.0),
                midnight: MidnightConvention::Jafari,
            },
        }
    }
}

impl Default for CalculationMethod {
    fn default() -> Self {
        Self::Mwl
    }
}

impl std::fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Juristic school for the Asr shadow-length rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AsrSchool {
    /// Shadow equals object length (standard).
    #[default]
    Shafii,
    /// Shadow equals twice the object length.
    Hanafi,
}

impl AsrSchool {
    /// Parses a school name, case-insensitively. `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "shafii" | "standard" => Some(Self::Shafii),
            "hanafi" => Some(Self::Hanafi),
            _ => None,
        }
    }

    /// Canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Shafii => "Shafii",
            Self::Hanafi => "Hanafi",
        }
    }

    /// The shadow-length factor entering the Asr altitude formula.
    pub fn shadow_factor(&self) -> f64 {
        match self {
            Self::Shafii => 1.0,
            Self::Hanafi => 2.0,
        }
    }
}

impl std::fmt::Display for AsrSchool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(CalculationMethod::parse("mwl"), Some(CalculationMethod::Mwl));
        assert_eq!(
            CalculationMethod::parse("MAKKAH"),
            Some(CalculationMethod::Makkah)
        );
        assert_eq!(
            CalculationMethod::parse(" karachi "),
            Some(CalculationMethod::Karachi)
        );
        assert_eq!(CalculationMethod::parse("nonsense"), None);
    }

    #[test]
    fn every_method_round_trips_through_its_name() {
        for method in CalculationMethod::ALL {
            assert_eq!(CalculationMethod::parse(method.name()), Some(method));
        }
    }

    #[test]
    fn makkah_uses_minute_based_isha() {
        match CalculationMethod::Makkah.params().isha {
            IshaRule::MinutesAfterMaghrib(minutes) => assert_eq!(minutes, 90.0),
            other => panic!("expected minute-based isha, got {other:?}"),
        }
    }

    #[test]
    fn jafari_methods_carry_maghrib_angles() {
        assert_eq!(
            CalculationMethod::Tehran.params().maghrib,
            MaghribRule::Angle(4.5)
        );
        assert_eq!(
            CalculationMethod::Jafari.params().maghrib,
            MaghribRule::Angle(4.0)
        );
        assert_eq!(
            CalculationMethod::Mwl.params().maghrib,
            MaghribRule::AtSunset
        );
    }

    #[test]
    fn asr_school_parsing_and_factors() {
        assert_eq!(AsrSchool::parse("Shafii"), Some(AsrSchool::Shafii));
        assert_eq!(AsrSchool::parse("HANAFI"), Some(AsrSchool::Hanafi));
        assert_eq!(AsrSchool::parse("maliki"), None);
        assert_eq!(AsrSchool::Shafii.shadow_factor(), 1.0);
        assert_eq!(AsrSchool::Hanafi.shadow_factor(), 2.0);
    }
}
