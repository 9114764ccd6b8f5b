//! DTOs for the method listing endpoint.

use serde::Serialize;

use crate::domain::method::{CalculationMethod, IshaRule, MaghribRule, MidnightConvention};

/// Listing of all calculation-method presets.
#[derive(Debug, Serialize)]
pub struct MethodListResponse {
    pub methods: Vec<MethodInfo>,
}

/// One preset and its angle parameters.
#[derive(Debug, Serialize)]
pub struct MethodInfo {
    pub name: &'static str,
    pub fajr_angle: f64,
    pub maghrib: MaghribRuleDto,
    pub isha: IshaRuleDto,
    pub midnight: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum MaghribRuleDto {
    AtSunset,
    Angle { degrees: f64 },
}

#[derive(Debug, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum IshaRuleDto {
    Angle { degrees: f64 },
    AfterMaghrib { minutes: f64 },
}

impl From<CalculationMethod> for MethodInfo {
    fn from(method: CalculationMethod) -> Self {
        let params = method.params();
        Self {
            name: method.name(),
            fajr_angle: params.fajr_angle,
            maghrib: match params.maghrib {
                MaghribRule::AtSunset => MaghribRuleDto::AtSunset,
                MaghribRule::Angle(degrees) => MaghribRuleDto::Angle { degrees },
            },
            isha: match params.isha {
                IshaRule::Angle(degrees) => IshaRuleDto::Angle { degrees },
                IshaRule::MinutesAfterMaghrib(minutes) => IshaRuleDto::AfterMaghrib { minutes },
            },
            midnight: match params.midnight {
                MidnightConvention::Standard => "standard",
                MidnightConvention::Jafari => "jafari",
            },
        }
    }
}
