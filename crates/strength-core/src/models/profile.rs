// ABOUTME: Lifter profile model with bodyweight, unit system, and sex
// ABOUTME: Read-only input to strength classification and relative-strength scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::KG_TO_LB;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Biological sex used to select coefficient sets and standards tables
///
/// Closed two-valued enumeration. Codes that cannot be parsed fall back to
/// `Male` through [`Sex::parse_or_default`], which logs the substitution.
/// Deserialization takes the same path, so a stray code in stored data never
/// rejects the record it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Sex {
    /// Male coefficient set and standards
    #[default]
    Male,
    /// Female coefficient set and standards
    Female,
}

impl Sex {
    /// Parse a free-form sex code (`m`, `male`, `f`, `female`, any case)
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "m" | "male" | "man" => Some(Self::Male),
            "f" | "female" | "woman" => Some(Self::Female),
            _ => None,
        }
    }

    /// Parse a sex code, defaulting to `Male` for unrecognized values
    #[must_use]
    pub fn parse_or_default(code: &str) -> Self {
        Self::parse(code).unwrap_or_else(|| {
            warn!(sex.code = %code, "Unrecognized sex code, using male coefficient set");
            Self::default()
        })
    }
}

impl From<String> for Sex {
    fn from(code: String) -> Self {
        Self::parse_or_default(&code)
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// Unit system a lifter records weights in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum UnitSystem {
    /// Pounds
    #[default]
    Imperial,
    /// Kilograms
    Metric,
}

impl UnitSystem {
    /// Parse a unit code (`lb`, `imperial`, `kg`, `metric`, any case)
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "lb" | "lbs" | "imperial" => Some(Self::Imperial),
            "kg" | "kgs" | "metric" => Some(Self::Metric),
            _ => None,
        }
    }

    /// Parse a unit code, defaulting to pounds for unrecognized values
    #[must_use]
    pub fn parse_or_default(code: &str) -> Self {
        Self::parse(code).unwrap_or_else(|| {
            warn!(units = %code, "Unrecognized unit system, using pounds");
            Self::default()
        })
    }

    /// Convert a weight in this unit system to pounds
    #[must_use]
    pub fn to_pounds(self, weight: f64) -> f64 {
        match self {
            Self::Imperial => weight,
            Self::Metric => weight * KG_TO_LB,
        }
    }

    /// Convert a weight in this unit system to kilograms
    #[must_use]
    pub fn to_kilograms(self, weight: f64) -> f64 {
        match self {
            Self::Imperial => weight / KG_TO_LB,
            Self::Metric => weight,
        }
    }

    /// Short unit label (`lb` or `kg`)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Imperial => "lb",
            Self::Metric => "kg",
        }
    }
}

impl From<String> for UnitSystem {
    fn from(code: String) -> Self {
        Self::parse_or_default(&code)
    }
}

/// Lifter profile supplied by the profile collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Bodyweight in `units`
    pub bodyweight: f64,
    /// Unit system for bodyweight and logged loads
    pub units: UnitSystem,
    /// Sex used for standards and coefficients
    pub sex: Sex,
    /// Age in years, used only by age-adjusted scoring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

impl UserProfile {
    /// Bodyweight expressed in pounds
    #[must_use]
    pub fn bodyweight_lb(&self) -> f64 {
        self.units.to_pounds(self.bodyweight)
    }

    /// Bodyweight expressed in kilograms
    #[must_use]
    pub fn bodyweight_kg(&self) -> f64 {
        self.units.to_kilograms(self.bodyweight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_parsing() {
        assert_eq!(Sex::parse("F"), Some(Sex::Female));
        assert_eq!(Sex::parse(" male "), Some(Sex::Male));
        assert_eq!(Sex::parse("x"), None);
        assert_eq!(Sex::parse_or_default("unknown"), Sex::Male);
    }

    #[test]
    fn test_profile_deserialization_defaults_unknown_codes() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"bodyweight": 80.0, "units": "kg", "sex": "F"}"#).unwrap();
        assert_eq!(profile.units, UnitSystem::Metric);
        assert_eq!(profile.sex, Sex::Female);

        let profile: UserProfile =
            serde_json::from_str(r#"{"bodyweight": 180.0, "units": "stone", "sex": "other"}"#)
                .unwrap();
        assert_eq!(profile.units, UnitSystem::Imperial);
        assert_eq!(profile.sex, Sex::Male);

        let round_trip = serde_json::to_string(&Sex::Female).unwrap();
        assert_eq!(round_trip, r#""female""#);
    }

    #[test]
    fn test_unit_conversion() {
        let kg = UnitSystem::Imperial.to_kilograms(220.462_262);
        assert!((kg - 100.0).abs() < 1e-6);
        assert!((UnitSystem::Metric.to_pounds(100.0) - 220.462_262).abs() < 1e-6);
    }
}
