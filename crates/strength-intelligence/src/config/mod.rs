// ABOUTME: Strength engine configuration with defaults, environment overrides, and validation
// ABOUTME: Covers warmup ramps, wave loading, linear progression increments, and balance scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strength Engine Configuration
//!
//! Tunable parameters for prescription and balance scoring. Formula constants
//! (1RM relations, Wilks coefficients, standards table) are not configurable.
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export STRENGTH_BAR_WEIGHT=20
//!    export STRENGTH_LOWER_BODY_INCREMENT=5
//!    export STRENGTH_BALANCE_SCORING=wilks_variance
//!    ```
//!
//! 2. Default values (pound-based) if env vars are not set

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static STRENGTH_CONFIG: OnceLock<StrengthConfig> = OnceLock::new();

/// Warmup ramp shared by every program type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarmupConfig {
    /// Empty barbell weight
    pub bar_weight: f64,
    /// Reps for the bar-only set
    pub bar_reps: u32,
    /// Working weight above which a 40% x 5 set is added
    pub first_ramp_threshold: f64,
    /// Working weight above which a 60% x 3 set is added
    pub second_ramp_threshold: f64,
    /// Warmup loads round to the nearest multiple of this
    pub rounding_increment: f64,
}

impl Default for WarmupConfig {
    fn default() -> Self {
        Self {
            bar_weight: 45.0,
            bar_reps: 5,
            first_ramp_threshold: 95.0,
            second_ramp_threshold: 135.0,
            rounding_increment: 5.0,
        }
    }
}

/// Four-week wave parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveLoadingConfig {
    /// Main and accessory loads round to the nearest multiple of this
    pub rounding_increment: f64,
    /// Number of supplemental sets after the main work
    pub accessory_sets: u32,
    /// Reps per supplemental set
    pub accessory_reps: u32,
    /// Fraction of training max used for supplemental sets
    pub accessory_percentage: f64,
}

impl Default for WaveLoadingConfig {
    fn default() -> Self {
        Self {
            rounding_increment: 2.5,
            accessory_sets: 5,
            accessory_reps: 10,
            accessory_percentage: 0.50,
        }
    }
}

/// Linear progression increments applied on every advance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearProgressionConfig {
    /// Squat, deadlift, and clean-type lifts
    pub lower_body_increment: f64,
    /// Every other lift
    pub upper_body_increment: f64,
}

impl Default for LinearProgressionConfig {
    fn default() -> Self {
        Self {
            lower_body_increment: 10.0,
            upper_body_increment: 5.0,
        }
    }
}

/// Strategy used to produce the balance score
///
/// The two strategies produce materially different numbers for the same input,
/// so exactly one is selected per deployment and recorded in every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceScoring {
    /// Closeness of each lift ratio to its ideal, averaged
    #[default]
    Range,
    /// 100 minus the variance of per-lift Wilks-extrapolated scores
    WilksVariance,
}

impl fmt::Display for BalanceScoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range => f.write_str("range"),
            Self::WilksVariance => f.write_str("wilks_variance"),
        }
    }
}

impl FromStr for BalanceScoring {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "range" | "ratio" | "range_based" => Ok(Self::Range),
            "wilks_variance" | "variance" => Ok(Self::WilksVariance),
            other => Err(ConfigError::Parse(format!(
                "Unknown balance scoring '{other}'. Valid options: range, wilks_variance"
            ))),
        }
    }
}

/// Balance analysis parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceConfig {
    /// Scoring strategy
    pub scoring: BalanceScoring,
    /// Share shortfall (fraction of total) that triggers a proportion imbalance
    pub proportion_shortfall_floor: f64,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            scoring: BalanceScoring::default(),
            proportion_shortfall_floor: 0.05,
        }
    }
}

/// Top-level strength engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrengthConfig {
    /// Warmup generation
    pub warmup: WarmupConfig,
    /// Wave loading prescriptions
    pub wave_loading: WaveLoadingConfig,
    /// Linear progression increments
    pub linear_progression: LinearProgressionConfig,
    /// Balance analysis
    pub balance: BalanceConfig,
}

impl StrengthConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        STRENGTH_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load strength config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a value is not finite, thresholds are unordered,
    /// increments are not positive, or percentages fall outside (0, 1]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let warmup = &self.warmup;
        let numeric = [
            ("bar_weight", warmup.bar_weight),
            ("first_ramp_threshold", warmup.first_ramp_threshold),
            ("second_ramp_threshold", warmup.second_ramp_threshold),
            ("warmup.rounding_increment", warmup.rounding_increment),
            ("wave_loading.rounding_increment", self.wave_loading.rounding_increment),
            ("accessory_percentage", self.wave_loading.accessory_percentage),
            ("lower_body_increment", self.linear_progression.lower_body_increment),
            ("upper_body_increment", self.linear_progression.upper_body_increment),
            ("proportion_shortfall_floor", self.balance.proportion_shortfall_floor),
        ];
        if let Some(&(name, _)) = numeric.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NonFinite(name));
        }

        if warmup.bar_weight <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("bar_weight must be positive"));
        }
        if warmup.first_ramp_threshold >= warmup.second_ramp_threshold {
            return Err(ConfigError::InvalidRange(
                "first_ramp_threshold must be < second_ramp_threshold",
            ));
        }
        if warmup.rounding_increment <= 0.0 || self.wave_loading.rounding_increment <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "rounding increments must be positive",
            ));
        }

        let wave = &self.wave_loading;
        if wave.accessory_percentage <= 0.0 || wave.accessory_percentage > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "accessory_percentage must be in (0, 1]",
            ));
        }

        let linear = &self.linear_progression;
        if linear.lower_body_increment <= 0.0 || linear.upper_body_increment <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "progression increments must be positive",
            ));
        }

        let floor = self.balance.proportion_shortfall_floor;
        if !(0.0..1.0).contains(&floor) {
            return Err(ConfigError::ValueOutOfRange(
                "proportion_shortfall_floor must be in [0, 1)",
            ));
        }

        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Warmup
        Self::apply_env_var("STRENGTH_BAR_WEIGHT", &mut self.warmup.bar_weight)?;
        Self::apply_env_var("STRENGTH_WARMUP_BAR_REPS", &mut self.warmup.bar_reps)?;
        Self::apply_env_var(
            "STRENGTH_WARMUP_FIRST_THRESHOLD",
            &mut self.warmup.first_ramp_threshold,
        )?;
        Self::apply_env_var(
            "STRENGTH_WARMUP_SECOND_THRESHOLD",
            &mut self.warmup.second_ramp_threshold,
        )?;
        Self::apply_env_var(
            "STRENGTH_WARMUP_ROUNDING",
            &mut self.warmup.rounding_increment,
        )?;

        // Wave loading
        Self::apply_env_var(
            "STRENGTH_WAVE_ROUNDING",
            &mut self.wave_loading.rounding_increment,
        )?;
        Self::apply_env_var(
            "STRENGTH_ACCESSORY_PERCENTAGE",
            &mut self.wave_loading.accessory_percentage,
        )?;

        // Linear progression
        Self::apply_env_var(
            "STRENGTH_LOWER_BODY_INCREMENT",
            &mut self.linear_progression.lower_body_increment,
        )?;
        Self::apply_env_var(
            "STRENGTH_UPPER_BODY_INCREMENT",
            &mut self.linear_progression.upper_body_increment,
        )?;

        // Balance
        Self::apply_env_var("STRENGTH_BALANCE_SCORING", &mut self.balance.scoring)?;
        Self::apply_env_var(
            "STRENGTH_PROPORTION_FLOOR",
            &mut self.balance.proportion_shortfall_floor,
        )?;

        Ok(self)
    }
}
