// ABOUTME: Configuration error types for strength engine validation
// ABOUTME: Defines error variants for invalid ranges, parse failures, and non-finite or out-of-range values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use strength_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Thresholds or bounds are not ordered correctly
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Numeric setting is NaN or infinite
    #[error("Value must be finite: {0}")]
    NonFinite(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
