// ABOUTME: Strength analytics and program progression engine
// ABOUTME: One-rep max, Wilks, standards, balance, personal records, and periodized programs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Strength Intelligence
//!
//! Pure, synchronous computations over in-memory training data. Nothing in this
//! crate performs I/O; the data-access and presentation layers live in the
//! application crate.
//!
//! Bad data (zero reps, unknown exercises, unrecognized sex codes) degrades to
//! neutral values rather than errors. Only program operations that are
//! structurally invalid return [`strength_core::errors::AppError`].

/// Estimation formulas: one-rep max and Wilks
pub mod algorithms;

/// Inter-lift ratio and proportion analysis
pub mod balance;

/// Engine configuration with environment overrides
pub mod config;

/// Volume and estimated one-rep-max record detection
pub mod personal_records;

/// Program generation and state advancement
pub mod progression;

/// Population strength standard classification
pub mod strength_standards;

pub use algorithms::{estimate_one_rep_max, wilks_coefficient};
pub use balance::{analyze as analyze_balance, BalanceReport, BigFourLifts};
pub use config::StrengthConfig;
pub use personal_records::{detect as detect_personal_records, PrDetection};
pub use progression::{advance, generate_workout};
pub use strength_standards::{classify, StrengthClassification, StrengthLevel};
