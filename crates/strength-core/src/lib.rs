// ABOUTME: Core types and constants for the Pierre strength analytics engine
// ABOUTME: Foundation crate with error handling, training models, and standards data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Strength Core
//!
//! Foundation crate shared by the strength intelligence engine and the
//! application layer. Designed to change infrequently.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: sets, workouts, lifter profiles, programs, prescriptions
//! - **constants**: unit conversion, Wilks coefficients, balance targets, standards table

/// Unified error handling system with standard error codes
pub mod errors;

/// Training log, profile, and program models
pub mod models;

/// Domain constants and the versioned standards table
pub mod constants;
