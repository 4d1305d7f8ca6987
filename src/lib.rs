// ABOUTME: Main library entry point for the Pierre strength analytics engine
// ABOUTME: Data-access seam, application services, and logging around the strength engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Strength
//!
//! Strength-training analytics and program progression built on the
//! `strength-intelligence` engine.
//!
//! ## Features
//!
//! - **One-rep max estimation**: rep-range dependent Brzycki / Epley relations
//! - **Relative strength**: Wilks coefficient and population standards
//! - **Balance analysis**: squat, bench press, deadlift, and overhead press ratios
//! - **Personal records**: volume and estimated one-rep max, tie-inclusive
//! - **Programs**: four-week wave loading and A/B linear progression
//!
//! ## Architecture
//!
//! - **`strength-core`**: errors, models, and constants
//! - **`strength-intelligence`**: the pure engine
//! - **`data_access`**: storage seam consumed by the services
//! - **`services`**: orchestration over a data source
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_strength::data_access::InMemoryDataSource;
//! use pierre_strength::services::analytics;
//! use pierre_strength::StrengthConfig;
//! use uuid::Uuid;
//!
//! # async fn run() -> pierre_strength::AppResult<()> {
//! let source = InMemoryDataSource::new();
//! let report = analytics::strength_profile(&source, Uuid::new_v4(), StrengthConfig::global()).await?;
//! println!("balance score: {}", report.balance.score);
//! # Ok(())
//! # }
//! ```

/// Storage seam and in-memory implementation
pub mod data_access;

/// Structured logging setup
pub mod logging;

/// Application services over a data source
pub mod services;

pub use strength_core::errors::{AppError, AppResult, ErrorCode};
pub use strength_intelligence::config::StrengthConfig;
