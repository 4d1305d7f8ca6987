// ABOUTME: Domain service layer orchestrating the strength engine over a data source
// ABOUTME: Protocol-agnostic analytics and program management reusable by any front end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services read from a [`crate::data_access::StrengthDataSource`], run the pure
//! engine, and persist any resulting state. They hold no state of their own.

/// Strength profiles, previous bests, and workout record reviews
pub mod analytics;

/// Program creation, activation, prescription, and advancement
pub mod programs;
