// ABOUTME: Core data models for strength-training analytics
// ABOUTME: Re-exports training log, lifter profile, and program state types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Exercise`, `LoggedSet`, `Workout`: the raw training log
//! - `LiftEstimate`: derived per-set one-rep-max estimate
//! - `UserProfile`, `Sex`, `UnitSystem`: lifter attributes used for normalization
//! - `Program`, `ProgramLift`, `ProgramType`: persisted progression state
//! - `PrescribedSet`, `PrescribedWorkout`: what the lifter should do next

mod profile;
mod program;
mod training;

pub use profile::{Sex, UnitSystem, UserProfile};
pub use program::{
    PrescribedSet, PrescribedWorkout, Program, ProgramLift, ProgramType, SetBlock,
};
pub use training::{Exercise, LiftEstimate, LoggedSet, Workout};
