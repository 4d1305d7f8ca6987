// ABOUTME: Program progression engine dispatching on program type
// ABOUTME: Generates the next prescribed workout and computes the next program state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Program Progression Engine
//!
//! Each [`ProgramType`] owns one generate function and one advance function.
//! The engine is pure: it reads a program snapshot and returns either a
//! prescription or the complete next program state for the caller to persist.
//!
//! # Program Types
//!
//! - **Wave loading**: four-week percentage wave on a training max
//! - **Linear progression**: alternating A/B sessions with per-session increments
//! - **Custom**: user-authored, neither generated nor advanced here

/// Alternating A/B novice linear progression
pub mod linear;
/// Shared warmup ramp
pub mod warmup;
/// Four-week wave loading
pub mod wave_loading;

use strength_core::errors::{AppError, AppResult};
use strength_core::models::{PrescribedWorkout, Program, ProgramType};
use tracing::info;

use crate::config::StrengthConfig;

pub use warmup::warmup_sets;

/// Round to the nearest multiple of `increment`
#[must_use]
pub fn round_to_increment(weight: f64, increment: f64) -> f64 {
    if increment <= 0.0 {
        return weight;
    }
    (weight / increment).round() * increment
}

fn unsupported(program: &Program, operation: &str) -> AppError {
    AppError::precondition(format!(
        "Cannot {operation} program of type '{}'",
        program.program_type
    ))
    .with_resource_id(program.id.to_string())
}

/// Prescribed workout for the program's current position
///
/// # Errors
///
/// Returns `PreconditionViolation` for custom programs.
pub fn generate_workout(program: &Program, config: &StrengthConfig) -> AppResult<PrescribedWorkout> {
    let (label, sets) = match program.program_type {
        ProgramType::WaveLoading => (
            wave_loading::label(program),
            wave_loading::generate(program, config),
        ),
        ProgramType::LinearProgression => (linear::label(program), linear::generate(program, config)),
        ProgramType::Custom => return Err(unsupported(program, "generate a workout for")),
    };

    Ok(PrescribedWorkout {
        program_id: program.id,
        program_type: program.program_type,
        week: program.current_week,
        cycle: program.current_cycle,
        label,
        sets,
    })
}

/// Next program state after completing the current workout
///
/// Programs without lifts still move their week and cycle forward.
///
/// # Errors
///
/// Returns `PreconditionViolation` for custom programs.
pub fn advance(program: &Program, config: &StrengthConfig) -> AppResult<Program> {
    let next = match program.program_type {
        ProgramType::WaveLoading => wave_loading::advance(program),
        ProgramType::LinearProgression => linear::advance(program, &config.linear_progression),
        ProgramType::Custom => return Err(unsupported(program, "advance")),
    };

    info!(
        program_id = %program.id,
        program_type = %program.program_type,
        from_week = program.current_week,
        from_cycle = program.current_cycle,
        to_week = next.current_week,
        to_cycle = next.current_cycle,
        "Program advanced"
    );
    Ok(next)
}
