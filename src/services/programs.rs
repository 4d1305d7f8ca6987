// ABOUTME: Program management service: creation, activation, prescription, and advancement
// ABOUTME: Enforces one active program per user and persists engine-computed state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use strength_core::errors::{AppError, AppResult};
use strength_core::models::{PrescribedWorkout, Program};
use strength_intelligence::config::StrengthConfig;
use strength_intelligence::progression;
use tracing::{debug, info};
use uuid::Uuid;

use crate::data_access::StrengthDataSource;

/// Deactivate every other active program owned by the same user
async fn deactivate_siblings(source: &dyn StrengthDataSource, program: &Program) -> AppResult<()> {
    for mut sibling in source.list_programs(program.user_id).await? {
        if sibling.id != program.id && sibling.is_active {
            sibling.is_active = false;
            source.save_program(&sibling).await?;
            debug!(program_id = %sibling.id, user_id = %sibling.user_id, "Deactivated program");
        }
    }
    Ok(())
}

/// Create a program and make it the user's active program.
///
/// Business rules:
/// - Week and cycle start at 1 or above
/// - Every lift must belong to the program and carry a finite, non-negative weight
/// - The new program becomes active and all of the user's other programs are deactivated
///
/// # Errors
///
/// Returns `InvalidInput` for malformed lifts, and data-access errors.
pub async fn create_program(
    source: &dyn StrengthDataSource,
    mut program: Program,
) -> AppResult<Program> {
    if let Some(lift) = program
        .lifts
        .iter()
        .find(|lift| !lift.training_max.is_finite() || lift.training_max < 0.0)
    {
        return Err(AppError::invalid_input(format!(
            "Lift '{}' has invalid training max {}",
            lift.exercise, lift.training_max
        ))
        .with_resource_id(lift.id.to_string()));
    }

    program.current_week = program.current_week.max(1);
    program.current_cycle = program.current_cycle.max(1);
    program.is_active = true;

    deactivate_siblings(source, &program).await?;
    source.save_program(&program).await?;

    info!(
        program_id = %program.id,
        user_id = %program.user_id,
        program_type = %program.program_type,
        lifts = program.lifts.len(),
        "Created program"
    );
    Ok(program)
}

/// Make an existing program the user's only active program.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the program does not exist, and data-access errors.
pub async fn activate_program(
    source: &dyn StrengthDataSource,
    program_id: Uuid,
) -> AppResult<Program> {
    let mut program = source.fetch_program_with_lifts(program_id).await?;
    deactivate_siblings(source, &program).await?;

    program.is_active = true;
    source.save_program(&program).await?;

    info!(program_id = %program.id, user_id = %program.user_id, "Activated program");
    Ok(program)
}

/// Prescription for the program's current position.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the program does not exist, and
/// `PreconditionViolation` for custom programs.
pub async fn next_workout(
    source: &dyn StrengthDataSource,
    program_id: Uuid,
    config: &StrengthConfig,
) -> AppResult<PrescribedWorkout> {
    let program = source.fetch_program_with_lifts(program_id).await?;
    progression::generate_workout(&program, config)
}

/// Advance a program one step and persist the resulting state.
///
/// Business rules:
/// - The engine computes the complete next state from the stored snapshot
/// - The next state is persisted in a single write
///
/// # Errors
///
/// Returns `ResourceNotFound` if the program does not exist,
/// `PreconditionViolation` for custom programs, and data-access errors.
pub async fn advance_program(
    source: &dyn StrengthDataSource,
    program_id: Uuid,
    config: &StrengthConfig,
) -> AppResult<Program> {
    let program = source.fetch_program_with_lifts(program_id).await?;
    let next = progression::advance(&program, config)?;
    source.save_program(&next).await?;
    Ok(next)
}
