// ABOUTME: Program commands for strength-cli
// ABOUTME: Prints the next prescribed workout or advances a program stored in a snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use pierre_strength::services::programs;
use pierre_strength::{AppResult, StrengthConfig};
use tracing::info;
use uuid::Uuid;

use crate::helpers::input::{load_snapshot, save_snapshot};
use crate::helpers::output::print_json;

/// Print the program's next prescribed workout
pub async fn next(input: &Path, program_id: Uuid, config: &StrengthConfig) -> AppResult<()> {
    let source = load_snapshot(input).await?;
    let workout = programs::next_workout(&source, program_id, config).await?;
    print_json(&workout)
}

/// Advance the program and, unless `dry_run`, write the snapshot back
pub async fn advance(
    input: &Path,
    program_id: Uuid,
    dry_run: bool,
    config: &StrengthConfig,
) -> AppResult<()> {
    let source = load_snapshot(input).await?;
    let program = programs::advance_program(&source, program_id, config).await?;

    if dry_run {
        info!(program_id = %program_id, "Dry run, snapshot left unchanged");
    } else {
        save_snapshot(&source, input).await?;
    }
    print_json(&program)
}
