// ABOUTME: Input helpers for strength-cli
// ABOUTME: Lifter profile flags and JSON snapshot files backing the in-memory data source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use pierre_strength::data_access::memory::DataSnapshot;
use pierre_strength::data_access::InMemoryDataSource;
use pierre_strength::{AppError, AppResult};
use strength_core::models::{Sex, UnitSystem, UserProfile};
use tokio::fs;
use tracing::debug;

/// Build a lifter profile from command-line flags
pub fn profile_from_flags(bodyweight: f64, sex: &str, units: &str, age: Option<u32>) -> UserProfile {
    UserProfile {
        bodyweight,
        units: UnitSystem::parse_or_default(units),
        sex: Sex::parse_or_default(sex),
        age,
    }
}

/// Load a JSON snapshot file into an in-memory data source
pub async fn load_snapshot(path: &Path) -> AppResult<InMemoryDataSource> {
    let contents = fs::read_to_string(path).await.map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", path.display())).with_source(e)
    })?;
    let snapshot: DataSnapshot = serde_json::from_str(&contents)?;
    debug!(
        path = %path.display(),
        workouts = snapshot.workouts.len(),
        programs = snapshot.programs.len(),
        "Loaded snapshot"
    );
    InMemoryDataSource::from_snapshot(snapshot).await
}

/// Write the data source back to a JSON snapshot file
pub async fn save_snapshot(source: &InMemoryDataSource, path: &Path) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(&source.snapshot().await)?;
    fs::write(path, rendered).await.map_err(|e| {
        AppError::internal(format!("Cannot write {}: {e}", path.display())).with_source(e)
    })
}
