// ABOUTME: Integration tests for program management over the in-memory data source
// ABOUTME: Single active program per user, activation, prescription, and persisted advancement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{date, init_test_logging};
use pierre_strength::data_access::{InMemoryDataSource, StrengthDataSource};
use pierre_strength::services::programs::{
    activate_program, advance_program, create_program, next_workout,
};
use pierre_strength::{ErrorCode, StrengthConfig};
use strength_core::models::{Program, ProgramType};
use uuid::Uuid;

fn wave(user_id: Uuid, name: &str) -> Program {
    Program::new(user_id, name, ProgramType::WaveLoading, date(2025, 2, 3))
        .with_lift("Squat", 365.0)
        .with_lift("Bench Press", 255.0)
}

async fn active_ids(source: &InMemoryDataSource, user_id: Uuid) -> Vec<Uuid> {
    source
        .list_programs(user_id)
        .await
        .unwrap()
        .into_iter()
        .filter(|program| program.is_active)
        .map(|program| program.id)
        .collect()
}

#[tokio::test]
async fn test_create_program_deactivates_previous() {
    init_test_logging();
    let source = InMemoryDataSource::new();
    let user = Uuid::new_v4();
    let other_user = Uuid::new_v4();

    let first = create_program(&source, wave(user, "First")).await.unwrap();
    let others = create_program(&source, wave(other_user, "Other")).await.unwrap();
    let second = create_program(&source, wave(user, "Second")).await.unwrap();

    assert!(first.is_active);
    assert_eq!(active_ids(&source, user).await, vec![second.id]);
    assert_eq!(active_ids(&source, other_user).await, vec![others.id]);
}

#[tokio::test]
async fn test_create_program_normalizes_counters() {
    let source = InMemoryDataSource::new();
    let mut program = wave(Uuid::new_v4(), "Zeroed");
    program.current_week = 0;
    program.current_cycle = 0;

    let created = create_program(&source, program).await.unwrap();
    assert_eq!((created.current_week, created.current_cycle), (1, 1));
}

#[tokio::test]
async fn test_create_program_rejects_invalid_training_max() {
    let source = InMemoryDataSource::new();
    let program = wave(Uuid::new_v4(), "Broken").with_lift("Deadlift", f64::NAN);

    let error = create_program(&source, program).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_activate_program_switches_active() {
    let source = InMemoryDataSource::new();
    let user = Uuid::new_v4();
    let first = create_program(&source, wave(user, "First")).await.unwrap();
    create_program(&source, wave(user, "Second")).await.unwrap();

    let activated = activate_program(&source, first.id).await.unwrap();

    assert!(activated.is_active);
    assert_eq!(active_ids(&source, user).await, vec![first.id]);
}

#[tokio::test]
async fn test_advance_program_persists_state() {
    let source = InMemoryDataSource::new();
    let config = StrengthConfig::default();
    let program = create_program(&source, wave(Uuid::new_v4(), "Wave"))
        .await
        .unwrap();

    let before = next_workout(&source, program.id, &config).await.unwrap();
    assert_eq!(before.week, 1);

    let advanced = advance_program(&source, program.id, &config).await.unwrap();
    assert_eq!(advanced.current_week, 2);

    let stored = source.fetch_program_with_lifts(program.id).await.unwrap();
    assert_eq!(stored, advanced);
    let after = next_workout(&source, program.id, &config).await.unwrap();
    assert_eq!(after.label, "Week 2 (3s)");
}

#[tokio::test]
async fn test_custom_program_advance_leaves_state_untouched() {
    let source = InMemoryDataSource::new();
    let config = StrengthConfig::default();
    let custom = Program::new(
        Uuid::new_v4(),
        "Mine",
        ProgramType::Custom,
        date(2025, 2, 3),
    );
    let program = create_program(&source, custom).await.unwrap();

    let error = advance_program(&source, program.id, &config)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::PreconditionViolation);
    let stored = source.fetch_program_with_lifts(program.id).await.unwrap();
    assert_eq!(stored.current_week, 1);
}

#[tokio::test]
async fn test_missing_program_is_not_found() {
    let source = InMemoryDataSource::new();
    let config = StrengthConfig::default();

    for error in [
        advance_program(&source, Uuid::new_v4(), &config).await.unwrap_err(),
        next_workout(&source, Uuid::new_v4(), &config).await.unwrap_err(),
        activate_program(&source, Uuid::new_v4()).await.unwrap_err(),
    ] {
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
    }
}
