// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides workout builders, seeded lifters, and quiet logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pierre_strength`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use chrono::NaiveDate;
use pierre_strength::data_access::InMemoryDataSource;
use std::sync::Once;
use strength_core::models::{Exercise, LoggedSet, Sex, UnitSystem, UserProfile, Workout};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Builder for workouts whose sets are numbered in insertion order
pub struct WorkoutBuilder {
    workout: Workout,
}

impl WorkoutBuilder {
    pub fn new(user_id: Uuid, date: NaiveDate) -> Self {
        Self {
            workout: Workout {
                id: Uuid::new_v4(),
                user_id,
                date,
                sets: Vec::new(),
            },
        }
    }

    fn push(mut self, exercise: &Exercise, weight: f64, reps: u32, is_warmup: bool) -> Self {
        let set_number = self.workout.sets.len() as u32 + 1;
        self.workout.sets.push(LoggedSet {
            id: Uuid::new_v4(),
            workout_id: self.workout.id,
            exercise_id: exercise.id,
            exercise_name: exercise.name.clone(),
            set_number,
            weight,
            reps,
            is_warmup,
            performed_on: self.workout.date,
        });
        self
    }

    /// Add a working set
    pub fn set(self, exercise: &Exercise, weight: f64, reps: u32) -> Self {
        self.push(exercise, weight, reps, false)
    }

    /// Add a warmup set
    pub fn warmup(self, exercise: &Exercise, weight: f64, reps: u32) -> Self {
        self.push(exercise, weight, reps, true)
    }

    pub fn build(self) -> Workout {
        self.workout
    }
}

/// Imperial male lifter profile
pub fn male_profile(bodyweight: f64) -> UserProfile {
    UserProfile {
        bodyweight,
        units: UnitSystem::Imperial,
        sex: Sex::Male,
        age: Some(30),
    }
}

/// A user with the four main lifts registered in a data source
pub struct Lifter {
    pub user_id: Uuid,
    pub squat: Exercise,
    pub bench: Exercise,
    pub deadlift: Exercise,
    pub ohp: Exercise,
}

/// Register the four main lifts and a 198 lb male profile
pub async fn seeded_lifter(source: &InMemoryDataSource) -> Lifter {
    let lifter = Lifter {
        user_id: Uuid::new_v4(),
        squat: Exercise::new("Back Squat"),
        bench: Exercise::new("Bench Press"),
        deadlift: Exercise::new("Deadlift"),
        ohp: Exercise::new("Overhead Press"),
    };
    for exercise in [&lifter.squat, &lifter.bench, &lifter.deadlift, &lifter.ohp] {
        source.add_exercise(exercise.clone()).await;
    }
    source
        .set_user_profile(lifter.user_id, male_profile(198.0))
        .await;
    lifter
}
