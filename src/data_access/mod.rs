// ABOUTME: Data-access abstraction consumed by the strength analytics services
// ABOUTME: Async trait over training logs, lifter profiles, and program state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strength_core::errors::AppResult;
use strength_core::models::{Exercise, LoggedSet, Program, UserProfile, Workout};
use uuid::Uuid;

/// In-memory implementation used by the CLI and tests
pub mod memory;

pub use memory::InMemoryDataSource;

/// Inclusive date range filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included
    pub start: NaiveDate,
    /// Last day included
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range covering `start..=end`
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `date` falls inside the range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Storage seam for the strength engine
///
/// The engine itself never performs I/O. Implementations own persistence and
/// must apply [`LoggedSet::validate`] when sets are recorded. Program writes
/// follow a read, compute, persist discipline; implementations serialize
/// concurrent writers to the same program.
#[async_trait]
pub trait StrengthDataSource: Send + Sync {
    /// Non-warmup sets for an exercise performed by a user, ordered by date then set number
    async fn fetch_sets(
        &self,
        exercise_id: Uuid,
        user_id: Uuid,
        range: Option<DateRange>,
    ) -> AppResult<Vec<LoggedSet>>;

    /// Non-warmup set with the highest estimated one-rep max strictly before `before`
    async fn fetch_best_historical_set(
        &self,
        exercise_id: Uuid,
        user_id: Uuid,
        before: NaiveDate,
    ) -> AppResult<Option<LoggedSet>>;

    /// Lifter profile (bodyweight, units, sex)
    ///
    /// Returns `ResourceNotFound` when the user has no profile.
    async fn fetch_user_profile(&self, user_id: Uuid) -> AppResult<UserProfile>;

    /// Program with its lifts embedded
    ///
    /// Returns `ResourceNotFound` when no program has this id.
    async fn fetch_program_with_lifts(&self, program_id: Uuid) -> AppResult<Program>;

    /// Workout with its sets
    ///
    /// Returns `ResourceNotFound` when no workout has this id.
    async fn fetch_workout(&self, workout_id: Uuid) -> AppResult<Workout>;

    /// Every known exercise
    async fn list_exercises(&self) -> AppResult<Vec<Exercise>>;

    /// Every program owned by a user
    async fn list_programs(&self, user_id: Uuid) -> AppResult<Vec<Program>>;

    /// Insert or replace a program and its lifts
    async fn save_program(&self, program: &Program) -> AppResult<()>;
}
