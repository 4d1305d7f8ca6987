// ABOUTME: In-memory StrengthDataSource backed by a shared RwLock store
// ABOUTME: Loads and exports JSON snapshots and validates sets on insert
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{DateRange, StrengthDataSource};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use strength_core::errors::{AppError, AppResult};
use strength_core::models::{Exercise, LoggedSet, Program, UserProfile, Workout};
use strength_intelligence::algorithms::estimate_one_rep_max;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Profile keyed by its owner, as stored in snapshots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Owning user
    pub user_id: Uuid,
    /// Lifter profile
    #[serde(flatten)]
    pub profile: UserProfile,
}

/// Serializable image of the whole store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSnapshot {
    /// Exercise catalogue
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    /// Lifter profiles
    #[serde(default)]
    pub profiles: Vec<ProfileRecord>,
    /// Workouts with their sets
    #[serde(default)]
    pub workouts: Vec<Workout>,
    /// Programs with their lifts
    #[serde(default)]
    pub programs: Vec<Program>,
}

#[derive(Debug, Default)]
struct Store {
    exercises: HashMap<Uuid, Exercise>,
    profiles: HashMap<Uuid, UserProfile>,
    workouts: HashMap<Uuid, Workout>,
    programs: HashMap<Uuid, Program>,
}

impl Store {
    /// Non-warmup sets of one exercise for one user, ordered by date then set number
    fn user_sets(&self, exercise_id: Uuid, user_id: Uuid) -> Vec<LoggedSet> {
        let mut sets: Vec<LoggedSet> = self
            .workouts
            .values()
            .filter(|workout| workout.user_id == user_id)
            .flat_map(|workout| workout.sets.iter())
            .filter(|set| set.exercise_id == exercise_id && !set.is_warmup)
            .cloned()
            .collect();
        sets.sort_by_key(|set| (set.performed_on, set.set_number));
        sets
    }
}

/// Data source holding everything in process memory
///
/// Clones share the same store.
#[derive(Clone, Default)]
pub struct InMemoryDataSource {
    store: Arc<RwLock<Store>>,
}

impl InMemoryDataSource {
    /// Create an empty data source
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a data source from a snapshot, validating every workout
    ///
    /// # Errors
    ///
    /// Returns an error if any workout fails validation (see [`Self::record_workout`])
    pub async fn from_snapshot(snapshot: DataSnapshot) -> AppResult<Self> {
        let source = Self::new();
        for exercise in snapshot.exercises {
            source.add_exercise(exercise).await;
        }
        for record in snapshot.profiles {
            source.set_user_profile(record.user_id, record.profile).await;
        }
        for workout in snapshot.workouts {
            source.record_workout(workout).await?;
        }
        for program in &snapshot.programs {
            source.save_program(program).await?;
        }
        Ok(source)
    }

    /// Export the store as a snapshot with deterministic ordering
    pub async fn snapshot(&self) -> DataSnapshot {
        let store = self.store.read().await;

        let mut exercises: Vec<Exercise> = store.exercises.values().cloned().collect();
        exercises.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        let mut profiles: Vec<ProfileRecord> = store
            .profiles
            .iter()
            .map(|(user_id, profile)| ProfileRecord {
                user_id: *user_id,
                profile: profile.clone(),
            })
            .collect();
        profiles.sort_by_key(|record| record.user_id);

        let mut workouts: Vec<Workout> = store.workouts.values().cloned().collect();
        workouts.sort_by_key(|workout| (workout.date, workout.id));

        let mut programs: Vec<Program> = store.programs.values().cloned().collect();
        programs.sort_by_key(|program| (program.start_date, program.id));
        drop(store);

        DataSnapshot {
            exercises,
            profiles,
            workouts,
            programs,
        }
    }

    /// Register an exercise, replacing any with the same id
    pub async fn add_exercise(&self, exercise: Exercise) {
        self.store
            .write()
            .await
            .exercises
            .insert(exercise.id, exercise);
    }

    /// Set or replace a user's profile
    pub async fn set_user_profile(&self, user_id: Uuid, profile: UserProfile) {
        self.store.write().await.profiles.insert(user_id, profile);
    }

    /// Record a workout after validating each set
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if a set references an unknown exercise, and
    /// `InvalidInput` if a set belongs to another workout, carries another date,
    /// or breaks its exercise's loading rules
    pub async fn record_workout(&self, workout: Workout) -> AppResult<()> {
        let mut store = self.store.write().await;
        for set in &workout.sets {
            let exercise = store.exercises.get(&set.exercise_id).ok_or_else(|| {
                AppError::not_found(format!("Exercise {}", set.exercise_id))
                    .with_resource_id(set.id.to_string())
            })?;
            if set.workout_id != workout.id || set.performed_on != workout.date {
                return Err(AppError::invalid_input(format!(
                    "Set {} does not belong to workout {} on {}",
                    set.id, workout.id, workout.date
                )));
            }
            set.validate(exercise)?;
        }

        debug!(
            workout_id = %workout.id,
            user_id = %workout.user_id,
            sets = workout.sets.len(),
            "Recorded workout"
        );
        store.workouts.insert(workout.id, workout);
        Ok(())
    }
}

#[async_trait]
impl StrengthDataSource for InMemoryDataSource {
    async fn fetch_sets(
        &self,
        exercise_id: Uuid,
        user_id: Uuid,
        range: Option<DateRange>,
    ) -> AppResult<Vec<LoggedSet>> {
        let mut sets = self.store.read().await.user_sets(exercise_id, user_id);
        if let Some(range) = range {
            sets.retain(|set| range.contains(set.performed_on));
        }
        Ok(sets)
    }

    async fn fetch_best_historical_set(
        &self,
        exercise_id: Uuid,
        user_id: Uuid,
        before: NaiveDate,
    ) -> AppResult<Option<LoggedSet>> {
        let sets = self.store.read().await.user_sets(exercise_id, user_id);

        // Chronological scan with strict improvement keeps the earliest of equal bests
        let mut best: Option<(f64, LoggedSet)> = None;
        for set in sets.into_iter().filter(|set| set.performed_on < before) {
            let estimate = estimate_one_rep_max(set.weight, set.reps);
            if best.as_ref().is_none_or(|(current, _)| estimate > *current) {
                best = Some((estimate, set));
            }
        }
        Ok(best.map(|(_, set)| set))
    }

    async fn fetch_user_profile(&self, user_id: Uuid) -> AppResult<UserProfile> {
        self.store
            .read()
            .await
            .profiles
            .get(&user_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("User profile").with_user_id(user_id))
    }

    async fn fetch_program_with_lifts(&self, program_id: Uuid) -> AppResult<Program> {
        self.store
            .read()
            .await
            .programs
            .get(&program_id)
            .cloned()
            .ok_or_else(|| {
                AppError::not_found(format!("Program {program_id}"))
                    .with_resource_id(program_id.to_string())
            })
    }

    async fn fetch_workout(&self, workout_id: Uuid) -> AppResult<Workout> {
        self.store
            .read()
            .await
            .workouts
            .get(&workout_id)
            .cloned()
            .ok_or_else(|| {
                AppError::not_found(format!("Workout {workout_id}"))
                    .with_resource_id(workout_id.to_string())
            })
    }

    async fn list_exercises(&self) -> AppResult<Vec<Exercise>> {
        let mut exercises: Vec<Exercise> =
            self.store.read().await.exercises.values().cloned().collect();
        exercises.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(exercises)
    }

    async fn list_programs(&self, user_id: Uuid) -> AppResult<Vec<Program>> {
        let mut programs: Vec<Program> = self
            .store
            .read()
            .await
            .programs
            .values()
            .filter(|program| program.user_id == user_id)
            .cloned()
            .collect();
        programs.sort_by_key(|program| (program.start_date, program.id));
        Ok(programs)
    }

    async fn save_program(&self, program: &Program) -> AppResult<()> {
        if let Some(lift) = program.lifts.iter().find(|lift| lift.program_id != program.id) {
            return Err(AppError::invalid_input(format!(
                "Lift '{}' belongs to program {}, not {}",
                lift.exercise, lift.program_id, program.id
            )));
        }
        self.store
            .write()
            .await
            .programs
            .insert(program.id, program.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).unwrap_or_default()
    }

    fn workout_with(user_id: Uuid, exercise: &Exercise, date: NaiveDate, weight: f64) -> Workout {
        let id = Uuid::new_v4();
        Workout {
            id,
            user_id,
            date,
            sets: vec![LoggedSet {
                id: Uuid::new_v4(),
                workout_id: id,
                exercise_id: exercise.id,
                exercise_name: exercise.name.clone(),
                set_number: 1,
                weight,
                reps: 5,
                is_warmup: false,
                performed_on: date,
            }],
        }
    }

    #[tokio::test]
    async fn test_record_rejects_negative_weight_on_free_weight() {
        let source = InMemoryDataSource::new();
        let squat = Exercise::new("Back Squat");
        source.add_exercise(squat.clone()).await;

        let result = source
            .record_workout(workout_with(Uuid::new_v4(), &squat, day(1), -10.0))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_best_historical_set_respects_cutoff() {
        let source = InMemoryDataSource::new();
        let user = Uuid::new_v4();
        let bench = Exercise::new("Bench Press");
        source.add_exercise(bench.clone()).await;
        for (date, weight) in [(day(1), 185.0), (day(8), 205.0), (day(15), 195.0)] {
            source
                .record_workout(workout_with(user, &bench, date, weight))
                .await
                .unwrap_or_default();
        }

        let best = source
            .fetch_best_historical_set(bench.id, user, day(8))
            .await
            .ok()
            .flatten()
            .map(|set| set.weight);
        assert_eq!(best, Some(185.0));
    }
}
