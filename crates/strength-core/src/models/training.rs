// ABOUTME: Training log models: exercises, logged sets, workouts, and lift estimates
// ABOUTME: Logged sets are owned by their workout and ordered by set number
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exercise definition with its loading capabilities
///
/// Assistance movements (assisted pull-ups, assisted dips) record the machine's
/// counterweight as a negative load. That capability is an explicit flag rather
/// than something inferred from the exercise name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise identifier
    pub id: Uuid,
    /// Display name, e.g. "Back Squat"
    pub name: String,
    /// Whether negative weight (assistance load) is meaningful
    #[serde(default)]
    pub supports_negative_weight: bool,
}

impl Exercise {
    /// Create a free-weight exercise that rejects negative loads
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            supports_negative_weight: false,
        }
    }

    /// Create an assistance exercise whose load may be negative
    pub fn assisted(name: impl Into<String>) -> Self {
        Self {
            supports_negative_weight: true,
            ..Self::new(name)
        }
    }
}

/// A single logged set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedSet {
    /// Set identifier
    pub id: Uuid,
    /// Parent workout
    pub workout_id: Uuid,
    /// Exercise performed
    pub exercise_id: Uuid,
    /// Exercise display name, carried for reporting
    pub exercise_name: String,
    /// Ordinal of the set within its workout
    pub set_number: u32,
    /// Load; negative only for assistance exercises
    pub weight: f64,
    /// Completed repetitions
    pub reps: u32,
    /// Warmup sets never count toward records
    #[serde(default)]
    pub is_warmup: bool,
    /// Date inherited from the parent workout
    pub performed_on: NaiveDate,
}

impl LoggedSet {
    /// Volume of the set (weight x reps)
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }

    /// Check the set against its exercise's loading rules
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the set's exercise id does not match, or when a
    /// negative load is logged for an exercise that does not support assistance.
    pub fn validate(&self, exercise: &Exercise) -> AppResult<()> {
        if self.exercise_id != exercise.id {
            return Err(AppError::invalid_input(format!(
                "Set {} does not belong to exercise '{}'",
                self.id, exercise.name
            )));
        }
        if self.weight < 0.0 && !exercise.supports_negative_weight {
            return Err(AppError::invalid_input(format!(
                "Negative weight {:.1} is only allowed for assistance exercises, '{}' is not one",
                self.weight, exercise.name
            ))
            .with_resource_id(self.id.to_string()));
        }
        if !self.weight.is_finite() {
            return Err(AppError::invalid_input("Set weight must be a finite number"));
        }
        Ok(())
    }
}

/// A dated training session with its sets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Workout identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Session date
    pub date: NaiveDate,
    /// Sets in this workout
    pub sets: Vec<LoggedSet>,
}

impl Workout {
    /// Sets sorted by set number
    #[must_use]
    pub fn ordered_sets(&self) -> Vec<&LoggedSet> {
        let mut sets: Vec<&LoggedSet> = self.sets.iter().collect();
        sets.sort_by_key(|set| set.set_number);
        sets
    }
}

/// Estimated one-rep max derived from one set; never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftEstimate {
    /// Exercise display name
    pub exercise: String,
    /// Load of the source set
    pub weight: f64,
    /// Reps of the source set
    pub reps: u32,
    /// Estimated one-rep max
    pub estimated_1rm: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_for(exercise: &Exercise, weight: f64) -> LoggedSet {
        LoggedSet {
            id: Uuid::new_v4(),
            workout_id: Uuid::new_v4(),
            exercise_id: exercise.id,
            exercise_name: exercise.name.clone(),
            set_number: 1,
            weight,
            reps: 8,
            is_warmup: false,
            performed_on: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or_default(),
        }
    }

    #[test]
    fn test_negative_weight_requires_assistance_flag() {
        let squat = Exercise::new("Back Squat");
        let pullup = Exercise::assisted("Assisted Pull-Up");

        assert!(set_for(&squat, -20.0).validate(&squat).is_err());
        assert!(set_for(&pullup, -20.0).validate(&pullup).is_ok());
        assert!(set_for(&squat, 135.0).validate(&squat).is_ok());
    }

    #[test]
    fn test_volume_keeps_sign() {
        let pullup = Exercise::assisted("Assisted Pull-Up");
        assert!((set_for(&pullup, -30.0).volume() + 240.0).abs() < f64::EPSILON);
    }
}
