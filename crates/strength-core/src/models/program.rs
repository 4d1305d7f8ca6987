// ABOUTME: Training program state and prescribed workout models
// ABOUTME: Program, ProgramType, ProgramLift, PrescribedSet, and PrescribedWorkout definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::AppError;

/// Periodization model driving a program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramType {
    /// Four-week percentage wave (5s, 3s, 5/3/1, deload) on a training max
    WaveLoading,
    /// Alternating A/B sessions adding a fixed increment every session
    LinearProgression,
    /// User-authored program; the engine neither generates nor advances it
    Custom,
}

impl ProgramType {
    /// Stable identifier used in storage and logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WaveLoading => "wave_loading",
            Self::LinearProgression => "linear_progression",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgramType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wave_loading" | "wave" | "531" | "5/3/1" => Ok(Self::WaveLoading),
            "linear_progression" | "linear" | "novice" => Ok(Self::LinearProgression),
            "custom" => Ok(Self::Custom),
            other => Err(AppError::invalid_input(format!(
                "Unknown program type: '{other}'. Valid options: wave_loading, linear_progression, custom"
            ))),
        }
    }
}

/// Per-lift state of a program
///
/// For wave loading `training_max` is the percentage base. For linear
/// progression it holds the current absolute working weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramLift {
    /// Lift identifier
    pub id: Uuid,
    /// Owning program
    pub program_id: Uuid,
    /// Exercise display name
    pub exercise: String,
    /// Training max (wave loading) or working weight (linear progression)
    pub training_max: f64,
}

impl ProgramLift {
    /// Create a lift for the given program
    pub fn new(program_id: Uuid, exercise: impl Into<String>, training_max: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            program_id,
            exercise: exercise.into(),
            training_max,
        }
    }
}

/// Persisted program state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Program identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Display name
    pub name: String,
    /// Periodization model
    pub program_type: ProgramType,
    /// First training day
    pub start_date: NaiveDate,
    /// Wave week (1-4) or session counter, always >= 1
    pub current_week: u32,
    /// Wave cycle, or A/B session selector (1 or 2) for linear progression
    pub current_cycle: u32,
    /// At most one active program per user
    pub is_active: bool,
    /// Lifts with their current training max / working weight
    pub lifts: Vec<ProgramLift>,
}

impl Program {
    /// Create an inactive program at week 1, cycle 1 with no lifts
    pub fn new(
        user_id: Uuid,
        name: impl Into<String>,
        program_type: ProgramType,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            program_type,
            start_date,
            current_week: 1,
            current_cycle: 1,
            is_active: false,
            lifts: Vec::new(),
        }
    }

    /// Add a lift owned by this program
    #[must_use]
    pub fn with_lift(mut self, exercise: impl Into<String>, training_max: f64) -> Self {
        self.lifts.push(ProgramLift::new(self.id, exercise, training_max));
        self
    }

    /// Find a lift by exercise name (case-insensitive)
    #[must_use]
    pub fn lift(&self, exercise: &str) -> Option<&ProgramLift> {
        self.lifts
            .iter()
            .find(|lift| lift.exercise.eq_ignore_ascii_case(exercise))
    }
}

/// Section of a prescribed workout a set belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetBlock {
    /// Ramp-up sets before the working weight
    Warmup,
    /// Main working sets
    Main,
    /// Supplemental volume after the main sets
    Accessory,
}

/// A concrete set the lifter should perform next
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescribedSet {
    /// Exercise display name
    pub exercise: String,
    /// Ordinal within the exercise's sets, starting at 1
    pub set_number: u32,
    /// Load to use
    pub weight: f64,
    /// Target reps (minimum reps when AMRAP)
    pub reps: u32,
    /// As many reps as possible
    pub is_amrap: bool,
    /// Warmup set
    pub is_warmup: bool,
    /// Section of the workout
    pub block: SetBlock,
    /// Fraction of training max used, when percentage based
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

/// Prescription for the program's current position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescribedWorkout {
    /// Program the prescription was generated from
    pub program_id: Uuid,
    /// Program type
    pub program_type: ProgramType,
    /// Week (or session counter) the prescription is for
    pub week: u32,
    /// Cycle (or A/B selector) the prescription is for
    pub cycle: u32,
    /// Human-readable label, e.g. "Week 3 (5/3/1)" or "Session B"
    pub label: String,
    /// All sets in execution order
    pub sets: Vec<PrescribedSet>,
}

impl PrescribedWorkout {
    /// Sets for one exercise, in order
    #[must_use]
    pub fn sets_for(&self, exercise: &str) -> Vec<&PrescribedSet> {
        self.sets
            .iter()
            .filter(|set| set.exercise.eq_ignore_ascii_case(exercise))
            .collect()
    }
}
