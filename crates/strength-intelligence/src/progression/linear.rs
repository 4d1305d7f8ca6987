// ABOUTME: Novice linear progression with alternating A/B sessions
// ABOUTME: Working weights rise by a category increment on every advance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use strength_core::models::{PrescribedSet, Program, ProgramLift, SetBlock};
use tracing::debug;

use super::warmup::warmup_sets;
use crate::config::{LinearProgressionConfig, StrengthConfig};
use crate::strength_standards::{canonical_exercise, BENCH_PRESS, DEADLIFT, OVERHEAD_PRESS, SQUAT};

/// Cycle value of session A
pub const SESSION_A: u32 = 1;
/// Cycle value of session B
pub const SESSION_B: u32 = 2;

/// Role a lift plays in the A/B template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearCategory {
    /// Trained every session
    Squat,
    /// Session A press
    BenchPress,
    /// Session A pull, single heavy set
    Deadlift,
    /// Session B press
    OverheadPress,
    /// Session B explosive pull (power clean)
    Clean,
    /// Session B alternative pull (barbell row)
    Row,
    /// Anything else, trained every session
    Other,
}

impl LinearCategory {
    /// Categorize an exercise by name
    ///
    /// Canonical names resolve through the standards synonym map. Variants are
    /// matched on whole words, so "Narrow Grip Bench Press" stays a bench press
    /// and "Front Squat" or "Sumo Deadlift" keep the lower-body increment.
    #[must_use]
    pub fn of(exercise: &str) -> Self {
        match canonical_exercise(exercise) {
            Some(SQUAT) => return Self::Squat,
            Some(BENCH_PRESS) => return Self::BenchPress,
            Some(DEADLIFT) => return Self::Deadlift,
            Some(OVERHEAD_PRESS) => return Self::OverheadPress,
            _ => {}
        }

        let lowered = exercise.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .collect();
        let has = |candidates: &[&str]| words.iter().any(|word| candidates.contains(word));

        if has(&["clean", "cleans"]) {
            Self::Clean
        } else if has(&["squat", "squats"]) {
            Self::Squat
        } else if has(&["deadlift", "deadlifts", "rdl"]) {
            Self::Deadlift
        } else if has(&["bench"]) {
            Self::BenchPress
        } else if has(&["overhead", "military", "ohp"]) {
            Self::OverheadPress
        } else if has(&["row", "rows"]) {
            Self::Row
        } else {
            Self::Other
        }
    }

    /// Whether the lift is trained in the given session
    #[must_use]
    pub const fn in_session(self, session: u32) -> bool {
        match self {
            Self::Squat | Self::Other => true,
            Self::BenchPress | Self::Deadlift => session != SESSION_B,
            Self::OverheadPress | Self::Clean | Self::Row => session == SESSION_B,
        }
    }

    /// Working sets x reps
    #[must_use]
    pub const fn scheme(self) -> (u32, u32) {
        match self {
            Self::Deadlift => (1, 5),
            Self::Clean => (5, 3),
            _ => (3, 5),
        }
    }

    /// Squat, deadlift, and clean-type lifts take the lower-body increment
    #[must_use]
    pub const fn increment(self, config: &LinearProgressionConfig) -> f64 {
        match self {
            Self::Squat | Self::Deadlift | Self::Clean => config.lower_body_increment,
            _ => config.upper_body_increment,
        }
    }
}

/// Session selector for a stored cycle value; anything but 2 is session A
#[must_use]
pub const fn session(program: &Program) -> u32 {
    if program.current_cycle == SESSION_B {
        SESSION_B
    } else {
        SESSION_A
    }
}

/// "Session A" or "Session B"
#[must_use]
pub fn label(program: &Program) -> String {
    let letter = if session(program) == SESSION_B { 'B' } else { 'A' };
    format!("Session {letter}")
}

/// Warmup and working sets for the lifts in the current session
#[must_use]
pub fn generate(program: &Program, config: &StrengthConfig) -> Vec<PrescribedSet> {
    let current = session(program);
    program
        .lifts
        .iter()
        .filter(|lift| LinearCategory::of(&lift.exercise).in_session(current))
        .flat_map(|lift| lift_sets(lift, config))
        .collect()
}

fn lift_sets(lift: &ProgramLift, config: &StrengthConfig) -> Vec<PrescribedSet> {
    let (set_count, reps) = LinearCategory::of(&lift.exercise).scheme();
    let working_weight = lift.training_max;
    let mut sets = warmup_sets(&lift.exercise, working_weight, &config.warmup);
    let first_working = u32::try_from(sets.len()).unwrap_or(u32::MAX).saturating_add(1);

    sets.extend((first_working..first_working + set_count).map(|set_number| PrescribedSet {
        exercise: lift.exercise.clone(),
        set_number,
        weight: working_weight,
        reps,
        is_amrap: false,
        is_warmup: false,
        block: SetBlock::Main,
        percentage: None,
    }));
    sets
}

/// Next session: toggle A/B, bump the session counter, and add every lift's increment
#[must_use]
pub fn advance(program: &Program, config: &LinearProgressionConfig) -> Program {
    let mut next = program.clone();
    next.current_week = program.current_week.saturating_add(1);
    next.current_cycle = if session(program) == SESSION_A {
        SESSION_B
    } else {
        SESSION_A
    };

    for lift in &mut next.lifts {
        let increment = LinearCategory::of(&lift.exercise).increment(config);
        debug!(
            exercise = %lift.exercise,
            from = lift.training_max,
            to = lift.training_max + increment,
            "Linear progression increment"
        );
        lift.training_max += increment;
    }
    next
}
