// ABOUTME: Four-week wave loading prescriptions on a per-lift training max
// ABOUTME: 5s, 3s, 5/3/1, and deload weeks plus a fixed supplemental volume block
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use strength_core::models::{PrescribedSet, Program, ProgramLift, SetBlock};
use tracing::debug;

use super::round_to_increment;
use super::warmup::warmup_sets;
use crate::config::StrengthConfig;

/// Weeks in one wave
pub const WEEKS_PER_CYCLE: u32 = 4;

/// Main-set scheme for one week of the wave
#[derive(Debug, Clone, Copy)]
pub struct WaveWeek {
    /// Label shown with the prescription
    pub label: &'static str,
    /// Fractions of training max, one per main set
    pub percentages: [f64; 3],
    /// Target reps, one per main set
    pub reps: [u32; 3],
    /// Whether the final main set is taken to as many reps as possible
    pub final_set_amrap: bool,
}

/// Main-set schemes for weeks 1 through 4
pub const WAVE_WEEKS: [WaveWeek; WEEKS_PER_CYCLE as usize] = [
    WaveWeek {
        label: "5s",
        percentages: [0.65, 0.75, 0.85],
        reps: [5, 5, 5],
        final_set_amrap: true,
    },
    WaveWeek {
        label: "3s",
        percentages: [0.70, 0.80, 0.90],
        reps: [3, 3, 3],
        final_set_amrap: true,
    },
    WaveWeek {
        label: "5/3/1",
        percentages: [0.75, 0.85, 0.95],
        reps: [5, 3, 1],
        final_set_amrap: true,
    },
    WaveWeek {
        label: "Deload",
        percentages: [0.40, 0.50, 0.60],
        reps: [5, 5, 5],
        final_set_amrap: false,
    },
];

/// Scheme for a stored week, mapping out-of-range values back into 1-4
#[must_use]
pub fn wave_week(week: u32) -> (u32, &'static WaveWeek) {
    let normalized = (week.max(1) - 1) % WEEKS_PER_CYCLE + 1;
    (normalized, &WAVE_WEEKS[(normalized - 1) as usize])
}

/// Label for the program's current week, e.g. "Week 3 (5/3/1)"
#[must_use]
pub fn label(program: &Program) -> String {
    let (week, scheme) = wave_week(program.current_week);
    format!("Week {week} ({})", scheme.label)
}

/// Warmup, main, and supplemental sets for every lift at the current week
#[must_use]
pub fn generate(program: &Program, config: &StrengthConfig) -> Vec<PrescribedSet> {
    let (week, scheme) = wave_week(program.current_week);
    program
        .lifts
        .iter()
        .flat_map(|lift| lift_sets(lift, scheme, config))
        .inspect(|set| debug!(week, exercise = %set.exercise, weight = set.weight, "Prescribed wave set"))
        .collect()
}

fn lift_sets(lift: &ProgramLift, scheme: &WaveWeek, config: &StrengthConfig) -> Vec<PrescribedSet> {
    let rounding = config.wave_loading.rounding_increment;
    let main: Vec<(f64, u32, f64)> = scheme
        .percentages
        .iter()
        .zip(scheme.reps)
        .map(|(percentage, reps)| {
            (
                round_to_increment(lift.training_max * percentage, rounding),
                reps,
                *percentage,
            )
        })
        .collect();

    let top_weight = main.iter().map(|(weight, _, _)| *weight).fold(0.0, f64::max);
    let mut sets = warmup_sets(&lift.exercise, top_weight, &config.warmup);
    let last_main = main.len() - 1;

    for (index, (weight, reps, percentage)) in main.into_iter().enumerate() {
        sets.push(PrescribedSet {
            exercise: lift.exercise.clone(),
            set_number: next_set_number(&sets),
            weight,
            reps,
            is_amrap: scheme.final_set_amrap && index == last_main,
            is_warmup: false,
            block: SetBlock::Main,
            percentage: Some(percentage),
        });
    }

    let accessory = &config.wave_loading;
    let accessory_weight = round_to_increment(
        lift.training_max * accessory.accessory_percentage,
        rounding,
    );
    for _ in 0..accessory.accessory_sets {
        sets.push(PrescribedSet {
            exercise: lift.exercise.clone(),
            set_number: next_set_number(&sets),
            weight: accessory_weight,
            reps: accessory.accessory_reps,
            is_amrap: false,
            is_warmup: false,
            block: SetBlock::Accessory,
            percentage: Some(accessory.accessory_percentage),
        });
    }
    sets
}

fn next_set_number(sets: &[PrescribedSet]) -> u32 {
    sets.last().map_or(1, |set| set.set_number + 1)
}

/// Next wave position: weeks 1-3 step forward, week 4 wraps into a new cycle
///
/// Training maxes are left as they are.
#[must_use]
pub fn advance(program: &Program) -> Program {
    let (week, _) = wave_week(program.current_week);
    let mut next = program.clone();
    if week >= WEEKS_PER_CYCLE {
        next.current_week = 1;
        next.current_cycle = program.current_cycle.saturating_add(1);
    } else {
        next.current_week = week + 1;
    }
    next
}
