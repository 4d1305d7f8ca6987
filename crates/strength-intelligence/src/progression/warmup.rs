// ABOUTME: Warmup ramp shared by every generated program workout
// ABOUTME: Bar-only set, then 40% and 60% of the working weight above configured thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use strength_core::models::{PrescribedSet, SetBlock};

use super::round_to_increment;
use crate::config::WarmupConfig;

/// Fraction of the working weight for the first ramp set
const FIRST_RAMP_PERCENTAGE: f64 = 0.40;
/// Reps for the first ramp set
const FIRST_RAMP_REPS: u32 = 5;
/// Fraction of the working weight for the second ramp set
const SECOND_RAMP_PERCENTAGE: f64 = 0.60;
/// Reps for the second ramp set
const SECOND_RAMP_REPS: u32 = 3;

/// Warmup sets leading into `working_weight`, numbered from 1
///
/// The bar-only set is always present. Percentage sets are added only when the
/// working weight strictly exceeds the corresponding threshold.
#[must_use]
pub fn warmup_sets(exercise: &str, working_weight: f64, config: &WarmupConfig) -> Vec<PrescribedSet> {
    let mut ramp = vec![(config.bar_weight, config.bar_reps, None)];
    if working_weight > config.first_ramp_threshold {
        ramp.push((
            round_to_increment(working_weight * FIRST_RAMP_PERCENTAGE, config.rounding_increment),
            FIRST_RAMP_REPS,
            Some(FIRST_RAMP_PERCENTAGE),
        ));
    }
    if working_weight > config.second_ramp_threshold {
        ramp.push((
            round_to_increment(working_weight * SECOND_RAMP_PERCENTAGE, config.rounding_increment),
            SECOND_RAMP_REPS,
            Some(SECOND_RAMP_PERCENTAGE),
        ));
    }

    (1_u32..)
        .zip(ramp)
        .map(|(set_number, (weight, reps, percentage))| PrescribedSet {
            exercise: exercise.to_owned(),
            set_number,
            weight,
            reps,
            is_amrap: false,
            is_warmup: true,
            block: SetBlock::Warmup,
            percentage,
        })
        .collect()
}
