// ABOUTME: Tests for one-rep-max estimation across rep ranges
// ABOUTME: Formula boundaries, neutral values for bad input, and monotonicity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{date, WorkoutBuilder};
use strength_core::models::Exercise;
use strength_intelligence::algorithms::{best_estimate, estimate_one_rep_max, OneRepMaxFormula};
use uuid::Uuid;

#[test]
fn test_single_rep_is_the_weight() {
    for weight in [45.0, 135.0, 317.5, 600.0] {
        assert!((estimate_one_rep_max(weight, 1) - weight).abs() < f64::EPSILON);
    }
}

#[test]
fn test_non_positive_inputs_estimate_zero() {
    assert!(estimate_one_rep_max(0.0, 5).abs() < f64::EPSILON);
    assert!(estimate_one_rep_max(-40.0, 8).abs() < f64::EPSILON);
    assert!(estimate_one_rep_max(225.0, 0).abs() < f64::EPSILON);
    assert!(estimate_one_rep_max(f64::NAN, 5).abs() < f64::EPSILON);
}

#[test]
fn test_brzycki_reference_value() {
    // 225 x 36 / 32
    let estimate = estimate_one_rep_max(225.0, 5);
    assert!((estimate - 253.125).abs() < 1e-9, "got {estimate}");
}

#[test]
fn test_epley_reference_value() {
    // 135 x (1 + 12/30)
    let estimate = estimate_one_rep_max(135.0, 12);
    assert!((estimate - 189.0).abs() < 1e-9, "got {estimate}");
}

#[test]
fn test_blend_zone_endpoints() {
    let brzycki_at_eight = 200.0 * 36.0 / 29.0;
    let epley_at_ten = 200.0 * (1.0 + 10.0 / 30.0);
    assert!((estimate_one_rep_max(200.0, 8) - brzycki_at_eight).abs() < 1e-9);
    assert!((estimate_one_rep_max(200.0, 10) - epley_at_ten).abs() < 1e-9);

    let nine = estimate_one_rep_max(200.0, 9);
    let brzycki_at_nine = 200.0 * 36.0 / 28.0;
    let epley_at_nine = 200.0 * (1.0 + 9.0 / 30.0);
    assert!((nine - (brzycki_at_nine + epley_at_nine) / 2.0).abs() < 1e-9);
}

#[test]
fn test_formula_names_follow_rep_ranges() {
    assert_eq!(OneRepMaxFormula::for_reps(3).name(), OneRepMaxFormula::Brzycki.name());
    assert_eq!(OneRepMaxFormula::for_reps(9), OneRepMaxFormula::Blended);
    assert_eq!(OneRepMaxFormula::for_reps(20), OneRepMaxFormula::Epley);
}

#[test]
fn test_monotonic_in_weight() {
    for reps in 1..=20 {
        let mut previous = 0.0;
        for step in 1..=80 {
            let weight = f64::from(step) * 5.0;
            let estimate = estimate_one_rep_max(weight, reps);
            assert!(estimate >= previous, "{weight} x {reps} decreased");
            previous = estimate;
        }
    }
}

#[test]
fn test_increasing_reps_two_to_six_increases_estimate() {
    let mut previous = estimate_one_rep_max(185.0, 1);
    for reps in 2..=6 {
        let estimate = estimate_one_rep_max(185.0, reps);
        assert!(estimate > previous, "reps {reps} did not increase");
        previous = estimate;
    }
}

#[test]
fn test_best_estimate_skips_warmups() {
    let bench = Exercise::new("Bench Press");
    let workout = WorkoutBuilder::new(Uuid::new_v4(), date(2025, 6, 2))
        .warmup(&bench, 300.0, 1)
        .set(&bench, 200.0, 1)
        .set(&bench, 180.0, 3)
        .build();

    let best = best_estimate(&workout.sets).unwrap();
    assert!((best.estimated_1rm - 200.0).abs() < f64::EPSILON);
    assert_eq!(best.reps, 1);
    assert!(best_estimate(&workout.sets[..1]).is_none());
}
