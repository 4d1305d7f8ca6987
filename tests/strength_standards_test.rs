// ABOUTME: Tests for strength standard classification
// ABOUTME: Level assignment, percentile interpolation, synonyms, brackets, and unit handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use strength_core::constants::standards::{LIFT_STANDARDS, STANDARDS_VERSION};
use strength_core::models::{Sex, UnitSystem, UserProfile};
use strength_intelligence::strength_standards::{
    canonical_exercise, classify, classify_for_profile, StrengthLevel, SQUAT,
};

#[test]
fn test_intermediate_squat_between_anchors() {
    let result = classify("Squat", 200.0, Sex::Male, 185.0);

    assert_eq!(result.exercise.as_deref(), Some(SQUAT));
    assert_eq!(result.level, StrengthLevel::Intermediate);
    assert_eq!(result.bracket_bodyweight, Some(198.0));
    assert!(result.percentile > 50.0 && result.percentile < 80.0);
    // 50 + (185 - 180) / (250 - 180) * 30
    assert!((result.percentile - 52.142_857).abs() < 1e-4);

    let target = result.next_level_target.unwrap();
    assert_eq!(target.level, StrengthLevel::Advanced);
    assert!((target.weight - 250.0).abs() < f64::EPSILON);
}

#[test]
fn test_below_beginner_is_untrained() {
    let result = classify("back squat", 198.0, Sex::Male, 100.0);
    assert_eq!(result.level, StrengthLevel::Untrained);
    assert!((result.percentile - 5.0).abs() < f64::EPSILON);
    assert_eq!(
        result.next_level_target.map(|t| t.level),
        Some(StrengthLevel::Beginner)
    );
}

#[test]
fn test_elite_has_no_next_target() {
    let result = classify("Barbell Squat", 198.0, Sex::Male, 400.0);
    assert_eq!(result.level, StrengthLevel::Elite);
    assert!((result.percentile - 95.0).abs() < f64::EPSILON);
    assert!(result.next_level_target.is_none());
}

#[test]
fn test_threshold_is_inclusive() {
    let result = classify("Squat", 198.0, Sex::Male, 180.0);
    assert_eq!(result.level, StrengthLevel::Intermediate);
    assert!((result.percentile - 50.0).abs() < 1e-9);
}

#[test]
fn test_unknown_exercise_is_neutral() {
    let result = classify("Leg Press", 198.0, Sex::Male, 500.0);
    assert_eq!(result.level, StrengthLevel::Unknown);
    assert!(result.exercise.is_none());
    assert!(result.percentile.abs() < f64::EPSILON);
    assert!(result.next_level_target.is_none());
}

#[test]
fn test_percentile_monotonic_in_one_rep_max() {
    for (exercise, sex) in [
        ("Bench Press", Sex::Male),
        ("Deadlift", Sex::Female),
        ("OHP", Sex::Male),
    ] {
        let mut previous = 0.0;
        for step in 0..=120 {
            let one_rep_max = f64::from(step) * 5.0;
            let percentile = classify(exercise, 165.0, sex, one_rep_max).percentile;
            assert!(percentile >= previous, "{exercise} at {one_rep_max}");
            previous = percentile;
        }
    }
}

#[test]
fn test_female_table_used_for_female_lifters() {
    let male = classify("Squat", 198.0, Sex::Male, 150.0);
    let female = classify("Squat", 198.0, Sex::Female, 150.0);
    assert_eq!(male.level, StrengthLevel::Novice);
    assert_eq!(female.level, StrengthLevel::Intermediate);
}

#[test]
fn test_bodyweight_outside_table_uses_edge_bracket() {
    assert_eq!(
        classify("Squat", 90.0, Sex::Male, 100.0).bracket_bodyweight,
        Some(114.0)
    );
    assert_eq!(
        classify("Squat", 400.0, Sex::Male, 300.0).bracket_bodyweight,
        Some(319.0)
    );
}

#[test]
fn test_metric_profile_converts_to_pounds() {
    let profile = UserProfile {
        bodyweight: 90.0,
        units: UnitSystem::Metric,
        sex: Sex::Male,
        age: None,
    };
    // 90 kg ~ 198.4 lb, 84 kg ~ 185.2 lb
    let result = classify_for_profile("squat", &profile, 84.0);
    assert_eq!(result.bracket_bodyweight, Some(198.0));
    assert_eq!(result.level, StrengthLevel::Intermediate);
}

#[test]
fn test_synonyms_are_case_and_space_insensitive() {
    assert_eq!(canonical_exercise("  MILITARY   press "), canonical_exercise("ohp"));
    assert_eq!(canonical_exercise("Flat Bench Press"), Some("Bench Press"));
}

#[test]
fn test_table_rows_are_ascending() {
    assert!(!STANDARDS_VERSION.is_empty());
    for standards in LIFT_STANDARDS {
        for rows in [standards.male, standards.female] {
            for row in rows {
                assert!(
                    row.thresholds.windows(2).all(|pair| pair[0] < pair[1]),
                    "{} at {}",
                    standards.exercise,
                    row.bodyweight
                );
            }
            assert!(rows.windows(2).all(|pair| pair[0].bodyweight < pair[1].bodyweight));
        }
    }
}
