// ABOUTME: Strength standard classification against bodyweight- and sex-keyed population tables
// ABOUTME: Synonym normalization, nearest-bracket lookup, level assignment, percentile interpolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strength standards classifier.
//!
//! All table values are pounds. Callers with metric data convert before
//! classifying (see [`classify_for_profile`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use strength_core::constants::standards::{
    LiftStandards, StandardsRow, LEVEL_PERCENTILES, LIFT_STANDARDS,
};
use strength_core::models::{Sex, UserProfile};
use tracing::debug;

/// Canonical name of the squat in the standards table
pub const SQUAT: &str = "Barbell Squat";
/// Canonical name of the bench press in the standards table
pub const BENCH_PRESS: &str = "Bench Press";
/// Canonical name of the deadlift in the standards table
pub const DEADLIFT: &str = "Deadlift";
/// Canonical name of the overhead press in the standards table
pub const OVERHEAD_PRESS: &str = "Overhead Press";

/// Exercise name spellings accepted for each canonical lift
const SYNONYMS: &[(&str, &str)] = &[
    ("squat", SQUAT),
    ("back squat", SQUAT),
    ("barbell squat", SQUAT),
    ("barbell back squat", SQUAT),
    ("high bar squat", SQUAT),
    ("low bar squat", SQUAT),
    ("bench", BENCH_PRESS),
    ("bench press", BENCH_PRESS),
    ("barbell bench press", BENCH_PRESS),
    ("flat bench press", BENCH_PRESS),
    ("deadlift", DEADLIFT),
    ("conventional deadlift", DEADLIFT),
    ("barbell deadlift", DEADLIFT),
    ("overhead press", OVERHEAD_PRESS),
    ("ohp", OVERHEAD_PRESS),
    ("press", OVERHEAD_PRESS),
    ("military press", OVERHEAD_PRESS),
    ("standing press", OVERHEAD_PRESS),
    ("shoulder press", OVERHEAD_PRESS),
    ("barbell overhead press", OVERHEAD_PRESS),
];

/// Qualitative strength level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthLevel {
    /// Exercise has no standards
    Unknown,
    /// Below the beginner threshold
    Untrained,
    /// Beginner threshold met
    Beginner,
    /// Novice threshold met
    Novice,
    /// Intermediate threshold met
    Intermediate,
    /// Advanced threshold met
    Advanced,
    /// Elite threshold met
    Elite,
}

impl StrengthLevel {
    /// Levels that carry a threshold in the table, ascending
    pub const RANKED: [Self; 5] = [
        Self::Beginner,
        Self::Novice,
        Self::Intermediate,
        Self::Advanced,
        Self::Elite,
    ];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Untrained => "Untrained",
            Self::Beginner => "Beginner",
            Self::Novice => "Novice",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Elite => "Elite",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Next level up and the one-rep max it requires
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelTarget {
    /// Level to reach next
    pub level: StrengthLevel,
    /// One-rep-max threshold for that level (lb)
    pub weight: f64,
}

/// Result of classifying one lift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthClassification {
    /// Canonical exercise name, if recognized
    pub exercise: Option<String>,
    /// Assigned level
    pub level: StrengthLevel,
    /// Interpolated population percentile (0-100)
    pub percentile: f64,
    /// Next level up, absent at elite or for unknown exercises
    pub next_level_target: Option<LevelTarget>,
    /// Bodyweight bracket used (lb)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bracket_bodyweight: Option<f64>,
}

impl StrengthClassification {
    fn unknown() -> Self {
        Self {
            exercise: None,
            level: StrengthLevel::Unknown,
            percentile: 0.0,
            next_level_target: None,
            bracket_bodyweight: None,
        }
    }
}

/// Map an exercise name to its canonical standards name
#[must_use]
pub fn canonical_exercise(name: &str) -> Option<&'static str> {
    let normalized = name.split_whitespace().collect::<Vec<_>>().join(" ");
    let normalized = normalized.to_lowercase();
    SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == normalized)
        .map(|(_, canonical)| *canonical)
}

fn standards_for(canonical: &str) -> Option<&'static LiftStandards> {
    LIFT_STANDARDS
        .iter()
        .find(|standards| standards.exercise == canonical)
}

/// Nearest bracket by absolute bodyweight distance; ties keep the lower bracket
///
/// Rows are stored in ascending bodyweight order, so a strict comparison keeps
/// the first of two equidistant brackets.
fn nearest_bracket(rows: &[StandardsRow], bodyweight: f64) -> Option<&StandardsRow> {
    let mut nearest: Option<&StandardsRow> = None;
    for row in rows {
        let is_closer = nearest.is_none_or(|best| {
            (row.bodyweight - bodyweight).abs() < (best.bodyweight - bodyweight).abs()
        });
        if is_closer {
            nearest = Some(row);
        }
    }
    nearest
}

/// Piecewise-linear percentile over (threshold, percentile) anchors
///
/// Thresholds ascend with level, matching the anchor order.
fn interpolate_percentile(thresholds: &[f64; 5], one_rep_max: f64) -> f64 {
    let [lowest_weight, .., highest_weight] = *thresholds;
    let [lowest_percentile, .., highest_percentile] = LEVEL_PERCENTILES;
    if one_rep_max <= lowest_weight {
        return lowest_percentile;
    }
    if one_rep_max >= highest_weight {
        return highest_percentile;
    }

    for (weights, percentiles) in thresholds.windows(2).zip(LEVEL_PERCENTILES.windows(2)) {
        let (low_weight, high_weight) = (weights[0], weights[1]);
        let (low_percentile, high_percentile) = (percentiles[0], percentiles[1]);
        if one_rep_max >= low_weight && one_rep_max <= high_weight {
            let span = high_weight - low_weight;
            if span <= 0.0 {
                return high_percentile;
            }
            let position = (one_rep_max - low_weight) / span;
            return (high_percentile - low_percentile).mul_add(position, low_percentile);
        }
    }
    highest_percentile
}

/// Classify a lift against the standards table
///
/// `bodyweight` and `estimated_1rm` are in pounds. Unrecognized exercises yield
/// `Unknown` with percentile 0 and no target.
#[must_use]
pub fn classify(
    exercise_name: &str,
    bodyweight: f64,
    sex: Sex,
    estimated_1rm: f64,
) -> StrengthClassification {
    let Some(canonical) = canonical_exercise(exercise_name) else {
        debug!(exercise = %exercise_name, "No strength standards for exercise");
        return StrengthClassification::unknown();
    };
    let Some(standards) = standards_for(canonical) else {
        return StrengthClassification::unknown();
    };
    let rows = match sex {
        Sex::Male => standards.male,
        Sex::Female => standards.female,
    };
    let Some(bracket) = nearest_bracket(rows, bodyweight) else {
        return StrengthClassification::unknown();
    };

    let achieved = StrengthLevel::RANKED
        .iter()
        .zip(bracket.thresholds)
        .filter(|(_, threshold)| estimated_1rm >= *threshold)
        .map(|(level, _)| *level)
        .last();
    let level = achieved.unwrap_or(StrengthLevel::Untrained);

    let next_level_target = StrengthLevel::RANKED
        .iter()
        .zip(bracket.thresholds)
        .find(|(candidate, _)| *candidate > &level)
        .map(|(candidate, weight)| LevelTarget {
            level: *candidate,
            weight,
        });

    StrengthClassification {
        exercise: Some(canonical.to_owned()),
        level,
        percentile: interpolate_percentile(&bracket.thresholds, estimated_1rm),
        next_level_target,
        bracket_bodyweight: Some(bracket.bodyweight),
    }
}

/// Classify using a lifter profile, converting metric values to pounds first
#[must_use]
pub fn classify_for_profile(
    exercise_name: &str,
    profile: &UserProfile,
    estimated_1rm: f64,
) -> StrengthClassification {
    classify(
        exercise_name,
        profile.bodyweight_lb(),
        profile.sex,
        profile.units.to_pounds(estimated_1rm),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonym_normalization() {
        assert_eq!(canonical_exercise("Back  Squat"), Some(SQUAT));
        assert_eq!(canonical_exercise("OHP"), Some(OVERHEAD_PRESS));
        assert_eq!(canonical_exercise("Leg Press"), None);
    }

    #[test]
    fn test_nearest_bracket_tie_prefers_lower() {
        let rows = [
            StandardsRow {
                bodyweight: 100.0,
                thresholds: [1.0, 2.0, 3.0, 4.0, 5.0],
            },
            StandardsRow {
                bodyweight: 110.0,
                thresholds: [2.0, 3.0, 4.0, 5.0, 6.0],
            },
        ];
        let bracket = nearest_bracket(&rows, 105.0).map(|row| row.bodyweight);
        assert_eq!(bracket, Some(100.0));
    }

    #[test]
    fn test_interpolation_clamps_and_midpoints() {
        let thresholds = [100.0, 200.0, 300.0, 400.0, 500.0];
        assert!((interpolate_percentile(&thresholds, 50.0) - 5.0).abs() < f64::EPSILON);
        assert!((interpolate_percentile(&thresholds, 900.0) - 95.0).abs() < f64::EPSILON);
        assert!((interpolate_percentile(&thresholds, 250.0) - 35.0).abs() < 1e-9);
    }
}
