// ABOUTME: Versioned population strength-standard table keyed by lift, sex, and bodyweight
// ABOUTME: Thresholds are in pounds for beginner, novice, intermediate, advanced, and elite levels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strength standards table.
//!
//! Treated as an opaque lookup input: the numbers are not reconciled against any
//! external source. Bump [`STANDARDS_VERSION`] whenever a value changes.

/// Version tag of the table below
pub const STANDARDS_VERSION: &str = "2025.1";

/// Percentile anchors for beginner, novice, intermediate, advanced, elite
pub const LEVEL_PERCENTILES: [f64; 5] = [5.0, 20.0, 50.0, 80.0, 95.0];

/// One bodyweight bracket: bracket bodyweight (lb) and five thresholds (lb)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardsRow {
    /// Bracket bodyweight in pounds
    pub bodyweight: f64,
    /// Beginner, novice, intermediate, advanced, elite one-rep-max thresholds in pounds
    pub thresholds: [f64; 5],
}

/// Standards for one canonical lift
#[derive(Debug, Clone, Copy)]
pub struct LiftStandards {
    /// Canonical exercise name
    pub exercise: &'static str,
    /// Male brackets, ascending by bodyweight
    pub male: &'static [StandardsRow],
    /// Female brackets, ascending by bodyweight
    pub female: &'static [StandardsRow],
}

const fn row(bodyweight: f64, thresholds: [f64; 5]) -> StandardsRow {
    StandardsRow {
        bodyweight,
        thresholds,
    }
}

const BARBELL_SQUAT_MALE: &[StandardsRow] = &[
    row(114.0, [70.0, 85.0, 105.0, 145.0, 180.0]),
    row(123.0, [75.0, 90.0, 110.0, 155.0, 195.0]),
    row(132.0, [80.0, 100.0, 120.0, 165.0, 210.0]),
    row(148.0, [90.0, 110.0, 135.0, 185.0, 235.0]),
    row(165.0, [100.0, 125.0, 150.0, 205.0, 265.0]),
    row(181.0, [110.0, 135.0, 165.0, 225.0, 290.0]),
    row(198.0, [120.0, 150.0, 180.0, 250.0, 315.0]),
    row(220.0, [130.0, 165.0, 200.0, 275.0, 350.0]),
    row(242.0, [145.0, 180.0, 220.0, 305.0, 385.0]),
    row(275.0, [165.0, 205.0, 250.0, 345.0, 440.0]),
    row(319.0, [190.0, 240.0, 285.0, 400.0, 510.0]),
];

const BARBELL_SQUAT_FEMALE: &[StandardsRow] = &[
    row(97.0, [40.0, 55.0, 70.0, 90.0, 120.0]),
    row(105.0, [40.0, 60.0, 75.0, 100.0, 130.0]),
    row(114.0, [45.0, 65.0, 80.0, 110.0, 145.0]),
    row(123.0, [50.0, 70.0, 85.0, 115.0, 155.0]),
    row(132.0, [55.0, 75.0, 90.0, 125.0, 165.0]),
    row(148.0, [60.0, 80.0, 105.0, 140.0, 185.0]),
    row(165.0, [65.0, 90.0, 115.0, 155.0, 205.0]),
    row(181.0, [70.0, 100.0, 125.0, 170.0, 225.0]),
    row(198.0, [80.0, 110.0, 140.0, 190.0, 250.0]),
];

const BENCH_PRESS_MALE: &[StandardsRow] = &[
    row(114.0, [50.0, 70.0, 85.0, 115.0, 150.0]),
    row(123.0, [55.0, 75.0, 90.0, 125.0, 160.0]),
    row(132.0, [60.0, 80.0, 100.0, 130.0, 170.0]),
    row(148.0, [65.0, 90.0, 110.0, 150.0, 190.0]),
    row(165.0, [75.0, 100.0, 125.0, 165.0, 215.0]),
    row(181.0, [80.0, 110.0, 135.0, 180.0, 235.0]),
    row(198.0, [90.0, 120.0, 150.0, 200.0, 255.0]),
    row(220.0, [100.0, 130.0, 165.0, 220.0, 285.0]),
    row(242.0, [110.0, 145.0, 180.0, 240.0, 315.0]),
    row(275.0, [125.0, 165.0, 205.0, 275.0, 360.0]),
    row(319.0, [145.0, 190.0, 240.0, 320.0, 415.0]),
];

const BENCH_PRESS_FEMALE: &[StandardsRow] = &[
    row(97.0, [25.0, 35.0, 50.0, 70.0, 85.0]),
    row(105.0, [25.0, 35.0, 55.0, 75.0, 95.0]),
    row(114.0, [30.0, 40.0, 55.0, 80.0, 105.0]),
    row(123.0, [30.0, 45.0, 60.0, 85.0, 110.0]),
    row(132.0, [35.0, 45.0, 65.0, 90.0, 120.0]),
    row(148.0, [35.0, 50.0, 75.0, 105.0, 135.0]),
    row(165.0, [40.0, 60.0, 85.0, 115.0, 150.0]),
    row(181.0, [45.0, 65.0, 90.0, 125.0, 165.0]),
    row(198.0, [50.0, 70.0, 100.0, 140.0, 180.0]),
];

const DEADLIFT_MALE: &[StandardsRow] = &[
    row(114.0, [85.0, 110.0, 130.0, 175.0, 230.0]),
    row(123.0, [90.0, 115.0, 140.0, 190.0, 245.0]),
    row(132.0, [100.0, 125.0, 150.0, 205.0, 265.0]),
    row(148.0, [110.0, 140.0, 170.0, 230.0, 295.0]),
    row(165.0, [125.0, 155.0, 190.0, 255.0, 330.0]),
    row(181.0, [135.0, 170.0, 210.0, 280.0, 360.0]),
    row(198.0, [150.0, 190.0, 230.0, 305.0, 395.0]),
    row(220.0, [165.0, 210.0, 255.0, 340.0, 440.0]),
    row(242.0, [180.0, 230.0, 280.0, 375.0, 485.0]),
    row(275.0, [205.0, 260.0, 315.0, 425.0, 550.0]),
    row(319.0, [240.0, 305.0, 365.0, 495.0, 640.0]),
];

const DEADLIFT_FEMALE: &[StandardsRow] = &[
    row(97.0, [50.0, 70.0, 85.0, 115.0, 150.0]),
    row(105.0, [55.0, 75.0, 95.0, 125.0, 165.0]),
    row(114.0, [55.0, 80.0, 105.0, 135.0, 175.0]),
    row(123.0, [60.0, 85.0, 110.0, 150.0, 190.0]),
    row(132.0, [65.0, 90.0, 120.0, 160.0, 205.0]),
    row(148.0, [75.0, 105.0, 135.0, 180.0, 230.0]),
    row(165.0, [85.0, 115.0, 150.0, 200.0, 255.0]),
    row(181.0, [90.0, 125.0, 165.0, 215.0, 280.0]),
    row(198.0, [100.0, 140.0, 180.0, 240.0, 305.0]),
];

const OVERHEAD_PRESS_MALE: &[StandardsRow] = &[
    row(114.0, [35.0, 45.0, 55.0, 80.0, 105.0]),
    row(123.0, [35.0, 50.0, 60.0, 85.0, 110.0]),
    row(132.0, [40.0, 55.0, 65.0, 90.0, 120.0]),
    row(148.0, [45.0, 60.0, 75.0, 105.0, 135.0]),
    row(165.0, [50.0, 65.0, 85.0, 115.0, 150.0]),
    row(181.0, [55.0, 70.0, 90.0, 125.0, 165.0]),
    row(198.0, [60.0, 80.0, 100.0, 140.0, 180.0]),
    row(220.0, [65.0, 90.0, 110.0, 155.0, 200.0]),
    row(242.0, [75.0, 95.0, 120.0, 170.0, 220.0]),
    row(275.0, [85.0, 110.0, 140.0, 195.0, 250.0]),
    row(319.0, [95.0, 130.0, 160.0, 225.0, 285.0]),
];

const OVERHEAD_PRESS_FEMALE: &[StandardsRow] = &[
    row(97.0, [15.0, 25.0, 35.0, 50.0, 65.0]),
    row(105.0, [20.0, 25.0, 35.0, 55.0, 70.0]),
    row(114.0, [20.0, 30.0, 40.0, 55.0, 75.0]),
    row(123.0, [20.0, 30.0, 45.0, 60.0, 80.0]),
    row(132.0, [25.0, 35.0, 45.0, 65.0, 85.0]),
    row(148.0, [25.0, 35.0, 50.0, 75.0, 95.0]),
    row(165.0, [30.0, 40.0, 60.0, 85.0, 105.0]),
    row(181.0, [35.0, 45.0, 65.0, 90.0, 120.0]),
    row(198.0, [35.0, 50.0, 70.0, 100.0, 130.0]),
];

/// All lifts with published standards
pub const LIFT_STANDARDS: &[LiftStandards] = &[
    LiftStandards {
        exercise: "Barbell Squat",
        male: BARBELL_SQUAT_MALE,
        female: BARBELL_SQUAT_FEMALE,
    },
    LiftStandards {
        exercise: "Bench Press",
        male: BENCH_PRESS_MALE,
        female: BENCH_PRESS_FEMALE,
    },
    LiftStandards {
        exercise: "Deadlift",
        male: DEADLIFT_MALE,
        female: DEADLIFT_FEMALE,
    },
    LiftStandards {
        exercise: "Overhead Press",
        male: OVERHEAD_PRESS_MALE,
        female: OVERHEAD_PRESS_FEMALE,
    },
];
