// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversion, Wilks coefficients, balance targets, and strength standards data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data grouped by domain. Nothing here is user-configurable; tunable
//! engine parameters live in the intelligence crate's configuration instead.

/// Population strength standards table
pub mod standards;

/// Unit conversion constants
pub mod units {
    /// Pounds per kilogram
    pub const KG_TO_LB: f64 = 2.204_622_62;
}

/// Wilks formula coefficients (a..f of the bodyweight quintic)
pub mod wilks {
    /// Male coefficient set
    pub const MALE: [f64; 6] = [
        -216.047_514_4,
        16.260_633_9,
        -0.002_388_645,
        -0.001_137_32,
        7.018_63e-6,
        -1.291e-8,
    ];

    /// Female coefficient set
    pub const FEMALE: [f64; 6] = [
        594.317_477_755_82,
        -27.238_425_364_47,
        0.821_122_268_71,
        -0.009_307_339_13,
        4.731_582e-5,
        -9.054e-8,
    ];

    /// Numerator scale of the coefficient
    pub const SCALE: f64 = 500.0;
}

/// Targets used by the lift balance analysis
pub mod balance {
    /// Expected share of the squat in a squat + bench + deadlift total
    pub const SQUAT_SHARE: f64 = 0.37;
    /// Expected share of the bench press in a squat + bench + deadlift total
    pub const BENCH_SHARE: f64 = 0.25;
    /// Expected share of the deadlift in a squat + bench + deadlift total
    pub const DEADLIFT_SHARE: f64 = 0.38;

    /// Typical fraction of a powerlifting total a single squat represents
    pub const SQUAT_PERCENT_OF_TOTAL: f64 = 0.37;
    /// Typical fraction of a powerlifting total a single bench press represents
    pub const BENCH_PERCENT_OF_TOTAL: f64 = 0.25;
    /// Typical fraction of a powerlifting total a single deadlift represents
    pub const DEADLIFT_PERCENT_OF_TOTAL: f64 = 0.38;
    /// Typical fraction of a powerlifting total an overhead press represents
    pub const OHP_PERCENT_OF_TOTAL: f64 = 0.16;

    /// Lifters younger than this receive a junior age factor
    pub const JUNIOR_AGE_LIMIT: u32 = 23;
    /// Lifters older than this receive a masters age factor
    pub const MASTERS_AGE_LIMIT: u32 = 40;

    /// Age factors for ages 14 through 22
    pub const JUNIOR_AGE_FACTORS: [f64; 9] = [1.23, 1.18, 1.13, 1.08, 1.06, 1.04, 1.03, 1.02, 1.01];

    /// Age factors for ages 41 through 80
    pub const MASTERS_AGE_FACTORS: [f64; 40] = [
        1.010, 1.020, 1.031, 1.043, 1.055, 1.068, 1.081, 1.095, 1.109, 1.124, // 41-50
        1.139, 1.155, 1.171, 1.188, 1.205, 1.223, 1.241, 1.260, 1.279, 1.299, // 51-60
        1.319, 1.340, 1.361, 1.383, 1.405, 1.428, 1.451, 1.475, 1.499, 1.524, // 61-70
        1.549, 1.575, 1.601, 1.628, 1.655, 1.683, 1.711, 1.740, 1.769, 1.799, // 71-80
    ];
}
