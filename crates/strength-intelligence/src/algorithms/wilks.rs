// ABOUTME: Wilks relative-strength coefficient and lifter age adjustment
// ABOUTME: Sex-specific quintic bodyweight denominator with fixed coefficient sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use strength_core::constants::balance::{
    JUNIOR_AGE_FACTORS, JUNIOR_AGE_LIMIT, MASTERS_AGE_FACTORS, MASTERS_AGE_LIMIT,
};
use strength_core::constants::wilks::{FEMALE, MALE, SCALE};
use strength_core::models::Sex;

/// Youngest age covered by the junior factor table
const JUNIOR_TABLE_START_AGE: u32 = JUNIOR_AGE_LIMIT - JUNIOR_AGE_FACTORS.len() as u32;

/// Wilks coefficient for a total lifted at a bodyweight
///
/// Formula: `Wilks = total x 500 / (a + b*bw + c*bw^2 + d*bw^3 + e*bw^4 + f*bw^5)`
///
/// Both inputs are in kilograms. Non-positive inputs, and bodyweights where the
/// polynomial is not positive, yield 0.
///
/// # Scientific References
///
/// - Wilks, R. (1995). "Wilks Formula." International Powerlifting Federation.
#[must_use]
pub fn wilks_coefficient(total_kg: f64, bodyweight_kg: f64, sex: Sex) -> f64 {
    if total_kg <= 0.0 || bodyweight_kg <= 0.0 {
        return 0.0;
    }

    let coefficients = match sex {
        Sex::Male => &MALE,
        Sex::Female => &FEMALE,
    };

    // Horner evaluation from the quintic term down
    let denominator = coefficients
        .iter()
        .rev()
        .fold(0.0_f64, |acc, coefficient| acc.mul_add(bodyweight_kg, *coefficient));

    if denominator <= 0.0 {
        return 0.0;
    }
    total_kg * SCALE / denominator
}

/// Wilks coefficient with a free-form sex code
///
/// Codes other than male/female use the male coefficient set.
#[must_use]
pub fn wilks_for_code(total_kg: f64, bodyweight_kg: f64, sex_code: &str) -> f64 {
    wilks_coefficient(total_kg, bodyweight_kg, Sex::parse_or_default(sex_code))
}

/// Multiplier applied to scores of junior (under 23) and masters (over 40) lifters
///
/// Ages 23-40 and unknown ages return 1.0. Ages beyond the tables clamp to
/// their nearest entry.
#[must_use]
pub fn age_adjustment(age: Option<u32>) -> f64 {
    let Some(age) = age else {
        return 1.0;
    };

    if age < JUNIOR_AGE_LIMIT {
        let index = age.saturating_sub(JUNIOR_TABLE_START_AGE) as usize;
        return JUNIOR_AGE_FACTORS[index.min(JUNIOR_AGE_FACTORS.len() - 1)];
    }
    if age > MASTERS_AGE_LIMIT {
        let index = (age - MASTERS_AGE_LIMIT - 1) as usize;
        return MASTERS_AGE_FACTORS[index.min(MASTERS_AGE_FACTORS.len() - 1)];
    }
    1.0
}
