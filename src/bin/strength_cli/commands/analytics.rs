// ABOUTME: Analytics commands for strength-cli
// ABOUTME: Estimate, Wilks, classify, balance, profile, and personal-record review
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use pierre_strength::services::analytics;
use pierre_strength::{AppResult, StrengthConfig};
use serde_json::json;
use strength_core::models::{Sex, UnitSystem, UserProfile};
use strength_intelligence::algorithms::{wilks_coefficient, OneRepMaxFormula};
use strength_intelligence::balance::{analyze, BigFourLifts};
use strength_intelligence::estimate_one_rep_max;
use strength_intelligence::strength_standards::classify_for_profile;
use tracing::info;
use uuid::Uuid;

use crate::helpers::input::load_snapshot;
use crate::helpers::output::print_json;

/// Estimate a one-rep max from one set
pub fn estimate(weight: f64, reps: u32) -> AppResult<()> {
    let formula = OneRepMaxFormula::for_reps(reps);
    print_json(&json!({
        "weight": weight,
        "reps": reps,
        "formula": formula.name(),
        "estimated_1rm": estimate_one_rep_max(weight, reps),
    }))
}

/// Wilks points for a total at a bodyweight
pub fn wilks(total: f64, bodyweight: f64, sex: &str, units: &str) -> AppResult<()> {
    let units = UnitSystem::parse_or_default(units);
    let sex = Sex::parse_or_default(sex);
    let score = wilks_coefficient(
        units.to_kilograms(total),
        units.to_kilograms(bodyweight),
        sex,
    );
    print_json(&json!({
        "total": total,
        "bodyweight": bodyweight,
        "units": units,
        "sex": sex,
        "wilks": score,
    }))
}

/// Classify a one-rep max against the standards table
pub fn classify(exercise: &str, one_rep_max: f64, profile: &UserProfile) -> AppResult<()> {
    print_json(&classify_for_profile(exercise, profile, one_rep_max))
}

/// Balance analysis of up to four estimates
pub fn balance(
    lifts: &BigFourLifts,
    profile: Option<&UserProfile>,
    config: &StrengthConfig,
) -> AppResult<()> {
    print_json(&analyze(lifts, profile, &config.balance))
}

/// Strength profile of a user stored in a snapshot
pub async fn profile(input: &Path, user_id: Uuid, config: &StrengthConfig) -> AppResult<()> {
    let source = load_snapshot(input).await?;
    let report = analytics::strength_profile(&source, user_id, config).await?;
    print_json(&report)
}

/// Personal records set in a workout stored in a snapshot
pub async fn prs(input: &Path, workout_id: Uuid) -> AppResult<()> {
    let source = load_snapshot(input).await?;
    let detection = analytics::review_workout_prs(&source, workout_id).await?;
    info!(
        workout_id = %workout_id,
        has_records = detection.has_records(),
        "Personal record review complete"
    );
    print_json(&detection)
}
