// ABOUTME: Strength analytics service orchestrating estimation, classification, and records
// ABOUTME: Builds lifter strength profiles, previous-best lookups, and workout PR reviews
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strength_core::errors::AppResult;
use strength_core::models::{LiftEstimate, LoggedSet, UserProfile};
use strength_intelligence::algorithms::{best_estimate, estimate_set, wilks_coefficient};
use strength_intelligence::balance::{analyze, BalanceReport, BigFourLifts};
use strength_intelligence::config::StrengthConfig;
use strength_intelligence::personal_records::{detect, PrDetection};
use strength_intelligence::strength_standards::{
    canonical_exercise, classify_for_profile, StrengthClassification, BENCH_PRESS, DEADLIFT,
    OVERHEAD_PRESS, SQUAT,
};
use tracing::info;
use uuid::Uuid;

use crate::data_access::StrengthDataSource;

/// Best estimate and standing for one of the four main lifts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiftProfile {
    /// Canonical lift name
    pub lift: String,
    /// Best estimated one-rep max, absent when the lift was never logged
    pub best: Option<LiftEstimate>,
    /// Classification of `best` against the standards table
    pub classification: Option<StrengthClassification>,
}

/// Everything the engine can say about a lifter's current strength
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthProfile {
    /// Lifter
    pub user_id: Uuid,
    /// Profile used for normalization
    pub profile: UserProfile,
    /// Squat, bench press, deadlift, and overhead press, in that order
    pub lifts: Vec<LiftProfile>,
    /// Squat + bench + deadlift estimates in profile units, when all three exist
    pub total: Option<f64>,
    /// Wilks points for `total`
    pub wilks: Option<f64>,
    /// Inter-lift balance
    pub balance: BalanceReport,
}

fn estimate_of(lifts: &[LiftProfile], lift: &str) -> Option<f64> {
    lifts
        .iter()
        .find(|profile| profile.lift == lift)
        .and_then(|profile| profile.best.as_ref())
        .map(|best| best.estimated_1rm)
}

/// Non-warmup sets across several exercises, in chronological order
async fn sets_for_lift(
    source: &dyn StrengthDataSource,
    user_id: Uuid,
    exercise_ids: &[Uuid],
) -> AppResult<Vec<LoggedSet>> {
    let mut sets = Vec::new();
    for exercise_id in exercise_ids {
        sets.extend(source.fetch_sets(*exercise_id, user_id, None).await?);
    }
    sets.sort_by_key(|set| (set.performed_on, set.set_number));
    Ok(sets)
}

/// Build a lifter's strength profile.
///
/// Business rules:
/// - Exercises are matched to the four main lifts through the synonym table
/// - Each lift's best set is the highest estimated one-rep max; earliest wins ties
/// - Wilks is computed only when squat, bench press, and deadlift all have estimates
/// - Balance uses the configured scoring strategy
///
/// # Errors
///
/// Returns `ResourceNotFound` if the user has no profile, and data-access errors.
pub async fn strength_profile(
    source: &dyn StrengthDataSource,
    user_id: Uuid,
    config: &StrengthConfig,
) -> AppResult<StrengthProfile> {
    let profile = source.fetch_user_profile(user_id).await?;
    let exercises = source.list_exercises().await?;

    let mut lifts = Vec::with_capacity(4);
    for canonical in [SQUAT, BENCH_PRESS, DEADLIFT, OVERHEAD_PRESS] {
        let exercise_ids: Vec<Uuid> = exercises
            .iter()
            .filter(|exercise| canonical_exercise(&exercise.name) == Some(canonical))
            .map(|exercise| exercise.id)
            .collect();
        let sets = sets_for_lift(source, user_id, &exercise_ids).await?;
        let best = best_estimate(&sets);
        let classification = best
            .as_ref()
            .map(|best| classify_for_profile(canonical, &profile, best.estimated_1rm));
        lifts.push(LiftProfile {
            lift: canonical.to_owned(),
            best,
            classification,
        });
    }

    let big_four = BigFourLifts {
        squat: estimate_of(&lifts, SQUAT),
        bench: estimate_of(&lifts, BENCH_PRESS),
        deadlift: estimate_of(&lifts, DEADLIFT),
        ohp: estimate_of(&lifts, OVERHEAD_PRESS),
    };
    let total = match (big_four.squat, big_four.bench, big_four.deadlift) {
        (Some(squat), Some(bench), Some(deadlift)) => Some(squat + bench + deadlift),
        _ => None,
    };
    let wilks = total.map(|total| {
        wilks_coefficient(
            profile.units.to_kilograms(total),
            profile.bodyweight_kg(),
            profile.sex,
        )
    });
    let balance = analyze(&big_four, Some(&profile), &config.balance);

    let report = StrengthProfile {
        user_id,
        profile,
        lifts,
        total,
        wilks,
        balance,
    };

    info!(
        user_id = %user_id,
        total = ?report.total,
        balance_score = report.balance.score,
        imbalances = report.balance.imbalances.len(),
        "Built strength profile"
    );
    Ok(report)
}

/// Best estimated one-rep max for an exercise before a date.
///
/// # Errors
///
/// Returns data-access errors.
pub async fn previous_best(
    source: &dyn StrengthDataSource,
    user_id: Uuid,
    exercise_id: Uuid,
    before: NaiveDate,
) -> AppResult<Option<LiftEstimate>> {
    let best = source
        .fetch_best_historical_set(exercise_id, user_id, before)
        .await?;
    Ok(best.as_ref().map(estimate_set))
}

/// Detect personal records set in a workout.
///
/// Business rules:
/// - History is every non-warmup set the user logged for the workout's exercises
/// - The workout's own sets never count as history
///
/// # Errors
///
/// Returns `ResourceNotFound` if the workout does not exist, and data-access errors.
pub async fn review_workout_prs(
    source: &dyn StrengthDataSource,
    workout_id: Uuid,
) -> AppResult<PrDetection> {
    let workout = source.fetch_workout(workout_id).await?;
    let exercise_ids: BTreeSet<Uuid> = workout.sets.iter().map(|set| set.exercise_id).collect();

    let mut history = Vec::new();
    for exercise_id in exercise_ids {
        history.extend(source.fetch_sets(exercise_id, workout.user_id, None).await?);
    }

    let detection = detect(&workout, &history);
    info!(
        workout_id = %workout_id,
        user_id = %workout.user_id,
        exercises_with_records = detection.summary.len(),
        "Reviewed workout for personal records"
    );
    Ok(detection)
}
