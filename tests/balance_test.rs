// ABOUTME: Tests for lift balance analysis
// ABOUTME: Ratio and proportion imbalances, range scoring, and Wilks-variance scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::male_profile;
use strength_intelligence::balance::{analyze, BigFourLifts, ImbalanceKind, ImbalanceSeverity, Lift};
use strength_intelligence::config::{BalanceConfig, BalanceScoring};

fn lifts(squat: f64, bench: f64, deadlift: f64, ohp: f64) -> BigFourLifts {
    BigFourLifts {
        squat: Some(squat),
        bench: Some(bench),
        deadlift: Some(deadlift),
        ohp: Some(ohp),
    }
}

fn variance_config() -> BalanceConfig {
    BalanceConfig {
        scoring: BalanceScoring::WilksVariance,
        ..BalanceConfig::default()
    }
}

#[test]
fn test_ideal_ratios_score_near_maximum() {
    let report = analyze(
        &lifts(415.0, 290.5, 500.0, 188.825),
        None,
        &BalanceConfig::default(),
    );

    assert_eq!(report.scoring, BalanceScoring::Range);
    assert!(report.imbalances.is_empty(), "{:?}", report.imbalances);
    assert!(report.score > 97.0 && report.score <= 100.0, "got {}", report.score);
    assert!((report.ratios.squat_to_deadlift - 0.83).abs() < 1e-9);
    assert!((report.ratios.deadlift_to_squat - 500.0 / 415.0).abs() < 1e-9);
}

#[test]
fn test_weak_bench_flagged_by_ratios_and_proportion() {
    let report = analyze(
        &lifts(400.0, 200.0, 480.0, 130.0),
        None,
        &BalanceConfig::default(),
    );

    assert!(!report.imbalances.is_empty());
    assert!(report
        .imbalances
        .iter()
        .all(|imbalance| imbalance.weak_lift == Lift::Bench));

    let bench_to_squat = report
        .imbalances
        .iter()
        .find(|imbalance| imbalance.metric == "bench_to_squat")
        .unwrap();
    assert_eq!(bench_to_squat.kind, ImbalanceKind::Ratio);
    assert_eq!(bench_to_squat.severity, ImbalanceSeverity::Mild);
    assert!((bench_to_squat.actual - 0.5).abs() < 1e-9);
    assert!(!bench_to_squat.suggestion.is_empty());

    let proportion = report
        .imbalances
        .iter()
        .find(|imbalance| imbalance.kind == ImbalanceKind::Proportion)
        .unwrap();
    assert_eq!(proportion.severity, ImbalanceSeverity::Moderate);
    assert!((proportion.expected - 0.25).abs() < f64::EPSILON);
}

#[test]
fn test_ratio_above_band_blames_denominator() {
    let report = analyze(
        &lifts(400.0, 280.0, 420.0, 180.0),
        None,
        &BalanceConfig::default(),
    );
    let squat_to_deadlift = report
        .imbalances
        .iter()
        .find(|imbalance| imbalance.metric == "squat_to_deadlift")
        .unwrap();
    assert_eq!(squat_to_deadlift.weak_lift, Lift::Deadlift);
}

#[test]
fn test_no_data_scores_zero() {
    let report = analyze(&BigFourLifts::default(), None, &BalanceConfig::default());
    assert!(report.score.abs() < f64::EPSILON);
    assert!(report.imbalances.is_empty());
    assert!(report.ratios.bench_to_squat.abs() < f64::EPSILON);
}

#[test]
fn test_partial_lifts_score_available_ratios_only() {
    let partial = BigFourLifts {
        squat: Some(300.0),
        bench: Some(210.0),
        ..BigFourLifts::default()
    };
    let report = analyze(&partial, None, &BalanceConfig::default());
    assert!((report.score - 100.0).abs() < 1e-6);
    assert!(report.ratios.squat_to_deadlift.abs() < f64::EPSILON);
    assert!(report
        .imbalances
        .iter()
        .all(|imbalance| imbalance.kind == ImbalanceKind::Ratio));
}

#[test]
fn test_proportion_floor_is_configurable() {
    let strict = BalanceConfig {
        proportion_shortfall_floor: 0.0,
        ..BalanceConfig::default()
    };
    let sample = lifts(380.0, 240.0, 450.0, 160.0);
    let default_report = analyze(&sample, None, &BalanceConfig::default());
    let strict_report = analyze(&sample, None, &strict);
    let count = |report: &strength_intelligence::balance::BalanceReport| {
        report
            .imbalances
            .iter()
            .filter(|imbalance| imbalance.kind == ImbalanceKind::Proportion)
            .count()
    };
    assert!(count(&strict_report) > count(&default_report));
}

#[test]
fn test_variance_without_profile_scores_zero() {
    let report = analyze(&lifts(370.0, 250.0, 380.0, 160.0), None, &variance_config());
    assert_eq!(report.scoring, BalanceScoring::WilksVariance);
    assert!(report.score.abs() < f64::EPSILON);
}

#[test]
fn test_variance_proportional_lifts_score_full() {
    let profile = male_profile(198.0);
    let report = analyze(
        &lifts(370.0, 250.0, 380.0, 160.0),
        Some(&profile),
        &variance_config(),
    );
    assert_eq!(report.lift_scores.len(), 4);
    assert!(report.score > 99.99, "got {}", report.score);
}

#[test]
fn test_variance_needs_two_lifts() {
    let profile = male_profile(198.0);
    let single = BigFourLifts {
        squat: Some(315.0),
        ..BigFourLifts::default()
    };
    let report = analyze(&single, Some(&profile), &variance_config());
    assert!(report.score.abs() < f64::EPSILON);
    assert_eq!(report.lift_scores.len(), 1);
}

#[test]
fn test_strategies_disagree_on_same_input() {
    let profile = male_profile(198.0);
    let sample = lifts(400.0, 200.0, 480.0, 130.0);
    let range = analyze(&sample, Some(&profile), &BalanceConfig::default());
    let variance = analyze(&sample, Some(&profile), &variance_config());

    assert!(range.lift_scores.is_empty());
    assert!((range.score - variance.score).abs() > 1.0);
    assert!(variance.score < 100.0);
}
