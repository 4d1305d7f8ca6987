// ABOUTME: Inter-lift balance analysis for squat, bench press, deadlift, and overhead press
// ABOUTME: Pairwise ratios, ratio and proportion imbalances, and a configurable symmetry score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Lift balance analysis.
//!
//! Ratios are unitless, so lifts may be supplied in either unit system as long as
//! all four share it. The Wilks-variance score additionally needs the lifter's
//! profile to normalize by bodyweight.

use serde::{Deserialize, Serialize};
use strength_core::constants::balance::{
    BENCH_PERCENT_OF_TOTAL, BENCH_SHARE, DEADLIFT_PERCENT_OF_TOTAL, DEADLIFT_SHARE,
    OHP_PERCENT_OF_TOTAL, SQUAT_PERCENT_OF_TOTAL, SQUAT_SHARE,
};
use strength_core::models::UserProfile;
use tracing::warn;

use crate::algorithms::wilks::{age_adjustment, wilks_coefficient};
use crate::config::{BalanceConfig, BalanceScoring};

/// Score given to a ratio sitting exactly on its acceptable band edge
const BAND_EDGE_SCORE: f64 = 50.0;

/// The four tracked barbell lifts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lift {
    /// Back squat
    Squat,
    /// Bench press
    Bench,
    /// Deadlift
    Deadlift,
    /// Standing overhead press
    OverheadPress,
}

impl Lift {
    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Squat => "Squat",
            Self::Bench => "Bench Press",
            Self::Deadlift => "Deadlift",
            Self::OverheadPress => "Overhead Press",
        }
    }

    /// Corrective suggestion when this lift lags
    #[must_use]
    pub const fn suggestion(self) -> &'static str {
        match self {
            Self::Squat => {
                "Squat twice a week and add paused or front squats to build leg drive"
            }
            Self::Bench => {
                "Raise pressing frequency and add close-grip and paused bench variations"
            }
            Self::Deadlift => {
                "Add deadlift variations (deficit, Romanian) and posterior-chain accessories"
            }
            Self::OverheadPress => {
                "Press overhead twice a week and add push presses and upper-back work"
            }
        }
    }

    const fn percent_of_total(self) -> f64 {
        match self {
            Self::Squat => SQUAT_PERCENT_OF_TOTAL,
            Self::Bench => BENCH_PERCENT_OF_TOTAL,
            Self::Deadlift => DEADLIFT_PERCENT_OF_TOTAL,
            Self::OverheadPress => OHP_PERCENT_OF_TOTAL,
        }
    }
}

/// Best one-rep-max estimates; absent lifts are `None`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BigFourLifts {
    /// Squat estimate
    pub squat: Option<f64>,
    /// Bench press estimate
    pub bench: Option<f64>,
    /// Deadlift estimate
    pub deadlift: Option<f64>,
    /// Overhead press estimate
    pub ohp: Option<f64>,
}

impl BigFourLifts {
    /// Estimate for one lift, only when positive
    #[must_use]
    pub fn get(&self, lift: Lift) -> Option<f64> {
        let value = match lift {
            Lift::Squat => self.squat,
            Lift::Bench => self.bench,
            Lift::Deadlift => self.deadlift,
            Lift::OverheadPress => self.ohp,
        };
        value.filter(|v| *v > 0.0)
    }

    fn ratio(&self, numerator: Lift, denominator: Lift) -> f64 {
        match (self.get(numerator), self.get(denominator)) {
            (Some(n), Some(d)) => n / d,
            _ => 0.0,
        }
    }
}

/// Pairwise lift ratios; 0 when either operand is missing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftRatios {
    /// Squat / deadlift
    pub squat_to_deadlift: f64,
    /// Bench / squat
    pub bench_to_squat: f64,
    /// Overhead press / bench
    pub ohp_to_bench: f64,
    /// Deadlift / squat
    pub deadlift_to_squat: f64,
    /// Bench / deadlift
    pub bench_to_deadlift: f64,
}

/// Acceptable band for one ratio
#[derive(Debug, Clone, Copy)]
struct RatioRange {
    name: &'static str,
    numerator: Lift,
    denominator: Lift,
    min: f64,
    max: f64,
    ideal: f64,
}

/// Ratios checked for imbalances and used by range scoring.
/// Deadlift / squat is reported only; it mirrors squat / deadlift.
const TRACKED_RATIOS: [RatioRange; 4] = [
    RatioRange {
        name: "squat_to_deadlift",
        numerator: Lift::Squat,
        denominator: Lift::Deadlift,
        min: 0.75,
        max: 0.90,
        ideal: 0.83,
    },
    RatioRange {
        name: "bench_to_squat",
        numerator: Lift::Bench,
        denominator: Lift::Squat,
        min: 0.60,
        max: 0.80,
        ideal: 0.70,
    },
    RatioRange {
        name: "ohp_to_bench",
        numerator: Lift::OverheadPress,
        denominator: Lift::Bench,
        min: 0.55,
        max: 0.75,
        ideal: 0.65,
    },
    RatioRange {
        name: "bench_to_deadlift",
        numerator: Lift::Bench,
        denominator: Lift::Deadlift,
        min: 0.50,
        max: 0.70,
        ideal: 0.60,
    },
];

/// Kind of imbalance detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImbalanceKind {
    /// A pairwise ratio left its acceptable band
    Ratio,
    /// A lift's share of the squat + bench + deadlift total is too small
    Proportion,
}

/// How far outside expectations the lift is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImbalanceSeverity {
    /// Under 15% relative deviation
    Mild,
    /// Under 30% relative deviation
    Moderate,
    /// 30% or more
    Severe,
}

impl ImbalanceSeverity {
    fn from_relative_deviation(deviation: f64) -> Self {
        if deviation < 0.15 {
            Self::Mild
        } else if deviation < 0.30 {
            Self::Moderate
        } else {
            Self::Severe
        }
    }
}

/// One detected imbalance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Imbalance {
    /// Ratio or proportion finding
    pub kind: ImbalanceKind,
    /// Ratio name for ratio findings, lift share for proportion findings
    pub metric: String,
    /// Lift that lags
    pub weak_lift: Lift,
    /// Severity
    pub severity: ImbalanceSeverity,
    /// Observed ratio or share
    pub actual: f64,
    /// Ideal ratio or expected share
    pub expected: f64,
    /// Human-readable explanation
    pub message: String,
    /// Corrective suggestion
    pub suggestion: String,
}

/// Strength score of one lift under the Wilks-variance strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftScore {
    /// Lift
    pub lift: Lift,
    /// Age-adjusted Wilks points extrapolated from this lift alone
    pub score: f64,
}

/// Full balance analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Pairwise ratios
    pub ratios: LiftRatios,
    /// Detected imbalances
    pub imbalances: Vec<Imbalance>,
    /// Symmetry score 0-100, higher is more balanced
    pub score: f64,
    /// Strategy that produced `score`
    pub scoring: BalanceScoring,
    /// Per-lift scores, populated by the Wilks-variance strategy
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lift_scores: Vec<LiftScore>,
}

/// Analyze balance between the four lifts
///
/// `profile` is only consulted by [`BalanceScoring::WilksVariance`]; without it that
/// strategy scores 0.
#[must_use]
pub fn analyze(
    lifts: &BigFourLifts,
    profile: Option<&UserProfile>,
    config: &BalanceConfig,
) -> BalanceReport {
    let ratios = LiftRatios {
        squat_to_deadlift: lifts.ratio(Lift::Squat, Lift::Deadlift),
        bench_to_squat: lifts.ratio(Lift::Bench, Lift::Squat),
        ohp_to_bench: lifts.ratio(Lift::OverheadPress, Lift::Bench),
        deadlift_to_squat: lifts.ratio(Lift::Deadlift, Lift::Squat),
        bench_to_deadlift: lifts.ratio(Lift::Bench, Lift::Deadlift),
    };

    let mut imbalances = ratio_imbalances(lifts);
    imbalances.extend(proportion_imbalances(
        lifts,
        config.proportion_shortfall_floor,
    ));

    let (score, lift_scores) = match config.scoring {
        BalanceScoring::Range => (range_score(lifts), Vec::new()),
        BalanceScoring::WilksVariance => profile.map_or_else(
            || {
                warn!("Wilks-variance balance scoring requested without a lifter profile");
                (0.0, Vec::new())
            },
            |profile| variance_score(lifts, profile),
        ),
    };

    BalanceReport {
        ratios,
        imbalances,
        score,
        scoring: config.scoring,
        lift_scores,
    }
}

fn ratio_imbalances(lifts: &BigFourLifts) -> Vec<Imbalance> {
    TRACKED_RATIOS
        .iter()
        .filter_map(|range| {
            let value = lifts.ratio(range.numerator, range.denominator);
            if value <= 0.0 || (range.min..=range.max).contains(&value) {
                return None;
            }
            let (weak, strong, outside) = if value < range.min {
                (range.numerator, range.denominator, range.min - value)
            } else {
                (range.denominator, range.numerator, value - range.max)
            };
            Some(Imbalance {
                kind: ImbalanceKind::Ratio,
                metric: range.name.to_owned(),
                weak_lift: weak,
                severity: ImbalanceSeverity::from_relative_deviation(outside / range.ideal),
                actual: value,
                expected: range.ideal,
                message: format!(
                    "{} is weak relative to {} ({} = {value:.2}, expected {:.2}-{:.2})",
                    weak.name(),
                    strong.name(),
                    range.name,
                    range.min,
                    range.max
                ),
                suggestion: weak.suggestion().to_owned(),
            })
        })
        .collect()
}

fn proportion_imbalances(lifts: &BigFourLifts, floor: f64) -> Vec<Imbalance> {
    let (Some(squat), Some(bench), Some(deadlift)) = (
        lifts.get(Lift::Squat),
        lifts.get(Lift::Bench),
        lifts.get(Lift::Deadlift),
    ) else {
        return Vec::new();
    };
    let total = squat + bench + deadlift;

    [
        (Lift::Squat, squat, SQUAT_SHARE),
        (Lift::Bench, bench, BENCH_SHARE),
        (Lift::Deadlift, deadlift, DEADLIFT_SHARE),
    ]
    .into_iter()
    .filter_map(|(lift, value, expected)| {
        let share = value / total;
        let shortfall = expected - share;
        if shortfall <= floor {
            return None;
        }
        Some(Imbalance {
            kind: ImbalanceKind::Proportion,
            metric: format!("{}_share", lift.name().to_lowercase().replace(' ', "_")),
            weak_lift: lift,
            severity: ImbalanceSeverity::from_relative_deviation(shortfall / expected),
            actual: share,
            expected,
            message: format!(
                "{} is {:.1}% of your squat/bench/deadlift total, expected about {:.0}%",
                lift.name(),
                share * 100.0,
                expected * 100.0
            ),
            suggestion: lift.suggestion().to_owned(),
        })
    })
    .collect()
}

/// Score of one ratio: 100 at ideal, 50 at the band edge, falling to 0 one band-width outside
fn ratio_score(range: &RatioRange, value: f64) -> f64 {
    if (range.min..=range.max).contains(&value) {
        let edge = if value >= range.ideal {
            range.max
        } else {
            range.min
        };
        let reach = (edge - range.ideal).abs();
        if reach <= 0.0 {
            return 100.0;
        }
        return (100.0 - BAND_EDGE_SCORE).mul_add(-((value - range.ideal).abs() / reach), 100.0);
    }
    let outside = if value < range.min {
        range.min - value
    } else {
        value - range.max
    };
    let width = range.max - range.min;
    (BAND_EDGE_SCORE * (1.0 - outside / width)).max(0.0)
}

fn range_score(lifts: &BigFourLifts) -> f64 {
    let scores: Vec<f64> = TRACKED_RATIOS
        .iter()
        .filter_map(|range| {
            let value = lifts.ratio(range.numerator, range.denominator);
            (value > 0.0).then(|| ratio_score(range, value))
        })
        .collect();

    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

fn variance_score(lifts: &BigFourLifts, profile: &UserProfile) -> (f64, Vec<LiftScore>) {
    let bodyweight_kg = profile.bodyweight_kg();
    let age_factor = age_adjustment(profile.age);

    let lift_scores: Vec<LiftScore> = [Lift::Squat, Lift::Bench, Lift::Deadlift, Lift::OverheadPress]
        .into_iter()
        .filter_map(|lift| {
            let estimate = lifts.get(lift)?;
            let total_kg = profile.units.to_kilograms(estimate / lift.percent_of_total());
            let score = wilks_coefficient(total_kg, bodyweight_kg, profile.sex) * age_factor;
            Some(LiftScore { lift, score })
        })
        .collect();

    if lift_scores.len() < 2 {
        return (0.0, lift_scores);
    }

    let count = lift_scores.len() as f64;
    let mean = lift_scores.iter().map(|s| s.score).sum::<f64>() / count;
    let variance = lift_scores
        .iter()
        .map(|s| (s.score - mean).powi(2))
        .sum::<f64>()
        / count;

    ((100.0 - variance).clamp(0.0, 100.0), lift_scores)
}
