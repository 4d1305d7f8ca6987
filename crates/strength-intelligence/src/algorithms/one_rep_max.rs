// ABOUTME: One-rep-max estimation from submaximal sets
// ABOUTME: Brzycki below 8 reps, Epley above 10, linear blend across 8-10 reps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use strength_core::models::{LiftEstimate, LoggedSet};

/// Rep count at and above which Brzycki's denominator is non-positive
const BRZYCKI_DIVERGENCE_REPS: u32 = 37;

/// First rep count of the Brzycki to Epley blend
const BLEND_START_REPS: u32 = 8;

/// Last rep count of the Brzycki to Epley blend
const BLEND_END_REPS: u32 = 10;

/// Relation used to turn a set into a one-rep-max estimate
///
/// Selection is driven purely by rep count:
///
/// - `Exact`: a single rep is the one-rep max
/// - `Brzycki`: 2-7 reps, `1RM = w x 36 / (37 - r)`
/// - `Blended`: 8-10 reps, Brzycki weighted down and Epley weighted up linearly
/// - `Epley`: 11+ reps, `1RM = w x (1 + r / 30)`
///
/// # Scientific References
///
/// - Brzycki, M. (1993). "Strength testing: predicting a one-rep max from reps-to-fatigue."
///   *Journal of Physical Education, Recreation & Dance*, 64(1), 88-90.
/// - Epley, B. (1985). "Poundage Chart." *Boyd Epley Workout*. Body Enterprises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OneRepMaxFormula {
    /// Single rep, no estimation
    Exact,
    /// Brzycki relation
    Brzycki,
    /// Linear blend of Brzycki and Epley
    Blended,
    /// Epley relation
    Epley,
}

impl OneRepMaxFormula {
    /// Pick the relation for a rep count (reps of zero map to `Exact`)
    #[must_use]
    pub const fn for_reps(reps: u32) -> Self {
        match reps {
            0 | 1 => Self::Exact,
            r if r < BLEND_START_REPS => Self::Brzycki,
            r if r <= BLEND_END_REPS => Self::Blended,
            _ => Self::Epley,
        }
    }

    /// Get formula name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Brzycki => "brzycki",
            Self::Blended => "brzycki_epley_blend",
            Self::Epley => "epley",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(self) -> &'static str {
        match self {
            Self::Exact => "1RM = weight",
            Self::Brzycki => "1RM = weight x 36 / (37 - reps)",
            Self::Blended => {
                "1RM = Brzycki x (1 - f) + Epley x f, f = (reps - 8) / 2"
            }
            Self::Epley => "1RM = weight x (1 + reps / 30)",
        }
    }

    /// Apply this relation to a positive load and rep count
    #[must_use]
    pub fn apply(self, weight: f64, reps: u32) -> f64 {
        match self {
            Self::Exact => weight,
            Self::Brzycki => brzycki(weight, reps),
            Self::Blended => {
                let factor = f64::from(reps - BLEND_START_REPS)
                    / f64::from(BLEND_END_REPS - BLEND_START_REPS);
                brzycki(weight, reps).mul_add(1.0 - factor, epley(weight, reps) * factor)
            }
            Self::Epley => epley(weight, reps),
        }
    }
}

fn brzycki(weight: f64, reps: u32) -> f64 {
    if reps >= BRZYCKI_DIVERGENCE_REPS {
        return weight * 2.0;
    }
    weight * 36.0 / (37.0 - f64::from(reps))
}

fn epley(weight: f64, reps: u32) -> f64 {
    weight * (1.0 + f64::from(reps) / 30.0)
}

/// Estimate a one-rep max from a set's load and completed reps
///
/// Non-positive loads or zero reps mean no lift was performed and yield 0.
/// Total and deterministic over its domain.
///
/// ```rust
/// use strength_intelligence::algorithms::one_rep_max::estimate_one_rep_max;
///
/// assert!((estimate_one_rep_max(225.0, 5) - 253.125).abs() < 1e-9);
/// assert!((estimate_one_rep_max(135.0, 12) - 189.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
    if weight <= 0.0 || reps == 0 || !weight.is_finite() {
        return 0.0;
    }
    OneRepMaxFormula::for_reps(reps).apply(weight, reps)
}

/// Build the derived estimate for one logged set
#[must_use]
pub fn estimate_set(set: &LoggedSet) -> LiftEstimate {
    LiftEstimate {
        exercise: set.exercise_name.clone(),
        weight: set.weight,
        reps: set.reps,
        estimated_1rm: estimate_one_rep_max(set.weight, set.reps),
    }
}

/// Best estimate among non-warmup sets; the earliest set wins ties
#[must_use]
pub fn best_estimate<'a, I>(sets: I) -> Option<LiftEstimate>
where
    I: IntoIterator<Item = &'a LoggedSet>,
{
    sets.into_iter()
        .filter(|set| !set.is_warmup)
        .map(estimate_set)
        .fold(None, |best: Option<LiftEstimate>, candidate| match best {
            Some(current) if current.estimated_1rm >= candidate.estimated_1rm => Some(current),
            _ => Some(candidate),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_selection_boundaries() {
        assert_eq!(OneRepMaxFormula::for_reps(1), OneRepMaxFormula::Exact);
        assert_eq!(OneRepMaxFormula::for_reps(7), OneRepMaxFormula::Brzycki);
        assert_eq!(OneRepMaxFormula::for_reps(8), OneRepMaxFormula::Blended);
        assert_eq!(OneRepMaxFormula::for_reps(10), OneRepMaxFormula::Blended);
        assert_eq!(OneRepMaxFormula::for_reps(11), OneRepMaxFormula::Epley);
    }

    #[test]
    fn test_brzycki_fallback_past_divergence() {
        assert!((brzycki(100.0, 37) - 200.0).abs() < f64::EPSILON);
        assert!((brzycki(100.0, 40) - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_blend_endpoints_match_pure_relations() {
        let at_eight = OneRepMaxFormula::Blended.apply(200.0, 8);
        let at_ten = OneRepMaxFormula::Blended.apply(200.0, 10);
        assert!((at_eight - brzycki(200.0, 8)).abs() < 1e-9);
        assert!((at_ten - epley(200.0, 10)).abs() < 1e-9);
    }
}
