// ABOUTME: Personal record detection for a workout against the lifter's historical sets
// ABOUTME: Volume and estimated-1RM records per exercise with tie-inclusive flagging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Personal record detection.
//!
//! For each exercise in a workout, the workout's best volume and best estimated
//! one-rep max are compared (independently) against the best values from every
//! other workout. A workout best that strictly beats history, or any best for an
//! exercise never performed before, is a record; every non-warmup set that equals
//! that best is flagged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use strength_core::models::{LoggedSet, Workout};
use uuid::Uuid;

use crate::algorithms::one_rep_max::estimate_one_rep_max;

/// A workout set annotated with record flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedSet {
    /// The logged set
    pub set: LoggedSet,
    /// Weight x reps (0 for warmups)
    pub volume: f64,
    /// Estimated one-rep max (0 for warmups)
    pub estimated_1rm: f64,
    /// Set matches a new best volume
    pub is_volume_pr: bool,
    /// Set matches a new best estimated one-rep max
    pub is_1rm_pr: bool,
}

/// One record-setting set, as shown to the lifter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrEntry {
    /// Set identifier
    pub set_id: Uuid,
    /// Load
    pub weight: f64,
    /// Reps
    pub reps: u32,
    /// Date performed
    pub date: NaiveDate,
    /// Record value (volume or estimated one-rep max)
    pub value: f64,
}

/// Records set for one exercise
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecords {
    /// Sets that set a volume record
    pub volume_prs: Vec<PrEntry>,
    /// Sets that set an estimated one-rep-max record
    pub one_rm_prs: Vec<PrEntry>,
}

/// Detection output: annotated sets plus a per-exercise summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrDetection {
    /// Workout sets in set-number order
    pub sets: Vec<AnnotatedSet>,
    /// Records grouped by exercise name; exercises without records are omitted
    pub summary: BTreeMap<String, ExerciseRecords>,
}

impl PrDetection {
    /// Whether any set in the workout set a record
    #[must_use]
    pub fn has_records(&self) -> bool {
        self.sets.iter().any(|s| s.is_volume_pr || s.is_1rm_pr)
    }
}

/// Running maxima for one exercise
#[derive(Debug, Clone, Copy)]
struct Best {
    volume: f64,
    one_rep_max: f64,
}

impl Best {
    /// Starts below any attainable value so negative assistance volumes still order
    const SENTINEL: Self = Self {
        volume: f64::NEG_INFINITY,
        one_rep_max: f64::NEG_INFINITY,
    };

    fn absorb(&mut self, volume: f64, one_rep_max: f64) {
        self.volume = self.volume.max(volume);
        self.one_rep_max = self.one_rep_max.max(one_rep_max);
    }
}

/// Which metrics a workout set a record in, per exercise
#[derive(Debug, Clone, Copy)]
struct RecordOutcome {
    best: Best,
    volume_pr: bool,
    one_rm_pr: bool,
}

/// Detect personal records in `workout`
///
/// `history` is every set the user has logged for the workout's exercises; sets
/// belonging to the workout itself and warmup sets are ignored.
#[must_use]
pub fn detect(workout: &Workout, history: &[LoggedSet]) -> PrDetection {
    let ordered = workout.ordered_sets();

    let mut workout_best: HashMap<Uuid, Best> = HashMap::new();
    for set in ordered.iter().filter(|set| !set.is_warmup) {
        workout_best
            .entry(set.exercise_id)
            .or_insert(Best::SENTINEL)
            .absorb(set.volume(), estimate_one_rep_max(set.weight, set.reps));
    }

    let mut historical_best: HashMap<Uuid, Best> = HashMap::new();
    for set in history
        .iter()
        .filter(|set| !set.is_warmup && set.workout_id != workout.id)
        .filter(|set| workout_best.contains_key(&set.exercise_id))
    {
        historical_best
            .entry(set.exercise_id)
            .or_insert(Best::SENTINEL)
            .absorb(set.volume(), estimate_one_rep_max(set.weight, set.reps));
    }

    let outcomes: HashMap<Uuid, RecordOutcome> = workout_best
        .into_iter()
        .map(|(exercise_id, best)| {
            // An estimate of 0 means no lift was performed, never a record
            let lifted = best.one_rep_max > 0.0;
            let outcome = historical_best.get(&exercise_id).map_or(
                // Never performed before: the workout's best is a record
                RecordOutcome {
                    best,
                    volume_pr: true,
                    one_rm_pr: lifted,
                },
                |previous| RecordOutcome {
                    best,
                    volume_pr: best.volume > previous.volume,
                    one_rm_pr: lifted && best.one_rep_max > previous.one_rep_max,
                },
            );
            (exercise_id, outcome)
        })
        .collect();

    let sets: Vec<AnnotatedSet> = ordered
        .into_iter()
        .map(|set| annotate(set, outcomes.get(&set.exercise_id)))
        .collect();

    let mut summary: BTreeMap<String, ExerciseRecords> = BTreeMap::new();
    for annotated in sets.iter().filter(|s| s.is_volume_pr || s.is_1rm_pr) {
        let records = summary
            .entry(annotated.set.exercise_name.clone())
            .or_default();
        if annotated.is_volume_pr {
            records.volume_prs.push(entry(annotated, annotated.volume));
        }
        if annotated.is_1rm_pr {
            records
                .one_rm_prs
                .push(entry(annotated, annotated.estimated_1rm));
        }
    }

    PrDetection { sets, summary }
}

fn annotate(set: &LoggedSet, outcome: Option<&RecordOutcome>) -> AnnotatedSet {
    if set.is_warmup {
        return AnnotatedSet {
            set: set.clone(),
            volume: 0.0,
            estimated_1rm: 0.0,
            is_volume_pr: false,
            is_1rm_pr: false,
        };
    }

    let volume = set.volume();
    let estimated_1rm = estimate_one_rep_max(set.weight, set.reps);
    // Exact equality: ties at the best value are all flagged
    #[allow(clippy::float_cmp)]
    let (is_volume_pr, is_1rm_pr) = outcome.map_or((false, false), |outcome| {
        (
            outcome.volume_pr && volume == outcome.best.volume,
            outcome.one_rm_pr && estimated_1rm == outcome.best.one_rep_max,
        )
    });

    AnnotatedSet {
        set: set.clone(),
        volume,
        estimated_1rm,
        is_volume_pr,
        is_1rm_pr,
    }
}

fn entry(annotated: &AnnotatedSet, value: f64) -> PrEntry {
    PrEntry {
        set_id: annotated.set.id,
        weight: annotated.set.weight,
        reps: annotated.set.reps,
        date: annotated.set.performed_on,
        value,
    }
}
