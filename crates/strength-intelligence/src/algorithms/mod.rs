// ABOUTME: Strength estimation algorithms
// ABOUTME: One-rep-max relations and the Wilks relative-strength coefficient

/// One-rep-max estimation (Brzycki, Epley, blended)
pub mod one_rep_max;

/// Wilks coefficient and age adjustment
pub mod wilks;

pub use one_rep_max::{best_estimate, estimate_one_rep_max, estimate_set, OneRepMaxFormula};
pub use wilks::{age_adjustment, wilks_coefficient, wilks_for_code};
