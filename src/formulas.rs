//! Training max and working weight formulas.

use crate::domain::{OneRepMaxMap, TrainingMaxMap};

/// Fraction of the 1RM used as the training max.
pub const DEFAULT_TRAINING_MAX_FACTOR: f64 = 0.9;

/// Plate increment that prescribed weights are rounded to.
pub const ROUNDING_INCREMENT: f64 = 5.0;

/// Calculates a training max as a fraction of the one-rep max.
///
/// The result is kept precise; rounding only happens on prescribed weights.
pub fn training_max(one_rep_max: f64, factor: f64) -> f64 {
    one_rep_max * factor
}

/// Converts every 1RM into a training max at 90%.
pub fn generate_training_maxes(one_rep_maxes: &OneRepMaxMap) -> TrainingMaxMap {
    generate_training_maxes_with_factor(one_rep_maxes, DEFAULT_TRAINING_MAX_FACTOR)
}

/// Converts every 1RM into a training max using a custom factor.
pub fn generate_training_maxes_with_factor(
    one_rep_maxes: &OneRepMaxMap,
    factor: f64,
) -> TrainingMaxMap {
    one_rep_maxes
        .iter()
        .map(|(movement, weight)| (*movement, training_max(*weight, factor)))
        .collect()
}

/// Rounds a weight to the nearest multiple of 5.
///
/// The quotient `weight / 5` is rounded half-to-even, so 6.5 becomes 5
/// (6.5 / 5 = 1.3) and an exact tie such as 162.5 (quotient 32.5) goes to 160.
pub fn round_to_five(weight: f64) -> f64 {
    (weight / ROUNDING_INCREMENT).round_ties_even() * ROUNDING_INCREMENT
}

/// Calculates the prescribed weight for a percentage of the training max.
///
/// # Arguments
/// * `training_max` - Training max for the movement
/// * `percentage` - Whole-number percentage (65 for 65%)
///
/// # Returns
/// Weight rounded to the nearest 5
pub fn working_weight(training_max: f64, percentage: u32) -> f64 {
    round_to_five(training_max * (f64::from(percentage) / 100.0))
}
