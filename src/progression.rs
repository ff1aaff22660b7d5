//! Cycle-over-cycle training max progression.

use crate::catalog::cycle_increment;
use crate::domain::TrainingMaxMap;

/// Computes next cycle's training maxes.
///
/// Squat and deadlift go up by 10, bench and overhead press by 5. The input
/// map is left untouched so the previous cycle keeps its snapshot.
pub fn progress_training_maxes(current: &TrainingMaxMap) -> TrainingMaxMap {
    let next: TrainingMaxMap = current
        .iter()
        .map(|(movement, max)| (*movement, max + cycle_increment(*movement)))
        .collect();

    log::debug!("Progressed training maxes {:?} -> {:?}", current, next);
    next
}
