//! Completion summary for a cycle's workouts.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{DELOAD_WEEK, WEEKS_PER_CYCLE};
use crate::domain::Workout;

/// Progress through a cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleSummary {
    pub total_workouts: usize,
    pub completed_workouts: usize,
    pub completion_percentage: f64,
    pub current_week: u8,
    pub is_deload_week: bool,
}

/// Summarizes completion across a list of workouts.
pub fn cycle_summary(workouts: &[Workout]) -> CycleSummary {
    let total_workouts = workouts.len();
    let completed_workouts = workouts.iter().filter(|w| w.completed).count();

    let completion_percentage = if total_workouts > 0 {
        completed_workouts as f64 / total_workouts as f64 * 100.0
    } else {
        0.0
    };

    let current_week = current_week(workouts);

    CycleSummary {
        total_workouts,
        completed_workouts,
        completion_percentage,
        current_week,
        is_deload_week: current_week == DELOAD_WEEK,
    }
}

/// Returns the first week (1 to 4) without any completed workout.
///
/// A single completed workout is enough to count its week as done. When every
/// week has one, the cycle stays on the last week.
pub fn current_week(workouts: &[Workout]) -> u8 {
    let completed_weeks: BTreeSet<u8> = workouts
        .iter()
        .filter(|w| w.completed)
        .map(|w| w.week)
        .collect();

    (1..=WEEKS_PER_CYCLE)
        .find(|week| !completed_weeks.contains(week))
        .unwrap_or(WEEKS_PER_CYCLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::domain::WorkoutStatus;

    fn workout(week: u8, day: u8, completed: bool) -> Workout {
        Workout {
            week,
            day,
            movements: Vec::new(),
            sets: BTreeMap::new(),
            status: if completed {
                WorkoutStatus::Completed
            } else {
                WorkoutStatus::NotStarted
            },
            completed,
            completed_at: None,
        }
    }

    #[test]
    fn test_cycle_summary_half_done() {
        let workouts = vec![
            workout(1, 1, true),
            workout(1, 2, true),
            workout(2, 1, false),
            workout(2, 2, false),
        ];

        let summary = cycle_summary(&workouts);

        assert_eq!(summary.total_workouts, 4);
        assert_eq!(summary.completed_workouts, 2);
        assert_eq!(summary.completion_percentage, 50.0);
        assert_eq!(summary.current_week, 2);
        assert!(!summary.is_deload_week);
    }

    #[test]
    fn test_cycle_summary_empty() {
        let summary = cycle_summary(&[]);

        assert_eq!(summary.total_workouts, 0);
        assert_eq!(summary.completed_workouts, 0);
        assert_eq!(summary.completion_percentage, 0.0);
        assert_eq!(summary.current_week, 1);
        assert!(!summary.is_deload_week);
    }

    #[test]
    fn test_current_week_all_completed() {
        let workouts: Vec<Workout> = (1..=4)
            .flat_map(|week| [workout(week, 1, true), workout(week, 2, true)])
            .collect();

        assert_eq!(current_week(&workouts), 4);
        assert!(cycle_summary(&workouts).is_deload_week);
        assert_eq!(cycle_summary(&workouts).completion_percentage, 100.0);
    }

    #[test]
    fn test_deload_week_detected() {
        let workouts = vec![
            workout(1, 1, true),
            workout(2, 1, true),
            workout(3, 1, true),
            workout(4, 1, false),
        ];

        assert!(cycle_summary(&workouts).is_deload_week);
    }

    #[test]
    fn test_one_completed_workout_closes_its_week() {
        let workouts = vec![workout(1, 1, false), workout(1, 2, true), workout(2, 1, false)];

        assert_eq!(current_week(&workouts), 2);
    }

    #[test]
    fn test_current_week_skips_only_completed_weeks() {
        // Week 2 done out of order, week 1 still open
        let workouts = vec![workout(1, 1, false), workout(2, 1, true)];

        assert_eq!(current_week(&workouts), 1);
    }
}
