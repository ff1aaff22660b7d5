//! Four-week cycle generation.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::calendar::{WeekDates, week_dates};
use crate::catalog::{DAYS_PER_WEEK, WEEKS_PER_CYCLE, week_template};
use crate::domain::{MovementSchedule, OneRepMaxMap, TrainingMaxMap, Workout, WorkoutStatus};
use crate::error::PlanError;
use crate::formulas::generate_training_maxes;
use crate::progression::progress_training_maxes;
use crate::sets::generate_movement_sets;
use crate::summary::{CycleSummary, cycle_summary};

/// Generates the eight workouts of a cycle.
///
/// Workouts come out ordered by week then day: (1,1), (1,2), ..., (4,2).
///
/// # Errors
/// Returns `MissingTrainingMax` if the schedule names a movement with no
/// training max. Nothing is returned for the other workouts in that case.
pub fn generate_cycle_workouts(
    training_maxes: &TrainingMaxMap,
    schedule: &MovementSchedule,
) -> Result<Vec<Workout>, PlanError> {
    let mut workouts = Vec::with_capacity(usize::from(WEEKS_PER_CYCLE * DAYS_PER_WEEK));

    for week in 1..=WEEKS_PER_CYCLE {
        let template = week_template(week)?;

        for day in 1..=DAYS_PER_WEEK {
            let movements = schedule.movements_for_day(day);

            let mut sets = BTreeMap::new();
            for movement in movements {
                let training_max = training_maxes
                    .get(movement)
                    .ok_or(PlanError::MissingTrainingMax(*movement))?;
                sets.insert(*movement, generate_movement_sets(*training_max, template));
            }

            workouts.push(Workout {
                week,
                day,
                movements: movements.to_vec(),
                sets,
                status: WorkoutStatus::NotStarted,
                completed: false,
                completed_at: None,
            });
        }
    }

    Ok(workouts)
}

/// One block of training under a fixed set of training maxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    pub cycle_number: u32,
    pub start_date: NaiveDateTime,
    pub training_maxes: TrainingMaxMap,
    pub workouts: Vec<Workout>,
}

impl Cycle {
    /// Builds a cycle from training maxes, snapshotting them.
    pub fn generate(
        cycle_number: u32,
        training_maxes: TrainingMaxMap,
        schedule: &MovementSchedule,
        start_date: NaiveDateTime,
    ) -> Result<Self, PlanError> {
        let workouts = generate_cycle_workouts(&training_maxes, schedule)?;

        log::debug!(
            "Generated cycle {} with {} workouts starting {}",
            cycle_number,
            workouts.len(),
            start_date
        );

        Ok(Self {
            cycle_number,
            start_date,
            training_maxes,
            workouts,
        })
    }

    /// Builds cycle 1 from one-rep maxes at the default training max factor.
    pub fn first(
        one_rep_maxes: &OneRepMaxMap,
        schedule: &MovementSchedule,
        start_date: NaiveDateTime,
    ) -> Result<Self, PlanError> {
        Self::generate(1, generate_training_maxes(one_rep_maxes), schedule, start_date)
    }

    /// Builds the following cycle with progressed training maxes.
    ///
    /// `self` is not modified; its training maxes stay as they were.
    pub fn next(
        &self,
        schedule: &MovementSchedule,
        start_date: NaiveDateTime,
    ) -> Result<Self, PlanError> {
        Self::generate(
            self.cycle_number + 1,
            progress_training_maxes(&self.training_maxes),
            schedule,
            start_date,
        )
    }

    /// Day after the last day of the deload week.
    pub fn following_start_date(&self) -> NaiveDateTime {
        self.start_date + Duration::weeks(i64::from(WEEKS_PER_CYCLE))
    }

    pub fn week_dates(&self) -> BTreeMap<u8, WeekDates> {
        week_dates(self.start_date)
    }

    pub fn summary(&self) -> CycleSummary {
        cycle_summary(&self.workouts)
    }

    /// Finds the workout for a week and day.
    pub fn workout(&self, week: u8, day: u8) -> Result<&Workout, PlanError> {
        self.workouts
            .iter()
            .find(|w| w.week == week && w.day == day)
            .ok_or(PlanError::WorkoutNotFound { week, day })
    }

    pub fn workout_mut(&mut self, week: u8, day: u8) -> Result<&mut Workout, PlanError> {
        self.workouts
            .iter_mut()
            .find(|w| w.week == week && w.day == day)
            .ok_or(PlanError::WorkoutNotFound { week, day })
    }
}
