//! Logging progress against a generated workout.

use chrono::{DateTime, Utc};

use crate::domain::{Movement, Workout, WorkoutStatus};
use crate::error::PlanError;

impl Workout {
    /// Moves the workout to a new status.
    ///
    /// Completing stamps `completed_at`; dnf and skipped clear completion.
    /// Not-started and in-progress leave the completion fields alone.
    pub fn set_status(&mut self, status: WorkoutStatus, at: DateTime<Utc>) {
        self.status = status;
        match status {
            WorkoutStatus::Completed => {
                self.completed = true;
                self.completed_at = Some(at);
            }
            WorkoutStatus::Dnf | WorkoutStatus::Skipped => {
                self.completed = false;
                self.completed_at = None;
            }
            WorkoutStatus::NotStarted | WorkoutStatus::InProgress => {}
        }
    }

    pub fn complete(&mut self, at: DateTime<Utc>) {
        self.set_status(WorkoutStatus::Completed, at);
    }

    /// Records what was actually lifted for one set.
    ///
    /// # Arguments
    /// * `movement` - Movement the set belongs to
    /// * `index` - Position in the movement's set list (0 is the empty bar)
    /// * `completed_reps` - Repetitions performed
    /// * `actual_weight` - Weight used, when it differs from the prescription
    pub fn record_set(
        &mut self,
        movement: Movement,
        index: usize,
        completed_reps: u32,
        actual_weight: Option<f64>,
    ) -> Result<(), PlanError> {
        let sets = self
            .sets
            .get_mut(&movement)
            .ok_or(PlanError::MovementNotInWorkout(movement))?;
        let set = sets
            .get_mut(index)
            .ok_or(PlanError::SetOutOfRange { movement, index })?;

        set.completed_reps = Some(completed_reps);
        set.actual_weight = actual_weight;

        if self.status == WorkoutStatus::NotStarted {
            self.status = WorkoutStatus::InProgress;
        }
        Ok(())
    }
}
