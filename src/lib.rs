//! Wendler 5/3/1 cycle planning.
//!
//! Derives training maxes from one-rep maxes, prescribes warmup and working
//! sets for a four-week cycle on a two-day split, progresses training maxes
//! between cycles and summarizes completion. Everything here is a pure
//! function over plain values; file loading lives in [`input`] and is only
//! used by the command-line front end.

pub mod calendar;
pub mod catalog;
pub mod cycle;
pub mod domain;
pub mod error;
pub mod formulas;
pub mod input;
pub mod progression;
pub mod report;
pub mod sets;
pub mod summary;
mod tracking;

pub use calendar::{WeekDates, week_dates};
pub use cycle::{Cycle, generate_cycle_workouts};
pub use domain::{
    Movement, MovementSchedule, OneRepMaxMap, Reps, SetSpec, SetType, TrainingMaxMap,
    WeightUnit, Workout, WorkoutStatus,
};
pub use error::{InputError, PlanError, ScheduleError};
pub use formulas::{
    DEFAULT_TRAINING_MAX_FACTOR, generate_training_maxes, generate_training_maxes_with_factor,
    round_to_five, training_max, working_weight,
};
pub use progression::progress_training_maxes;
pub use sets::generate_movement_sets;
pub use summary::{CycleSummary, cycle_summary};
