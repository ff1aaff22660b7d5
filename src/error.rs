//! Error types for the wendler planner.

use thiserror::Error;

use crate::domain::Movement;

/// Errors raised by the planning engine.
///
/// All of these are lookup failures: the engine never validates weights,
/// it only fails when something it needs to look up is not there.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("no training max for {0}")]
    MissingTrainingMax(Movement),

    #[error("unknown movement: {0}")]
    UnknownMovement(String),

    #[error("no template for week {0}")]
    UnknownWeek(u8),

    #[error("invalid repetitions value: {0}")]
    InvalidReps(String),

    #[error("unknown workout status: {0}")]
    UnknownStatus(String),

    #[error("no workout for week {week} day {day}")]
    WorkoutNotFound { week: u8, day: u8 },

    #[error("{0} is not part of this workout")]
    MovementNotInWorkout(Movement),

    #[error("set {index} out of range for {movement}")]
    SetOutOfRange { movement: Movement, index: usize },
}

/// Errors found when checking a movement split.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("day {day} must have exactly 2 movements, got {count}")]
    WrongMovementCount { day: u8, count: usize },

    #[error("{0} is scheduled more than once")]
    DuplicateMovement(Movement),

    #[error("squat and deadlift should be split between different days")]
    SquatDeadliftSameDay,
}

/// Errors that can occur when loading lifter profiles and cycle files.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("cannot read file: {0}")]
    CannotRead(String),

    #[error("invalid JSON format: {0}")]
    InvalidFormat(String),

    #[error("one-rep max for {movement} must be positive: {value}")]
    InvalidWeight { movement: Movement, value: f64 },

    #[error("missing one-rep max for {0}")]
    MissingOneRepMax(Movement),

    #[error("invalid schedule: {0}")]
    Schedule(#[from] ScheduleError),
}
