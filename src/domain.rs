//! Domain types for 5/3/1 programming.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PlanError, ScheduleError};

/// Main lifts programmed by 5/3/1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Movement {
    Squat,
    Bench,
    Deadlift,
    OverheadPress,
}

impl Movement {
    /// Returns all movement variants.
    pub fn all() -> &'static [Movement] {
        &[
            Movement::Squat,
            Movement::Bench,
            Movement::Deadlift,
            Movement::OverheadPress,
        ]
    }

    /// Returns the identifier used in maps and files.
    pub fn id(&self) -> &'static str {
        match self {
            Movement::Squat => "squat",
            Movement::Bench => "bench",
            Movement::Deadlift => "deadlift",
            Movement::OverheadPress => "overhead_press",
        }
    }

    /// Returns the display name for the movement.
    pub fn display_name(&self) -> &'static str {
        match self {
            Movement::Squat => "Squat",
            Movement::Bench => "Bench",
            Movement::Deadlift => "Deadlift",
            Movement::OverheadPress => "Overhead Press",
        }
    }
}

impl FromStr for Movement {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "squat" => Ok(Movement::Squat),
            "bench" => Ok(Movement::Bench),
            "deadlift" => Ok(Movement::Deadlift),
            "overhead_press" | "overhead press" | "ohp" => Ok(Movement::OverheadPress),
            _ => Err(PlanError::UnknownMovement(s.to_string())),
        }
    }
}

impl std::fmt::Display for Movement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Unit the lifter records weights in. Purely a label, nothing is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Lbs,
    Kg,
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lbs => write!(f, "lbs"),
            Self::Kg => write!(f, "kg"),
        }
    }
}

/// Weight per movement.
pub type WeightMap = BTreeMap<Movement, f64>;

/// One-rep maxes keyed by movement.
pub type OneRepMaxMap = WeightMap;

/// Training maxes keyed by movement.
pub type TrainingMaxMap = WeightMap;

// === Sets ===

/// Prescribed repetitions: a fixed count or an AMRAP target ("5+").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reps {
    Fixed(u32),
    Amrap(u32),
}

impl Reps {
    /// Minimum repetitions to perform.
    pub fn target(&self) -> u32 {
        match self {
            Reps::Fixed(n) | Reps::Amrap(n) => *n,
        }
    }

    pub fn is_amrap(&self) -> bool {
        matches!(self, Reps::Amrap(_))
    }
}

impl std::fmt::Display for Reps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reps::Fixed(n) => write!(f, "{}", n),
            Reps::Amrap(n) => write!(f, "{}+", n),
        }
    }
}

impl FromStr for Reps {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || PlanError::InvalidReps(s.to_string());

        match trimmed.strip_suffix('+') {
            Some(count) => count.parse().map(Reps::Amrap).map_err(|_| invalid()),
            None => trimmed.parse().map(Reps::Fixed).map_err(|_| invalid()),
        }
    }
}

impl Serialize for Reps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Reps::Fixed(n) => serializer.serialize_u32(*n),
            Reps::Amrap(_) => serializer.collect_str(self),
        }
    }
}

impl<'de> Deserialize<'de> for Reps {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawReps {
            Count(u32),
            Text(String),
        }

        match RawReps::deserialize(deserializer)? {
            RawReps::Count(n) => Ok(Reps::Fixed(n)),
            RawReps::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetType {
    Warmup,
    Working,
}

/// One prescribed set, plus what was actually done once it is logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetSpec {
    pub percentage: u32,
    pub reps: Reps,
    pub weight: f64,
    #[serde(rename = "type")]
    pub set_type: SetType,
    pub completed_reps: Option<u32>,
    #[serde(default)]
    pub actual_weight: Option<f64>,
    pub notes: Option<String>,
}

// === Workouts ===

/// Lifecycle of a single workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkoutStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Dnf,
    Skipped,
}

impl std::fmt::Display for WorkoutStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not-started"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Completed => write!(f, "completed"),
            Self::Dnf => write!(f, "dnf"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

impl FromStr for WorkoutStatus {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not-started" => Ok(Self::NotStarted),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "dnf" => Ok(Self::Dnf),
            "skipped" => Ok(Self::Skipped),
            _ => Err(PlanError::UnknownStatus(s.to_string())),
        }
    }
}

/// A single training day within a cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub week: u8,
    pub day: u8,
    pub movements: Vec<Movement>,
    pub sets: BTreeMap<Movement, Vec<SetSpec>>,
    #[serde(default)]
    pub status: WorkoutStatus,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

// === Schedule ===

/// Which movements are trained on day 1 and day 2 of every week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementSchedule {
    pub day1_movements: Vec<Movement>,
    pub day2_movements: Vec<Movement>,
}

impl MovementSchedule {
    pub fn new(day1_movements: Vec<Movement>, day2_movements: Vec<Movement>) -> Self {
        Self {
            day1_movements,
            day2_movements,
        }
    }

    /// Movements for a training day. Anything other than day 1 is day 2.
    pub fn movements_for_day(&self, day: u8) -> &[Movement] {
        if day == 1 {
            &self.day1_movements
        } else {
            &self.day2_movements
        }
    }

    /// Checks that the two days partition the four lifts, two per day,
    /// with squat and deadlift on different days.
    ///
    /// The planner itself never calls this; it is for callers that accept
    /// schedules from users.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        for (day, movements) in [(1, &self.day1_movements), (2, &self.day2_movements)] {
            if movements.len() != 2 {
                return Err(ScheduleError::WrongMovementCount {
                    day,
                    count: movements.len(),
                });
            }
            if movements.contains(&Movement::Squat) && movements.contains(&Movement::Deadlift) {
                return Err(ScheduleError::SquatDeadliftSameDay);
            }
        }

        let scheduled: Vec<Movement> = self
            .day1_movements
            .iter()
            .chain(&self.day2_movements)
            .copied()
            .collect();

        // Two per day and no repeats means all four lifts are covered.
        for (idx, movement) in scheduled.iter().enumerate() {
            if scheduled[..idx].contains(movement) {
                return Err(ScheduleError::DuplicateMovement(*movement));
            }
        }

        Ok(())
    }
}
