//! Loading lifter profiles and saved cycles from JSON files.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::cycle::Cycle;
use crate::domain::{Movement, MovementSchedule, OneRepMaxMap, WeightUnit};
use crate::error::InputError;

/// Everything needed to plan a lifter's first cycle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LifterProfile {
    #[serde(default)]
    pub unit: WeightUnit,
    pub one_rms: OneRepMaxMap,
    pub schedule: MovementSchedule,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

impl LifterProfile {
    /// Checks that all four lifts have a positive 1RM and the split is sound.
    pub fn validate(&self) -> Result<(), InputError> {
        for movement in Movement::all() {
            let weight = self
                .one_rms
                .get(movement)
                .ok_or(InputError::MissingOneRepMax(*movement))?;
            if *weight <= 0.0 {
                return Err(InputError::InvalidWeight {
                    movement: *movement,
                    value: *weight,
                });
            }
        }

        self.schedule.validate()?;
        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound(path.display().to_string()));
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| InputError::CannotRead(format!("{}: {}", path.display(), e)))?;

    serde_json::from_str(&contents)
        .map_err(|e| InputError::InvalidFormat(format!("{}: {}", path.display(), e)))
}

/// Loads and validates a lifter profile.
///
/// # Errors
/// Returns InputError if the file is missing, is not valid JSON, names an
/// unknown movement, or fails validation.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<LifterProfile, InputError> {
    let path = path.as_ref();
    let profile: LifterProfile = read_json(path)?;
    profile.validate()?;

    log::debug!(
        "Loaded profile from {} ({} one-rep maxes, unit {})",
        path.display(),
        profile.one_rms.len(),
        profile.unit
    );
    Ok(profile)
}

/// Loads a cycle previously written as JSON.
pub fn load_cycle<P: AsRef<Path>>(path: P) -> Result<Cycle, InputError> {
    let path = path.as_ref();
    let cycle: Cycle = read_json(path)?;

    log::debug!(
        "Loaded cycle {} with {} workouts from {}",
        cycle.cycle_number,
        cycle.workouts.len(),
        path.display()
    );
    Ok(cycle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    use crate::calendar::start_of_day;
    use crate::error::ScheduleError;

    const PROFILE_JSON: &str = r#"{
        "unit": "kg",
        "one_rms": {"squat": 200, "bench": 150, "deadlift": 250, "overhead_press": 100},
        "schedule": {
            "day1_movements": ["squat", "overhead_press"],
            "day2_movements": ["bench", "deadlift"]
        },
        "start_date": "2024-01-01"
    }"#;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_profile() {
        let file = write_temp(PROFILE_JSON);
        let profile = load_profile(file.path()).unwrap();

        assert_eq!(profile.unit, WeightUnit::Kg);
        assert_eq!(profile.one_rms[&Movement::OverheadPress], 100.0);
        assert_eq!(
            profile.schedule.day2_movements,
            vec![Movement::Bench, Movement::Deadlift]
        );
        assert_eq!(profile.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn test_load_profile_defaults() {
        let file = write_temp(
            r#"{
            "one_rms": {"squat": 200, "bench": 150, "deadlift": 250, "overhead_press": 100},
            "schedule": {
                "day1_movements": ["squat", "bench"],
                "day2_movements": ["deadlift", "overhead_press"]
            }
        }"#,
        );
        let profile = load_profile(file.path()).unwrap();

        assert_eq!(profile.unit, WeightUnit::Lbs);
        assert!(profile.start_date.is_none());
    }

    #[test]
    fn test_load_profile_missing_file() {
        let result = load_profile("/definitely/not/here.json");
        assert!(matches!(result, Err(InputError::FileNotFound(_))));
    }

    #[test]
    fn test_load_profile_unknown_movement() {
        let file = write_temp(&PROFILE_JSON.replace("\"bench\": 150", "\"snatch\": 150"));
        let result = load_profile(file.path());
        assert!(matches!(result, Err(InputError::InvalidFormat(_))));
    }

    #[test]
    fn test_load_profile_rejects_non_positive_weight() {
        let file = write_temp(&PROFILE_JSON.replace("\"bench\": 150", "\"bench\": -10"));
        let result = load_profile(file.path());
        assert!(matches!(
            result,
            Err(InputError::InvalidWeight {
                movement: Movement::Bench,
                ..
            })
        ));
    }

    #[test]
    fn test_load_profile_rejects_missing_lift() {
        let file = write_temp(&PROFILE_JSON.replace(", \"overhead_press\": 100", ""));
        let result = load_profile(file.path());
        assert!(matches!(
            result,
            Err(InputError::MissingOneRepMax(Movement::OverheadPress))
        ));
    }

    #[test]
    fn test_load_profile_rejects_bad_split() {
        let file = write_temp(&PROFILE_JSON.replace(
            r#"["bench", "deadlift"]"#,
            r#"["bench", "deadlift", "squat"]"#,
        ));
        let result = load_profile(file.path());
        assert!(matches!(
            result,
            Err(InputError::Schedule(ScheduleError::WrongMovementCount {
                day: 2,
                count: 3
            }))
        ));
    }

    #[test]
    fn test_load_cycle_round_trip() {
        let file = write_temp(PROFILE_JSON);
        let profile = load_profile(file.path()).unwrap();
        let start = start_of_day(profile.start_date.unwrap());
        let cycle = Cycle::first(&profile.one_rms, &profile.schedule, start).unwrap();

        let saved = write_temp(&serde_json::to_string_pretty(&cycle).unwrap());
        let loaded = load_cycle(saved.path()).unwrap();

        assert_eq!(loaded, cycle);
    }
}
