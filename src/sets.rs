//! Set prescriptions for one movement in one week.

use crate::catalog::{EMPTY_BAR_WEIGHT, TemplateSet, WARMUP_SETS, WeekTemplate};
use crate::domain::{SetSpec, SetType};
use crate::formulas::working_weight;

/// Sets per movement: three warmups then three working sets.
pub const SETS_PER_MOVEMENT: usize = WARMUP_SETS.len() + 3;

fn prescribed(template: &TemplateSet, weight: f64, set_type: SetType, notes: Option<&str>) -> SetSpec {
    SetSpec {
        percentage: template.percentage,
        reps: template.reps,
        weight,
        set_type,
        completed_reps: None,
        actual_weight: None,
        notes: notes.map(str::to_string),
    }
}

/// Generates the warmup sets for a training max.
///
/// The first warmup is always the empty bar, whatever the training max.
pub fn warmup_sets(training_max: f64) -> Vec<SetSpec> {
    WARMUP_SETS
        .iter()
        .map(|warmup| {
            let weight = if warmup.set.percentage == 0 {
                EMPTY_BAR_WEIGHT
            } else {
                working_weight(training_max, warmup.set.percentage)
            };
            prescribed(&warmup.set, weight, SetType::Warmup, Some(warmup.notes))
        })
        .collect()
}

/// Generates all six sets for one movement in one week.
///
/// # Arguments
/// * `training_max` - Training max for the movement
/// * `template` - Working-set template for the week
///
/// # Returns
/// Warmups followed by the template's working sets, none logged yet.
pub fn generate_movement_sets(training_max: f64, template: &WeekTemplate) -> Vec<SetSpec> {
    let mut sets = warmup_sets(training_max);
    sets.extend(template.iter().map(|set| {
        prescribed(
            set,
            working_weight(training_max, set.percentage),
            SetType::Working,
            None,
        )
    }));
    sets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::week_template;
    use crate::domain::Reps;

    #[test]
    fn test_movement_sets_layout() {
        let sets = generate_movement_sets(180.0, week_template(1).unwrap());

        assert_eq!(sets.len(), SETS_PER_MOVEMENT);
        assert!(sets[..3].iter().all(|s| s.set_type == SetType::Warmup));
        assert!(sets[3..].iter().all(|s| s.set_type == SetType::Working));
        assert!(sets.iter().all(|s| s.completed_reps.is_none()));
    }

    #[test]
    fn test_warmup_sets() {
        let sets = warmup_sets(180.0);

        assert_eq!(sets[0].percentage, 0);
        assert_eq!(sets[0].weight, 45.0);
        assert_eq!(sets[0].reps, Reps::Fixed(5));
        assert_eq!(sets[0].notes.as_deref(), Some("Empty bar"));

        assert_eq!(sets[1].percentage, 40);
        assert_eq!(sets[1].weight, 70.0); // 72 -> 70
        assert_eq!(sets[1].notes.as_deref(), Some("40% TM"));

        assert_eq!(sets[2].percentage, 60);
        assert_eq!(sets[2].reps, Reps::Fixed(3));
        assert_eq!(sets[2].weight, 110.0); // 108 -> 110
        assert_eq!(sets[2].notes.as_deref(), Some("60% TM"));
    }

    #[test]
    fn test_working_sets_follow_template() {
        let sets = generate_movement_sets(180.0, week_template(1).unwrap());

        let working: Vec<(u32, Reps, f64)> = sets[3..]
            .iter()
            .map(|s| (s.percentage, s.reps, s.weight))
            .collect();
        assert_eq!(
            working,
            vec![
                (65, Reps::Fixed(5), 115.0),
                (75, Reps::Fixed(5), 135.0),
                (85, Reps::Amrap(5), 155.0),
            ]
        );
        assert!(sets[3..].iter().all(|s| s.notes.is_none()));
    }

    #[test]
    fn test_zero_training_max() {
        let sets = generate_movement_sets(0.0, week_template(3).unwrap());

        assert_eq!(sets[0].weight, 45.0);
        assert!(sets[1..].iter().all(|s| s.weight == 0.0));
    }

    #[test]
    fn test_negative_training_max_keeps_empty_bar() {
        let sets = generate_movement_sets(-100.0, week_template(2).unwrap());

        assert_eq!(sets[0].weight, 45.0);
        assert!(sets[1..].iter().all(|s| s.weight <= 0.0));
    }
}
