//! Static 5/3/1 tables: weekly percentages, warmups and cycle increments.

use crate::domain::{Movement, Reps};
use crate::error::PlanError;

/// Number of training weeks in a cycle, the last being the deload.
pub const WEEKS_PER_CYCLE: u8 = 4;

/// Training days per week.
pub const DAYS_PER_WEEK: u8 = 2;

/// Week whose template is the deload.
pub const DELOAD_WEEK: u8 = 4;

/// Weight of the empty bar used for the first warmup set.
pub const EMPTY_BAR_WEIGHT: f64 = 45.0;

/// One row of a week template or warmup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSet {
    pub percentage: u32,
    pub reps: Reps,
}

const fn fixed(percentage: u32, reps: u32) -> TemplateSet {
    TemplateSet {
        percentage,
        reps: Reps::Fixed(reps),
    }
}

const fn amrap(percentage: u32, reps: u32) -> TemplateSet {
    TemplateSet {
        percentage,
        reps: Reps::Amrap(reps),
    }
}

/// Working sets for one week.
pub type WeekTemplate = [TemplateSet; 3];

/// Working sets for weeks 1 to 4, indexed by `week - 1`.
pub static WEEK_TEMPLATES: [WeekTemplate; WEEKS_PER_CYCLE as usize] = [
    // 5+ week
    [fixed(65, 5), fixed(75, 5), amrap(85, 5)],
    // 3+ week
    [fixed(70, 3), fixed(80, 3), amrap(90, 3)],
    // 5/3/1+ week
    [fixed(75, 5), fixed(85, 3), amrap(95, 1)],
    // deload
    [fixed(40, 5), fixed(50, 5), fixed(60, 5)],
];

/// A warmup row. A percentage of 0 means the empty bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarmupSet {
    pub set: TemplateSet,
    pub notes: &'static str,
}

/// Warmups performed before the working sets of every movement.
pub const WARMUP_SETS: [WarmupSet; 3] = [
    WarmupSet {
        set: fixed(0, 5),
        notes: "Empty bar",
    },
    WarmupSet {
        set: fixed(40, 5),
        notes: "40% TM",
    },
    WarmupSet {
        set: fixed(60, 3),
        notes: "60% TM",
    },
];

/// Training max increase applied between cycles. Lower body moves faster.
pub const CYCLE_INCREMENTS: [(Movement, f64); 4] = [
    (Movement::Squat, 10.0),
    (Movement::Bench, 5.0),
    (Movement::Deadlift, 10.0),
    (Movement::OverheadPress, 5.0),
];

/// Returns the working-set template for a week (1 to 4).
pub fn week_template(week: u8) -> Result<&'static WeekTemplate, PlanError> {
    week.checked_sub(1)
        .and_then(|idx| WEEK_TEMPLATES.get(idx as usize))
        .ok_or(PlanError::UnknownWeek(week))
}

/// Returns the per-cycle training max increase for a movement.
pub fn cycle_increment(movement: Movement) -> f64 {
    CYCLE_INCREMENTS
        .iter()
        .find(|(m, _)| *m == movement)
        .map(|(_, inc)| *inc)
        .unwrap_or_default()
}
