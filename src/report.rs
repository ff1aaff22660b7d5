//! Plain-text rendering of cycles for the terminal.

use std::fmt;

use crate::calendar::WeekDates;
use crate::catalog::DELOAD_WEEK;
use crate::cycle::Cycle;
use crate::domain::{SetSpec, SetType, WeightUnit, Workout};
use crate::summary::CycleSummary;

/// Full cycle printout: training maxes then every workout by week.
pub struct CycleReport<'a> {
    pub cycle: &'a Cycle,
    pub unit: WeightUnit,
}

/// Completion overview with week boundaries.
pub struct SummaryReport<'a> {
    pub cycle: &'a Cycle,
}

fn write_set(f: &mut fmt::Formatter<'_>, set: &SetSpec, unit: WeightUnit) -> fmt::Result {
    let kind = match set.set_type {
        SetType::Warmup => "warmup",
        SetType::Working => "working",
    };
    write!(
        f,
        "    {:8} {:>3}% {:>4} x {:>6.1} {}",
        kind, set.percentage, set.reps.to_string(), set.weight, unit
    )?;
    if let Some(notes) = &set.notes {
        write!(f, "  ({})", notes)?;
    }
    if let Some(done) = set.completed_reps {
        write!(f, "  done: {}", done)?;
        if let Some(actual) = set.actual_weight {
            write!(f, " @ {:.1}", actual)?;
        }
    }
    writeln!(f)
}

fn write_workout(f: &mut fmt::Formatter<'_>, workout: &Workout, unit: WeightUnit) -> fmt::Result {
    let names: Vec<&str> = workout.movements.iter().map(|m| m.display_name()).collect();
    writeln!(
        f,
        "Day {}: {} [{}]",
        workout.day,
        names.join(", "),
        workout.status
    )?;

    for movement in &workout.movements {
        writeln!(f, "  {}", movement)?;
        for set in workout.sets.get(movement).into_iter().flatten() {
            write_set(f, set, unit)?;
        }
    }
    Ok(())
}

fn write_week_header(f: &mut fmt::Formatter<'_>, week: u8, dates: Option<&WeekDates>) -> fmt::Result {
    let label = if week == DELOAD_WEEK { " (deload)" } else { "" };
    match dates {
        Some(d) => writeln!(f, "--- Week {}{}: {} - {} ---", week, label, d.start, d.end),
        None => writeln!(f, "--- Week {}{} ---", week, label),
    }
}

impl fmt::Display for CycleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cycle = self.cycle;
        writeln!(f, "=== Cycle {} ===", cycle.cycle_number)?;
        writeln!(f, "Start: {}", cycle.start_date.date())?;
        writeln!(f)?;
        writeln!(f, "Training maxes:")?;
        for (movement, max) in &cycle.training_maxes {
            writeln!(f, "  {:15} {:>7.1} {}", movement.display_name(), max, self.unit)?;
        }

        let week_dates = cycle.week_dates();
        let mut current_week = None;
        for workout in &cycle.workouts {
            if current_week != Some(workout.week) {
                current_week = Some(workout.week);
                writeln!(f)?;
                write_week_header(f, workout.week, week_dates.get(&workout.week))?;
            }
            write_workout(f, workout, self.unit)?;
        }
        Ok(())
    }
}

fn write_summary(f: &mut fmt::Formatter<'_>, summary: &CycleSummary) -> fmt::Result {
    writeln!(
        f,
        "Completed: {}/{} ({:.1}%)",
        summary.completed_workouts, summary.total_workouts, summary.completion_percentage
    )?;
    write!(f, "Current week: {}", summary.current_week)?;
    if summary.is_deload_week {
        write!(f, " (deload)")?;
    }
    writeln!(f)
}

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Cycle {} Summary ===", self.cycle.cycle_number)?;
        write_summary(f, &self.cycle.summary())?;
        writeln!(f)?;
        for (week, dates) in self.cycle.week_dates() {
            writeln!(f, "Week {}: {} - {}", week, dates.start, dates.end)?;
        }
        Ok(())
    }
}
