use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use wendler::calendar::start_of_day;
use wendler::input::{load_cycle, load_profile};
use wendler::report::{CycleReport, SummaryReport};
use wendler::{
    Cycle, CycleSummary, DEFAULT_TRAINING_MAX_FACTOR, Movement, WeekDates, WeightUnit,
    WorkoutStatus, generate_training_maxes_with_factor,
};

/// Wendler 5/3/1 cycle planner.
#[derive(Parser, Debug)]
#[command(name = "wendler")]
#[command(about = "Plan, progress and track Wendler 5/3/1 training cycles")]
#[command(version)]
struct Args {
    /// Output format.
    /// Can also be set via WENDLER_FORMAT environment variable.
    #[arg(long, value_enum, env = "WENDLER_FORMAT", default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan the first cycle from a lifter profile.
    Plan {
        /// JSON profile with one-rep maxes and the two-day split.
        /// Can also be set via WENDLER_PROFILE environment variable.
        #[arg(value_name = "PROFILE", env = "WENDLER_PROFILE")]
        profile: PathBuf,

        /// First day of the cycle (defaults to the profile's date, then today).
        #[arg(long, value_name = "YYYY-MM-DD")]
        start: Option<NaiveDate>,

        /// Fraction of the one-rep max used as training max.
        #[arg(long, env = "WENDLER_TM_FACTOR", default_value_t = DEFAULT_TRAINING_MAX_FACTOR)]
        tm_factor: f64,
    },

    /// Plan the next cycle with progressed training maxes.
    Next {
        #[arg(value_name = "PROFILE", env = "WENDLER_PROFILE")]
        profile: PathBuf,

        /// Cycle JSON written by `plan` or a previous `next`.
        #[arg(long, value_name = "FILE")]
        cycle: PathBuf,

        /// First day of the new cycle (defaults to the day after the deload week).
        #[arg(long, value_name = "YYYY-MM-DD")]
        start: Option<NaiveDate>,
    },

    /// Show completion and the current week of a cycle.
    Summary {
        #[arg(value_name = "CYCLE")]
        cycle: PathBuf,
    },

    /// Change the status of a workout.
    Mark {
        #[arg(value_name = "CYCLE")]
        cycle: PathBuf,

        #[arg(long)]
        week: u8,

        #[arg(long)]
        day: u8,

        /// not-started, in-progress, completed, dnf or skipped.
        #[arg(long)]
        status: WorkoutStatus,

        /// Write the updated cycle back to the file instead of stdout.
        #[arg(long)]
        in_place: bool,
    },

    /// Record the reps (and optionally weight) done for one set.
    Log {
        #[arg(value_name = "CYCLE")]
        cycle: PathBuf,

        #[arg(long)]
        week: u8,

        #[arg(long)]
        day: u8,

        #[arg(long)]
        movement: Movement,

        /// Set position, 0 being the empty-bar warmup.
        #[arg(long = "set")]
        set_index: usize,

        #[arg(long)]
        reps: u32,

        #[arg(long)]
        weight: Option<f64>,

        #[arg(long)]
        in_place: bool,
    },
}

/// JSON shape printed by `summary`.
#[derive(Serialize)]
struct SummaryOutput<'a> {
    cycle_number: u32,
    #[serde(flatten)]
    summary: CycleSummary,
    week_dates: &'a std::collections::BTreeMap<u8, WeekDates>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Plan {
            profile,
            start,
            tm_factor,
        } => {
            log::info!("Loading lifter profile from: {}", profile.display());
            let profile = load_profile(&profile)
                .with_context(|| format!("Failed to load profile {}", profile.display()))?;

            let start = start
                .or(profile.start_date)
                .unwrap_or_else(|| Local::now().date_naive());
            let training_maxes = generate_training_maxes_with_factor(&profile.one_rms, tm_factor);
            let cycle = Cycle::generate(
                1,
                training_maxes,
                &profile.schedule,
                start_of_day(start),
            )
            .context("Failed to generate cycle")?;

            print_cycle(&cycle, profile.unit, args.format)
        }
        Command::Next {
            profile,
            cycle,
            start,
        } => {
            let profile = load_profile(&profile)
                .with_context(|| format!("Failed to load profile {}", profile.display()))?;
            let previous = load_cycle(&cycle)
                .with_context(|| format!("Failed to load cycle {}", cycle.display()))?;

            let summary = previous.summary();
            if summary.completed_workouts < summary.total_workouts {
                log::warn!(
                    "Cycle {} is only {:.0}% complete",
                    previous.cycle_number,
                    summary.completion_percentage
                );
            }

            let start = start
                .map(start_of_day)
                .unwrap_or_else(|| previous.following_start_date());
            let next = previous
                .next(&profile.schedule, start)
                .context("Failed to generate next cycle")?;

            print_cycle(&next, profile.unit, args.format)
        }
        Command::Summary { cycle } => {
            let cycle = load_cycle(&cycle)
                .with_context(|| format!("Failed to load cycle {}", cycle.display()))?;

            match args.format {
                OutputFormat::Text => print!("{}", SummaryReport { cycle: &cycle }),
                OutputFormat::Json => {
                    let week_dates = cycle.week_dates();
                    let output = SummaryOutput {
                        cycle_number: cycle.cycle_number,
                        summary: cycle.summary(),
                        week_dates: &week_dates,
                    };
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
            }
            Ok(())
        }
        Command::Mark {
            cycle: path,
            week,
            day,
            status,
            in_place,
        } => {
            let mut cycle = load_cycle(&path)
                .with_context(|| format!("Failed to load cycle {}", path.display()))?;
            cycle
                .workout_mut(week, day)?
                .set_status(status, Utc::now());

            log::info!("Week {} day {} marked {}", week, day, status);
            save_cycle(&cycle, &path, in_place)
        }
        Command::Log {
            cycle: path,
            week,
            day,
            movement,
            set_index,
            reps,
            weight,
            in_place,
        } => {
            let mut cycle = load_cycle(&path)
                .with_context(|| format!("Failed to load cycle {}", path.display()))?;
            cycle
                .workout_mut(week, day)?
                .record_set(movement, set_index, reps, weight)?;

            log::info!(
                "Logged {} reps on {} set {} (week {} day {})",
                reps,
                movement,
                set_index,
                week,
                day
            );
            save_cycle(&cycle, &path, in_place)
        }
    }
}

fn print_cycle(cycle: &Cycle, unit: WeightUnit, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", CycleReport { cycle, unit }),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(cycle)?),
    }
    Ok(())
}

/// Writes the cycle back to `path`, or to stdout unless `in_place` is set.
fn save_cycle(cycle: &Cycle, path: &Path, in_place: bool) -> Result<()> {
    let json = serde_json::to_string_pretty(cycle)?;
    if in_place {
        fs::write(path, json)
            .with_context(|| format!("Failed to write cycle to {}", path.display()))?;
    } else {
        println!("{}", json);
    }
    Ok(())
}
