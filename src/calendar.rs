//! Calendar boundaries for the weeks of a cycle.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::catalog::WEEKS_PER_CYCLE;

/// Display format for week boundaries ("Jan 01").
const SHORT_DATE_FORMAT: &str = "%b %d";

/// First and last day of one training week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDates {
    pub start: String,
    pub end: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}

/// Midnight at the start of a date.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Computes week boundaries for a cycle starting at `cycle_start`.
///
/// Week n runs from `cycle_start + 7(n-1)` days to six days later, so each
/// week starts exactly one day after the previous one ends.
pub fn week_dates(cycle_start: NaiveDateTime) -> BTreeMap<u8, WeekDates> {
    (1..=WEEKS_PER_CYCLE)
        .map(|week| {
            let week_start = cycle_start + Duration::days(7 * i64::from(week - 1));
            let week_end = week_start + Duration::days(6);
            let dates = WeekDates {
                start: week_start.format(SHORT_DATE_FORMAT).to_string(),
                end: week_end.format(SHORT_DATE_FORMAT).to_string(),
                start_date: week_start,
                end_date: week_end,
            };
            (week, dates)
        })
        .collect()
}
