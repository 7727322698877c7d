// Date utility functions

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Fractional hours since midnight, at minute precision.
pub fn hours_since_midnight(time: NaiveTime) -> f32 {
    time.hour() as f32 + time.minute() as f32 / 60.0
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc. Values above 6 wrap.
pub fn get_week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64).rem_euclid(7);
    date - Duration::days(offset)
}

/// The seven consecutive dates starting at `week_start`.
pub fn week_dates(week_start: NaiveDate) -> Vec<NaiveDate> {
    week_start.iter_days().take(7).collect()
}
