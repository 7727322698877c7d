//! Current-time indicator placement.
//!
//! The renderer owns the refresh timer and calls back in here on every
//! tick; nothing in this module keeps state between calls.

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::utils::date::hours_since_midnight;

/// Source of the current local wall-clock time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The machine's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at one instant, for previews and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Offset of `now` on the time axis, using the same mapping as event tops.
pub fn compute_now_offset(now: NaiveDateTime, pixels_per_hour: f32) -> f32 {
    hours_since_midnight(now.time()) * pixels_per_hour
}

pub fn should_show_now_indicator(viewed_date: NaiveDate, now: NaiveDateTime) -> bool {
    viewed_date == now.date()
}

/// Offset of the "now" line for `viewed_date`, or `None` if it is not today.
pub fn now_offset_for<C: Clock + ?Sized>(
    clock: &C,
    viewed_date: NaiveDate,
    pixels_per_hour: f32,
) -> Option<f32> {
    let now = clock.now();
    should_show_now_indicator(viewed_date, now).then(|| compute_now_offset(now, pixels_per_hour))
}

/// Index of the column in `dates` that contains `now`.
pub fn now_column(dates: &[NaiveDate], now: NaiveDateTime) -> Option<usize> {
    dates.iter().position(|d| *d == now.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn test_offset_at_half_past() {
        let now = date(15).and_hms_opt(13, 30, 45).unwrap();
        assert_eq!(compute_now_offset(now, 100.0), 1350.0);
    }

    #[test]
    fn test_indicator_only_on_today() {
        let now = date(15).and_hms_opt(8, 0, 0).unwrap();
        assert!(should_show_now_indicator(date(15), now));
        assert!(!should_show_now_indicator(date(16), now));
    }

    #[test]
    fn test_now_offset_reads_clock_once() {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .times(1)
            .returning(|| date(15).and_hms_opt(9, 15, 0).unwrap());

        assert_eq!(now_offset_for(&clock, date(15), 120.0), Some(1110.0));
    }

    #[test]
    fn test_now_offset_hidden_on_other_days() {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .returning(|| date(15).and_hms_opt(9, 15, 0).unwrap());

        assert_eq!(now_offset_for(&clock, date(14), 120.0), None);
    }

    #[test]
    fn test_fixed_clock() {
        let instant = date(20).and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(FixedClock(instant).now(), instant);
    }

    #[test]
    fn test_now_column() {
        let dates: Vec<_> = (13..=19).map(date).collect();
        let now = date(17).and_hms_opt(23, 59, 0).unwrap();
        assert_eq!(now_column(&dates, now), Some(4));
        assert_eq!(now_column(&dates[..3], now), None);
    }
}
