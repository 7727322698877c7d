// Test fixtures - reusable test data
// Provides consistent agendas across all test files
#![allow(dead_code)]

use agenda_layout::models::event::Event;
use chrono::{NaiveDate, NaiveDateTime};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Wednesday, Jan 15, 2025
    pub fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    /// Monday of the same week
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 13).unwrap()
    }

    /// `hour:minute` on the Wednesday
    pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
        wednesday().and_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// Event on the Wednesday from `start` to `end` given as (hour, minute)
    pub fn on_wednesday(id: i64, start: (u32, u32), end: (u32, u32)) -> Event {
        Event::new(id, dates::at(start.0, start.1), dates::at(end.0, end.1)).unwrap()
    }

    /// A typical sales day: client call, overlapping pipeline review,
    /// lunch, then an afternoon demo after a long break.
    pub fn sales_day() -> Vec<Event> {
        vec![
            on_wednesday(1, (9, 0), (10, 0)),
            on_wednesday(2, (9, 30), (10, 30)),
            on_wednesday(3, (12, 0), (13, 0)),
            on_wednesday(4, (15, 30), (16, 0)),
        ]
    }
}
