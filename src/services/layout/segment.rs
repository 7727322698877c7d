//! Clipping of events to a single day column.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::models::event::{EventId, TimeSpan};
use crate::utils::date::start_of_day;

/// The part of an event drawn on one date.
#[derive(Debug, Clone)]
pub struct DaySegment<'a, T: ?Sized> {
    pub source: &'a T,
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl<T: TimeSpan + ?Sized> TimeSpan for DaySegment<'_, T> {
    fn id(&self) -> &EventId {
        self.source.id()
    }

    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }
}

/// Returns the start/end timestamps for the portion of `event` that should appear on `date`.
///
/// The event is cut to `[midnight, next midnight)` of `date`, so an event
/// running across several days covers every day in between completely.
/// Zero-length events on `date` are kept. Inverted intervals never produce a
/// segment.
pub fn segment_for_date<T: TimeSpan + ?Sized>(
    event: &T,
    date: NaiveDate,
) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let event_start = event.start();
    let event_end = event.end();

    if event_end < event_start || date < event_start.date() || date > event_end.date() {
        return None;
    }

    if event_start.date() == event_end.date() {
        return Some((event_start, event_end));
    }

    let day_start = start_of_day(date);
    let day_end = day_start + Duration::days(1);

    let segment_start = event_start.max(day_start);
    let segment_end = event_end.min(day_end);

    (segment_start < segment_end).then_some((segment_start, segment_end))
}

/// Segments of `events` that fall on `date`, in input order.
pub fn segments_for_date<T: TimeSpan>(events: &[T], date: NaiveDate) -> Vec<DaySegment<'_, T>> {
    events
        .iter()
        .filter_map(|event| {
            segment_for_date(event, date).map(|(start, end)| DaySegment {
                source: event,
                date,
                start,
                end,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::Event;

    fn dt(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn test_single_day_event_passes_through() {
        let event = Event::new(1, dt(15, 9, 0), dt(15, 10, 0)).unwrap();
        assert_eq!(
            segment_for_date(&event, date(15)),
            Some((dt(15, 9, 0), dt(15, 10, 0)))
        );
        assert_eq!(segment_for_date(&event, date(16)), None);
    }

    #[test]
    fn test_zero_duration_event_is_kept() {
        let event = Event::new(1, dt(15, 9, 0), dt(15, 9, 0)).unwrap();
        assert_eq!(
            segment_for_date(&event, date(15)),
            Some((dt(15, 9, 0), dt(15, 9, 0)))
        );
    }

    #[test]
    fn test_multi_day_event_covers_whole_middle_day() {
        let event = Event::new(1, dt(13, 9, 0), dt(15, 17, 0)).unwrap();
        assert_eq!(
            segment_for_date(&event, date(13)),
            Some((dt(13, 9, 0), dt(14, 0, 0)))
        );
        assert_eq!(
            segment_for_date(&event, date(14)),
            Some((dt(14, 0, 0), dt(15, 0, 0)))
        );
        assert_eq!(
            segment_for_date(&event, date(15)),
            Some((dt(15, 0, 0), dt(15, 17, 0)))
        );
    }

    #[test]
    fn test_overnight_event_splits_at_midnight() {
        let event = Event::new(1, dt(15, 22, 0), dt(16, 2, 0)).unwrap();
        assert_eq!(
            segment_for_date(&event, date(15)),
            Some((dt(15, 22, 0), dt(16, 0, 0)))
        );
        assert_eq!(
            segment_for_date(&event, date(16)),
            Some((dt(16, 0, 0), dt(16, 2, 0)))
        );
    }

    #[test]
    fn test_event_ending_at_midnight_skips_next_day() {
        let event = Event::new(1, dt(15, 22, 0), dt(16, 0, 0)).unwrap();
        assert_eq!(segment_for_date(&event, date(16)), None);
    }

    #[test]
    fn test_segments_for_date_filters() {
        let events = vec![
            Event::new(1, dt(15, 9, 0), dt(15, 10, 0)).unwrap(),
            Event::new(2, dt(16, 9, 0), dt(16, 10, 0)).unwrap(),
        ];
        let segments = segments_for_date(&events, date(16));
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].id(), &EventId::Int(2));
    }
}
