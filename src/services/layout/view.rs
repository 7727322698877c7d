//! Day and week layout composition.
//!
//! Each day column is one lane-allocation scope: events are clipped to the
//! date, allocated into lanes, then mapped onto the time axis.

use chrono::{NaiveDate, NaiveDateTime};

use super::geometry::compute_rect;
use super::lanes::allocate;
use super::now::{compute_now_offset, now_column, should_show_now_indicator, Clock};
use super::segment::segments_for_date;
use crate::error::LayoutResult;
use crate::models::event::{validate_interval, TimeSpan};
use crate::models::layout::{DayLayout, EventPlacement, WeekLayout};
use crate::models::settings::{LaneGrouping, LayoutSettings, ViewScale};
use crate::utils::date::{get_week_start, week_dates};

/// Per-view layout parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewOptions {
    pub scale: ViewScale,
    pub grouping: LaneGrouping,
}

impl ViewOptions {
    pub fn day(settings: &LayoutSettings) -> Self {
        Self {
            scale: settings.day,
            grouping: settings.lane_grouping,
        }
    }

    pub fn week(settings: &LayoutSettings) -> Self {
        Self {
            scale: settings.week,
            grouping: settings.lane_grouping,
        }
    }
}

/// Lay out one day column.
///
/// Fails on the first event whose end precedes its start, even if that
/// event is not on `date`.
pub fn layout_day<T: TimeSpan, C: Clock + ?Sized>(
    date: NaiveDate,
    events: &[T],
    options: &ViewOptions,
    clock: &C,
) -> LayoutResult<DayLayout> {
    for event in events {
        validate_interval(event)?;
    }
    layout_day_at(date, events, options, clock.now())
}

/// Lay out the seven day columns of the week containing `anchor`.
pub fn layout_week<T: TimeSpan, C: Clock + ?Sized>(
    anchor: NaiveDate,
    first_day_of_week: u8,
    events: &[T],
    options: &ViewOptions,
    clock: &C,
) -> LayoutResult<WeekLayout> {
    for event in events {
        validate_interval(event)?;
    }

    // One reading of the clock for the whole week keeps the columns consistent.
    let now = clock.now();
    let dates = week_dates(get_week_start(anchor, first_day_of_week));

    let days = dates
        .iter()
        .map(|date| layout_day_at(*date, events, options, now))
        .collect::<LayoutResult<Vec<_>>>()?;

    Ok(WeekLayout {
        days,
        now_column: now_column(&dates, now),
    })
}

fn layout_day_at<T: TimeSpan>(
    date: NaiveDate,
    events: &[T],
    options: &ViewOptions,
    now: NaiveDateTime,
) -> LayoutResult<DayLayout> {
    let segments = segments_for_date(events, date);

    let placements = allocate(&segments, options.grouping)?
        .into_iter()
        .map(|(idx, lane)| -> LayoutResult<EventPlacement> {
            let rect = compute_rect(&segments[idx], &options.scale)?;
            Ok(EventPlacement {
                event_id: lane.event_id.clone(),
                date,
                left_fraction: lane.left_fraction(),
                width_fraction: lane.width_fraction(),
                lane,
                rect,
            })
        })
        .collect::<LayoutResult<Vec<_>>>()?;

    log::debug!("Laid out {} events for {}", placements.len(), date);

    Ok(DayLayout {
        date,
        placements,
        now_offset: should_show_now_indicator(date, now)
            .then(|| compute_now_offset(now, options.scale.pixels_per_hour)),
    })
}
