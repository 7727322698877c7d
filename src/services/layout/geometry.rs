//! Time-grid geometry: maps event intervals to pixel offsets on the day axis.

use chrono::{NaiveTime, Timelike};

use crate::error::LayoutResult;
use crate::models::event::{validate_interval, TimeSpan};
use crate::models::layout::GeometryRect;
use crate::models::settings::ViewScale;
use crate::utils::date::hours_since_midnight;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Compute the vertical placement of `event` on a time axis.
///
/// `top_offset` is proportional to the start's time of day; `height` is
/// proportional to the duration in whole minutes but never below
/// `scale.min_height_px`.
pub fn compute_rect<T: TimeSpan + ?Sized>(
    event: &T,
    scale: &ViewScale,
) -> LayoutResult<GeometryRect> {
    validate_interval(event)?;

    let top_offset = hours_since_midnight(event.start().time()) * scale.pixels_per_hour;
    let duration_minutes = event.duration().num_minutes() as f32;
    let raw_height = duration_minutes / 60.0 * scale.pixels_per_hour;

    Ok(GeometryRect {
        top_offset,
        height: raw_height.max(scale.min_height_px),
    })
}

/// Time of day under a vertical pixel offset, floored to the slot interval.
///
/// Offsets above the axis map to midnight and offsets past the end of the
/// day map to the last slot.
pub fn time_at_offset(offset_px: f32, scale: &ViewScale, slot_minutes: u32) -> NaiveTime {
    if !(scale.pixels_per_hour > 0.0) || !offset_px.is_finite() {
        return NaiveTime::MIN;
    }
    let slot_minutes = slot_minutes.clamp(1, 60);

    let minutes = (offset_px / scale.pixels_per_hour * 60.0).floor();
    let minutes = minutes.clamp(0.0, (MINUTES_PER_DAY - 1) as f32) as u32;
    let snapped = minutes - minutes % slot_minutes;

    NaiveTime::from_hms_opt(snapped / 60, snapped % 60, 0).unwrap_or(NaiveTime::MIN)
}

/// Pixel offset of the slot containing `time`.
pub fn slot_offset(time: NaiveTime, scale: &ViewScale, slot_minutes: u32) -> f32 {
    let slot_minutes = slot_minutes.clamp(1, 60);
    let minutes = time.hour() * 60 + time.minute();
    let snapped = minutes - minutes % slot_minutes;
    snapped as f32 / 60.0 * scale.pixels_per_hour
}
