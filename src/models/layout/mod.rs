// Layout module
// Derived, render-time records produced by the layout engine.
// None of these are persisted; they are recomputed on every render.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::event::EventId;

/// Column placement of one event within its overlap group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneAssignment {
    pub event_id: EventId,
    /// Zero-based column; overlapping events never share one.
    pub lane_index: usize,
    /// Number of columns in the event's group. Width is `1 / lane_count`.
    pub lane_count: usize,
}

impl LaneAssignment {
    /// Horizontal start of the column as a fraction of the day column width.
    pub fn left_fraction(&self) -> f32 {
        self.lane_index as f32 / self.lane_count.max(1) as f32
    }

    /// Column width as a fraction of the day column width.
    pub fn width_fraction(&self) -> f32 {
        1.0 / self.lane_count.max(1) as f32
    }
}

/// Vertical pixel placement of an event on the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryRect {
    /// Pixels from midnight.
    pub top_offset: f32,
    pub height: f32,
}

/// A free-time break between two consecutive events of a sorted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapMarker {
    /// Index of the earlier event; the gap sits before `after_index + 1`.
    pub after_index: usize,
    pub idle_minutes: i64,
}

/// Everything a time-grid renderer needs for one event on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPlacement {
    pub event_id: EventId,
    pub date: NaiveDate,
    pub lane: LaneAssignment,
    pub rect: GeometryRect,
    pub left_fraction: f32,
    pub width_fraction: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub placements: Vec<EventPlacement>,
    /// Offset of the current-time line, present only when `date` is today.
    pub now_offset: Option<f32>,
}

impl DayLayout {
    pub fn lane_count(&self) -> usize {
        self.placements
            .iter()
            .map(|p| p.lane.lane_count)
            .max()
            .unwrap_or(0)
    }

    pub fn placement_for(&self, id: &EventId) -> Option<&EventPlacement> {
        self.placements.iter().find(|p| &p.event_id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekLayout {
    pub days: Vec<DayLayout>,
    /// Index into `days` of today's column, if the week contains today.
    pub now_column: Option<usize>,
}

/// One row of the condensed list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgendaEntry {
    Event { index: usize, id: EventId },
    Gap(GapMarker),
}
