// Layout service
// Lane allocation, time-grid geometry, now indicator and gap detection

pub mod gaps;
pub mod geometry;
pub mod lanes;
pub mod now;
pub mod segment;
pub mod view;

pub use gaps::{condensed_agenda, detect_gaps};
pub use geometry::{compute_rect, slot_offset, time_at_offset};
pub use lanes::{assign_lanes, assign_lanes_with, chronological_order, sorted_by_start};
pub use now::{
    compute_now_offset, now_column, now_offset_for, should_show_now_indicator, Clock, FixedClock,
    SystemClock,
};
pub use segment::{segment_for_date, segments_for_date, DaySegment};
pub use view::{layout_day, layout_week, ViewOptions};
