//! Lane allocation for overlapping events.
//!
//! Events are placed greedily in start order into the first lane that is
//! free at their start time. Each lane only remembers the end of the last
//! event placed in it: because events arrive sorted by start, that event
//! always has the latest end among the lane's occupants.

use chrono::NaiveDateTime;

use crate::error::LayoutResult;
use crate::models::event::{validate_interval, TimeSpan};
use crate::models::layout::LaneAssignment;
use crate::models::settings::LaneGrouping;

/// Indices of `events` in chronological order.
///
/// Ties on `start` keep input order; there is deliberately no secondary key.
pub fn chronological_order<T: TimeSpan>(events: &[T]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by_key(|&idx| events[idx].start());
    order
}

/// Borrow `events` in chronological order, for list views and gap detection.
pub fn sorted_by_start<T: TimeSpan>(events: &[T]) -> Vec<&T> {
    chronological_order(events)
        .into_iter()
        .map(|idx| &events[idx])
        .collect()
}

/// Assign every event a lane, treating the whole slice as one overlap group.
///
/// Assignments come back in processing (chronological) order; join them to
/// the input on `event_id`.
pub fn assign_lanes<T: TimeSpan>(events: &[T]) -> LayoutResult<Vec<LaneAssignment>> {
    assign_lanes_with(events, LaneGrouping::Scope)
}

pub fn assign_lanes_with<T: TimeSpan>(
    events: &[T],
    grouping: LaneGrouping,
) -> LayoutResult<Vec<LaneAssignment>> {
    Ok(allocate(events, grouping)?
        .into_iter()
        .map(|(_, assignment)| assignment)
        .collect())
}

/// Lane allocation that also reports each assignment's source index.
pub(crate) fn allocate<T: TimeSpan>(
    events: &[T],
    grouping: LaneGrouping,
) -> LayoutResult<Vec<(usize, LaneAssignment)>> {
    if events.is_empty() {
        return Ok(Vec::new());
    }
    for event in events {
        validate_interval(event)?;
    }

    let order = chronological_order(events);
    let mut lane_ends: Vec<NaiveDateTime> = Vec::new();
    let mut placed: Vec<(usize, usize)> = Vec::with_capacity(events.len());

    for &idx in &order {
        let event = &events[idx];
        // Touching intervals (end == start) can share a lane.
        let lane = match lane_ends.iter().position(|end| *end <= event.start()) {
            Some(lane) => {
                lane_ends[lane] = event.end();
                lane
            }
            None => {
                lane_ends.push(event.end());
                lane_ends.len() - 1
            }
        };
        log::trace!("Event {} -> lane {}", event.id(), lane);
        placed.push((idx, lane));
    }

    let lane_counts = match grouping {
        LaneGrouping::Scope => vec![lane_ends.len(); placed.len()],
        LaneGrouping::Cluster => cluster_lane_counts(events, &placed),
    };

    log::debug!(
        "Allocated {} events into {} lanes ({:?} grouping)",
        events.len(),
        lane_ends.len(),
        grouping
    );

    Ok(placed
        .into_iter()
        .zip(lane_counts)
        .map(|((idx, lane_index), lane_count)| {
            (
                idx,
                LaneAssignment {
                    event_id: events[idx].id().clone(),
                    lane_index,
                    lane_count,
                },
            )
        })
        .collect())
}

/// Lane count per placed event, computed per connected overlap cluster.
///
/// A cluster closes once an event starts at or after the latest end seen so
/// far. Every lane is free at that point, so first-fit restarts at lane 0 and
/// the cluster's lane count is its highest lane index plus one.
fn cluster_lane_counts<T: TimeSpan>(events: &[T], placed: &[(usize, usize)]) -> Vec<usize> {
    let mut counts = vec![0; placed.len()];
    let mut cluster_start = 0;
    let mut cluster_end: Option<NaiveDateTime> = None;
    let mut cluster_lanes = 0;

    for (pos, &(idx, lane)) in placed.iter().enumerate() {
        let event = &events[idx];
        if let Some(end) = cluster_end {
            if event.start() >= end {
                counts[cluster_start..pos].fill(cluster_lanes);
                cluster_start = pos;
                cluster_end = None;
                cluster_lanes = 0;
            }
        }
        cluster_end = Some(cluster_end.map_or(event.end(), |end| end.max(event.end())));
        cluster_lanes = cluster_lanes.max(lane + 1);
    }
    counts[cluster_start..].fill(cluster_lanes);
    counts
}
