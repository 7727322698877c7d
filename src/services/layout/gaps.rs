//! Free-time detection for the condensed agenda list.

use crate::models::event::TimeSpan;
use crate::models::layout::{AgendaEntry, GapMarker};

/// Flag idle breaks longer than `threshold_minutes` between consecutive
/// events of an already time-sorted sequence.
///
/// The comparison is strict: a break of exactly `threshold_minutes` is not a
/// gap, but any seconds beyond it are. `idle_minutes` on the marker is the
/// break rounded down to whole minutes. Nothing is reported before the first
/// or after the last event, and overlapping neighbours never produce a gap.
pub fn detect_gaps<T: TimeSpan>(sorted_events: &[T], threshold_minutes: i64) -> Vec<GapMarker> {
    sorted_events
        .windows(2)
        .enumerate()
        .filter_map(|(idx, pair)| {
            let idle = pair[1].start() - pair[0].end();
            (idle.num_seconds() > threshold_minutes.saturating_mul(60)).then(|| GapMarker {
                after_index: idx,
                idle_minutes: idle.num_minutes(),
            })
        })
        .collect()
}

/// Interleave events and gap markers into list-view rows.
pub fn condensed_agenda<T: TimeSpan>(sorted_events: &[T], threshold_minutes: i64) -> Vec<AgendaEntry> {
    let mut gaps = detect_gaps(sorted_events, threshold_minutes).into_iter().peekable();
    let mut entries = Vec::with_capacity(sorted_events.len());

    for (index, event) in sorted_events.iter().enumerate() {
        entries.push(AgendaEntry::Event {
            index,
            id: event.id().clone(),
        });
        if let Some(gap) = gaps.next_if(|gap| gap.after_index == index) {
            entries.push(AgendaEntry::Gap(gap));
        }
    }
    entries
}
