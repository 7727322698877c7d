// Event module
// Time-ranged agenda entries as seen by the layout engine

use std::fmt;

use chrono::{DateTime, Duration, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};

/// Opaque identifier of an event, unique within one view's event set.
///
/// Backends hand out either numeric row ids or string keys, so both are
/// accepted and serialized untagged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Int(i64),
    Text(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Int(id) => write!(f, "#{}", id),
            EventId::Text(id) => write!(f, "'{}'", id),
        }
    }
}

impl From<i64> for EventId {
    fn from(id: i64) -> Self {
        EventId::Int(id)
    }
}

impl From<i32> for EventId {
    fn from(id: i32) -> Self {
        EventId::Int(id.into())
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        EventId::Text(id.to_string())
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        EventId::Text(id)
    }
}

/// Anything with an identity and a local wall-clock interval.
///
/// The layout functions only read through this trait, so callers can lay
/// out their own records without copying them into [`Event`].
pub trait TimeSpan {
    fn id(&self) -> &EventId;
    fn start(&self) -> NaiveDateTime;
    fn end(&self) -> NaiveDateTime;

    fn duration(&self) -> Duration {
        self.end() - self.start()
    }
}

impl<T: TimeSpan + ?Sized> TimeSpan for &T {
    fn id(&self) -> &EventId {
        (**self).id()
    }

    fn start(&self) -> NaiveDateTime {
        (**self).start()
    }

    fn end(&self) -> NaiveDateTime {
        (**self).end()
    }
}

/// Reject spans that end before they start. Zero-length spans are valid.
pub fn validate_interval<T: TimeSpan + ?Sized>(span: &T) -> LayoutResult<()> {
    if span.end() < span.start() {
        log::warn!(
            "Rejecting event {}: end {} is before start {}",
            span.id(),
            span.end(),
            span.start()
        );
        return Err(LayoutError::InvalidInterval {
            id: span.id().clone(),
            start: span.start(),
            end: span.end(),
        });
    }
    Ok(())
}

/// Agenda event with an opaque payload the layout engine never touches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event<P = ()> {
    pub id: EventId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(flatten)]
    pub payload: P,
}

impl Event {
    /// Create an event without payload
    ///
    /// # Examples
    /// ```
    /// use agenda_layout::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    /// let start = day.and_hms_opt(9, 0, 0).unwrap();
    /// let end = day.and_hms_opt(10, 0, 0).unwrap();
    /// let event = Event::new(1, start, end).unwrap();
    /// assert_eq!(event.duration().num_minutes(), 60);
    /// ```
    pub fn new(
        id: impl Into<EventId>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> LayoutResult<Self> {
        Event::with_payload(id, start, end, ())
    }

    /// Create an event from timezone-aware local timestamps
    pub fn from_local(
        id: impl Into<EventId>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> LayoutResult<Self> {
        Event::new(id, start.naive_local(), end.naive_local())
    }
}

impl<P> Event<P> {
    /// Create an event carrying `payload`
    pub fn with_payload(
        id: impl Into<EventId>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        payload: P,
    ) -> LayoutResult<Self> {
        let event = Self {
            id: id.into(),
            start,
            end,
            payload,
        };
        event.validate()?;
        Ok(event)
    }

    /// Validate the event
    pub fn validate(&self) -> LayoutResult<()> {
        validate_interval(self)
    }

    /// Get the duration of the event
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

impl<P> TimeSpan for Event<P> {
    fn id(&self) -> &EventId {
        &self.id
    }

    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_new_accepts_zero_duration() {
        let event = Event::new(7, at(9, 0), at(9, 0)).unwrap();
        assert_eq!(event.duration(), Duration::zero());
    }

    #[test]
    fn test_new_rejects_end_before_start() {
        let err = Event::new("call", at(10, 0), at(9, 0)).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidInterval {
                id: EventId::from("call"),
                start: at(10, 0),
                end: at(9, 0),
            }
        );
    }

    #[test]
    fn test_event_id_display() {
        assert_eq!(EventId::from(42).to_string(), "#42");
        assert_eq!(EventId::from("abc").to_string(), "'abc'");
    }

    #[test]
    fn test_event_id_untagged_serde() {
        let ids: Vec<EventId> = serde_json::from_str(r#"[12, "opp-7"]"#).unwrap();
        assert_eq!(ids, vec![EventId::Int(12), EventId::Text("opp-7".into())]);
    }

    #[test]
    fn test_payload_is_flattened() {
        let json = r#"{"id": 3, "start": "2025-01-15T09:00:00", "end": "2025-01-15T09:30:00", "title": "Demo"}"#;
        let event: Event<serde_json::Map<String, serde_json::Value>> =
            serde_json::from_str(json).unwrap();
        assert_eq!(event.id, EventId::Int(3));
        assert_eq!(event.payload["title"], "Demo");
        assert_eq!(event.duration().num_minutes(), 30);
    }

    #[test]
    fn test_reference_forwards_time_span() {
        let event = Event::new(1, at(8, 0), at(8, 45)).unwrap();
        let by_ref = &event;
        assert_eq!(TimeSpan::duration(&by_ref).num_minutes(), 45);
        assert_eq!(TimeSpan::id(&by_ref), &EventId::Int(1));
    }
}
