//! Error types for the layout engine.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::models::event::EventId;

/// Errors raised while laying out events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Event {id} ends before it starts ({end} < {start})")]
    InvalidInterval {
        id: EventId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// Result type alias for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
