//! Calendar event types and the available/occupied classification.
//!
//! External calendar sources only understand labels: an event labeled exactly
//! `"Available"` declares a bookable window, anything else consumes time.
//! Inside the engine that convention is lifted into an explicit [`BlockKind`]
//! at construction, so no computation ever re-matches the label string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel label that marks a calendar event as an availability block.
pub const AVAILABLE_LABEL: &str = "Available";

/// Whether a calendar entry opens time for booking or consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    /// A declared window in which appointments may be scheduled.
    Available,
    /// An existing appointment or blackout; consumes time from every
    /// availability window it overlaps.
    Occupied,
}

impl BlockKind {
    /// Classify a raw calendar label. Only the exact sentinel label marks a
    /// block as available; every other label is occupied.
    pub fn from_label(label: &str) -> Self {
        if label == AVAILABLE_LABEL {
            BlockKind::Available
        } else {
            BlockKind::Occupied
        }
    }
}

/// A calendar event fetched from, or destined for, the calendar source.
///
/// Invariant: `start <= end`. A degenerate event (`start == end`) carries no
/// duration and never contributes a free slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawEvent", into = "RawEvent")]
pub struct CalendarEvent {
    pub label: String,
    pub kind: BlockKind,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CalendarEvent {
    /// Boundary constructor: classify by the sentinel-label rule.
    pub fn from_label(
        label: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        let label = label.into();
        let kind = BlockKind::from_label(&label);
        Self {
            label,
            kind,
            start,
            end,
        }
    }

    /// An appointment created by a booking. Always occupied, whatever the
    /// title says — a booking titled `"Available"` must not re-open the slot
    /// it consumed.
    pub fn appointment(title: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            label: title.into(),
            kind: BlockKind::Occupied,
            start,
            end,
        }
    }

    pub fn is_available(&self) -> bool {
        self.kind == BlockKind::Available
    }
}

/// Wire form of a calendar event. The source side of the boundary carries no
/// `kind` — it is derived from the label on the way in and dropped on the way
/// out.
#[derive(Serialize, Deserialize)]
struct RawEvent {
    label: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl From<RawEvent> for CalendarEvent {
    fn from(raw: RawEvent) -> Self {
        CalendarEvent::from_label(raw.label, raw.start, raw.end)
    }
}

impl From<CalendarEvent> for RawEvent {
    fn from(event: CalendarEvent) -> Self {
        RawEvent {
            label: event.label,
            start: event.start,
            end: event.end,
        }
    }
}
