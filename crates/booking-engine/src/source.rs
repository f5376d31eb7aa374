//! The external calendar source seam.
//!
//! The engine never talks to a provider API directly. Callers hand it
//! something implementing [`CalendarSource`] — two narrow operations, a
//! ranged read and a single-event write. [`InMemoryCalendar`] backs the CLI
//! and the tests; a provider-backed implementation lives outside this crate.

use chrono::{DateTime, Utc};

use crate::error::{BookingError, Result};
use crate::event::CalendarEvent;

/// A calendar that can be read by range and appended to.
///
/// Implementations map transport failures to `BookingError::Source`; the
/// engine does not retry.
pub trait CalendarSource {
    /// List all events overlapping `[start, end)`.
    fn events_between(&self, start: DateTime<Utc>, end: DateTime<Utc>)
        -> Result<Vec<CalendarEvent>>;

    /// Persist a new event, returning the stored copy.
    fn create_event(&mut self, event: CalendarEvent) -> Result<CalendarEvent>;
}

/// A plain in-memory calendar.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCalendar {
    events: Vec<CalendarEvent>,
}

impl InMemoryCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<CalendarEvent>) -> Self {
        Self { events }
    }

    /// Parse a calendar from a JSON array of wire events
    /// (`{"label", "start", "end"}`).
    ///
    /// # Errors
    /// Returns `BookingError::Source` when the JSON is malformed — a calendar
    /// source returning bad data is an upstream failure, not caller input.
    pub fn from_json(json: &str) -> Result<Self> {
        let events: Vec<CalendarEvent> =
            serde_json::from_str(json).map_err(|e| BookingError::Source(e.to_string()))?;
        Ok(Self { events })
    }

    /// Serialize the calendar back to a JSON array of wire events.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.events).map_err(|e| BookingError::Source(e.to_string()))
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }
}

impl CalendarSource for InMemoryCalendar {
    fn events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.start < end && e.end > start)
            .cloned()
            .collect())
    }

    fn create_event(&mut self, event: CalendarEvent) -> Result<CalendarEvent> {
        self.events.push(event.clone());
        Ok(event)
    }
}
