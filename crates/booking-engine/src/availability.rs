//! Free-slot computation over a range of calendar events.
//!
//! Partitions events into availability windows and occupied blocks, then
//! subtracts every occupied block from each availability window. Subtraction
//! is applied incrementally: a fragment produced by one occupied block is
//! still checked against every remaining occupied block, so several meetings
//! inside one long availability window all carve out correctly.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};
use crate::event::CalendarEvent;
use crate::source::CalendarSource;

/// A free time slot: a maximal sub-interval of one availability window with
/// all occupied blocks removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
}

impl FreeSlot {
    fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            duration_minutes: (end - start).num_minutes(),
        }
    }

    /// Whether the slot fully contains the window `[start, end)`.
    pub fn contains(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start <= start && self.end >= end
    }
}

/// An availability listing request over whole calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityRequest {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

impl AvailabilityRequest {
    /// # Errors
    /// Returns `BookingError::InvalidInput` when `to_date < from_date`.
    pub fn new(from_date: NaiveDate, to_date: NaiveDate) -> Result<Self> {
        if to_date < from_date {
            return Err(BookingError::InvalidInput(
                "the to date must be a date after or equal to the from date".to_string(),
            ));
        }
        Ok(Self { from_date, to_date })
    }

    /// Absolute bounds of the request: start of the first day through the
    /// exclusive end of the last day (midnight of the following day).
    pub fn window(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (start_of_day(self.from_date), end_of_day(self.to_date))
    }
}

/// Midnight at the start of `date`, UTC.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Exclusive end bound of `date`: midnight of the following day, UTC.
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    start_of_day(date.succ_opt().unwrap_or(NaiveDate::MAX))
}

/// Compute the free slots within `[range_start, range_end)` from a raw event
/// list.
///
/// Events that do not intersect the range are ignored; availability windows
/// that do intersect it participate in full (the range scopes the fetch, it
/// does not clip declared availability). Occupied blocks are processed in
/// ascending start order with a stable sort, and surviving fragments are
/// emitted in the input order of the availability windows they came from, so
/// the output is deterministic for a given event list.
///
/// An availability window fully covered by occupied blocks contributes zero
/// slots. Overlapping occupied blocks remove their union exactly once. No
/// returned slot has `start >= end`.
pub fn compute_free_slots(
    events: &[CalendarEvent],
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
) -> Vec<FreeSlot> {
    let in_range: Vec<&CalendarEvent> = events
        .iter()
        .filter(|e| e.start < range_end && e.end > range_start)
        .collect();

    let available: Vec<&CalendarEvent> = in_range
        .iter()
        .copied()
        .filter(|e| e.is_available())
        .collect();

    let mut occupied: Vec<&CalendarEvent> = in_range
        .iter()
        .copied()
        .filter(|e| !e.is_available())
        .collect();
    // Stable: blocks that start together keep their input order.
    occupied.sort_by_key(|e| e.start);

    let mut free = Vec::new();
    for window in available {
        let mut fragments = vec![(window.start, window.end)];
        for busy in &occupied {
            fragments = fragments
                .into_iter()
                .flat_map(|fragment| subtract(fragment, busy.start, busy.end))
                .collect();
        }
        free.extend(
            fragments
                .into_iter()
                .filter(|&(start, end)| start < end)
                .map(|(start, end)| FreeSlot::new(start, end)),
        );
    }

    free
}

/// Subtract one occupied interval from one candidate fragment.
///
/// No overlap (`busy_end <= start || busy_start >= end`) keeps the fragment
/// unchanged. Otherwise zero, one, or two remainders emerge: a left remainder
/// when the occupied interval starts after the fragment does, a right
/// remainder when it ends before the fragment does.
fn subtract(
    (start, end): (DateTime<Utc>, DateTime<Utc>),
    busy_start: DateTime<Utc>,
    busy_end: DateTime<Utc>,
) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    if busy_end <= start || busy_start >= end {
        return vec![(start, end)];
    }

    let mut remainders = Vec::new();
    if busy_start > start {
        remainders.push((start, busy_start));
    }
    if busy_end < end {
        remainders.push((busy_end, end));
    }
    remainders
}

/// Fetch a fresh day range of events from the calendar source and compute its
/// free slots.
///
/// # Errors
/// Propagates `BookingError::Source` from the calendar fetch.
pub fn list_availability<S: CalendarSource>(
    source: &S,
    request: AvailabilityRequest,
) -> Result<Vec<FreeSlot>> {
    let (range_start, range_end) = request.window();
    let events = source.events_between(range_start, range_end)?;
    Ok(compute_free_slots(&events, range_start, range_end))
}
