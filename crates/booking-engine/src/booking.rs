//! Booking requests, validation, and appointment creation.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::availability::{list_availability, AvailabilityRequest, FreeSlot};
use crate::error::{BookingError, Result};
use crate::event::CalendarEvent;
use crate::source::CalendarSource;

/// A request to book an appointment of `duration_minutes` starting at
/// `start`. The implied booking window is `[start, start + duration)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub title: String,
    pub start: DateTime<Utc>,
    pub duration_minutes: i64,
}

impl BookingRequest {
    /// # Errors
    /// Returns `BookingError::InvalidInput` for an empty title or a
    /// non-positive duration.
    pub fn new(
        title: impl Into<String>,
        start: DateTime<Utc>,
        duration_minutes: i64,
    ) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(BookingError::InvalidInput(
                "the title field is required".to_string(),
            ));
        }
        if duration_minutes <= 0 {
            return Err(BookingError::InvalidInput(
                "the duration must be a positive number of minutes".to_string(),
            ));
        }
        Ok(Self {
            title,
            start,
            duration_minutes,
        })
    }

    /// End of the booking window.
    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::minutes(self.duration_minutes)
    }
}

/// Accept the booking iff some free slot fully contains its window.
///
/// Containment is `slot.start <= booking.start && slot.end >= booking.end`.
/// The slots must have been computed for at least the full day(s) containing
/// the booking window — a slot reaching up to a day boundary must be visible
/// in full, never truncated by a narrower query range.
///
/// # Errors
/// Returns `BookingError::InvalidBooking` when no slot contains the window.
pub fn validate_booking(booking: &BookingRequest, free_slots: &[FreeSlot]) -> Result<()> {
    let end = booking.end();
    if free_slots.iter().any(|slot| slot.contains(booking.start, end)) {
        Ok(())
    } else {
        Err(BookingError::InvalidBooking(
            "no available slot at the specified time".to_string(),
        ))
    }
}

/// Validate a booking against fresh availability and persist the new event.
///
/// Availability is recomputed for the full day span of the booking window
/// (start of the first day through end of the last, so a window crossing
/// midnight validates against both days), then the appointment is handed to
/// the calendar source. There is no re-check between validation and write:
/// two concurrent bookings for the same slot can both pass, and the calendar
/// source remains the single source of truth.
///
/// # Errors
/// Returns `BookingError::InvalidBooking` when the window fits no free slot,
/// and propagates `BookingError::Source` from the fetch or the write.
pub fn book_appointment<S: CalendarSource>(
    source: &mut S,
    booking: &BookingRequest,
) -> Result<CalendarEvent> {
    let day_range =
        AvailabilityRequest::new(booking.start.date_naive(), booking.end().date_naive())?;
    let free_slots = list_availability(source, day_range)?;
    validate_booking(booking, &free_slots)?;

    let event = CalendarEvent::appointment(&booking.title, booking.start, booking.end());
    source.create_event(event)
}
