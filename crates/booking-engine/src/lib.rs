//! # booking-engine
//!
//! Appointment availability computation and booking validation for calendar
//! backoffices.
//!
//! The engine takes raw calendar events for a date range, partitions them into
//! declared availability windows and occupied blocks, and computes the free
//! sub-intervals left after subtracting every occupied block. Booking requests
//! are accepted only when their window fits entirely inside one of those free
//! slots. Both computations are pure and synchronous; fetching events and
//! persisting bookings go through the [`CalendarSource`] seam.
//!
//! ## Modules
//!
//! - [`availability`] — free-slot computation and the availability listing
//! - [`booking`] — booking requests, validation, and appointment creation
//! - [`event`] — calendar event types and the available/occupied classification
//! - [`source`] — the external calendar source seam
//! - [`conversation`] — keyed conversation history with per-key expiry
//! - [`error`] — error types

pub mod availability;
pub mod booking;
pub mod conversation;
pub mod error;
pub mod event;
pub mod source;

pub use availability::{compute_free_slots, list_availability, AvailabilityRequest, FreeSlot};
pub use booking::{book_appointment, validate_booking, BookingRequest};
pub use error::BookingError;
pub use event::{BlockKind, CalendarEvent, AVAILABLE_LABEL};
pub use source::{CalendarSource, InMemoryCalendar};
