//! Error types for availability and booking operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    /// Malformed or missing caller input (empty title, non-positive duration,
    /// an inverted date range). Rejected before any computation runs.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The requested booking window fits no free slot. A normal outcome of
    /// validation, surfaced distinctly so callers can show the message.
    #[error("Invalid booking: {0}")]
    InvalidBooking(String),

    /// The external calendar source failed or returned malformed data.
    /// Propagated as-is; retry policy belongs to the calling layer.
    #[error("Calendar source failure: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, BookingError>;
