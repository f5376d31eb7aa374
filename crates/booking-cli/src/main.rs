//! `bookings` CLI — list availability, book appointments, and inspect events
//! from the command line.
//!
//! The calendar is a JSON array of `{label, start, end}` events, read from a
//! file or stdin, standing in for the external calendar source.
//!
//! ## Usage
//!
//! ```sh
//! # Free slots for a date range
//! bookings availability --from 2026-03-02 --to 2026-03-03 -i calendar.json
//!
//! # Book an appointment (writes the updated calendar with -o)
//! bookings book --title "Checkup" --start 2026-03-02T11:15:00Z \
//!     --duration 30 -i calendar.json -o calendar.json
//!
//! # Events overlapping a range (defaults to the current week)
//! bookings events -i calendar.json
//! bookings events --from 2026-03-02 --to 2026-03-08 -i calendar.json
//! ```

use anyhow::{Context, Result};
use booking_engine::availability::{list_availability, AvailabilityRequest};
use booking_engine::booking::{book_appointment, BookingRequest};
use booking_engine::source::{CalendarSource, InMemoryCalendar};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "bookings",
    version,
    about = "Appointment availability and booking CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List free slots for a date range
    Availability {
        /// First day of the range (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        /// Last day of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: String,
        /// Calendar JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Book an appointment if its window fits a free slot
    Book {
        /// Appointment title
        #[arg(long)]
        title: String,
        /// Start of the appointment (RFC 3339, e.g. 2026-03-02T11:15:00Z)
        #[arg(long)]
        start: String,
        /// Duration in minutes
        #[arg(long)]
        duration: i64,
        /// Calendar JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Where to write the updated calendar (the created event is always
        /// printed to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List events overlapping a date range
    Events {
        /// First day of the range (YYYY-MM-DD, defaults to Monday of the
        /// current week)
        #[arg(long)]
        from: Option<String>,
        /// Last day of the range, inclusive (YYYY-MM-DD, defaults to Sunday
        /// of the current week)
        #[arg(long)]
        to: Option<String>,
        /// Calendar JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Availability { from, to, input } => {
            let request = AvailabilityRequest::new(parse_date(&from)?, parse_date(&to)?)?;
            let calendar = load_calendar(input.as_deref())?;

            let slots = list_availability(&calendar, request)?;
            println!("{}", serde_json::to_string_pretty(&slots)?);
        }
        Commands::Book {
            title,
            start,
            duration,
            input,
            output,
        } => {
            let start: DateTime<Utc> = start
                .parse()
                .with_context(|| format!("Invalid start datetime: {}", start))?;
            let booking = BookingRequest::new(title, start, duration)?;
            let mut calendar = load_calendar(input.as_deref())?;

            let created = book_appointment(&mut calendar, &booking)?;
            println!("{}", serde_json::to_string_pretty(&created)?);

            if let Some(path) = output {
                let json = calendar.to_json()?;
                std::fs::write(&path, json)
                    .with_context(|| format!("Failed to write file: {}", path))?;
            }
        }
        Commands::Events { from, to, input } => {
            let (from, to) = match (from, to) {
                (Some(f), Some(t)) => (parse_date(&f)?, parse_date(&t)?),
                (None, None) => current_week(),
                _ => anyhow::bail!("--from and --to must be given together"),
            };
            // Reuse the request type for its range validation.
            let request = AvailabilityRequest::new(from, to)?;
            let calendar = load_calendar(input.as_deref())?;

            let (range_start, range_end) = request.window();
            let events = calendar.events_between(range_start, range_end)?;
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
    }

    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    raw.parse()
        .with_context(|| format!("Invalid date: '{}' (expected YYYY-MM-DD)", raw))
}

/// Monday through Sunday of the current week.
fn current_week() -> (NaiveDate, NaiveDate) {
    let today = Utc::now().date_naive();
    let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    (monday, monday + Duration::days(6))
}

fn load_calendar(path: Option<&str>) -> Result<InMemoryCalendar> {
    let json = read_input(path)?;
    let calendar = InMemoryCalendar::from_json(&json).context("Failed to parse calendar JSON")?;
    Ok(calendar)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
