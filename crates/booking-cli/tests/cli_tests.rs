//! Integration tests for the `bookings` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the availability,
//! book, and events subcommands through the actual binary, including
//! stdin/stdout piping, file I/O, and the error taxonomy (input errors,
//! domain rejections).

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the calendar.json fixture.
fn calendar_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/calendar.json")
}

/// Helper: read the calendar.json fixture as a string.
fn calendar_json() -> String {
    std::fs::read_to_string(calendar_path()).expect("calendar.json fixture must exist")
}

// ─────────────────────────────────────────────────────────────────────────────
// Availability subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn availability_single_day_prints_three_slots() {
    let output = Command::cargo_bin("bookings")
        .unwrap()
        .args([
            "availability",
            "--from",
            "2026-03-02",
            "--to",
            "2026-03-02",
            "-i",
            calendar_path(),
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let slots: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let slots = slots.as_array().unwrap();
    assert_eq!(slots.len(), 3);

    assert_eq!(slots[0]["start"], "2026-03-02T09:00:00Z");
    assert_eq!(slots[0]["end"], "2026-03-02T10:00:00Z");
    assert_eq!(slots[1]["start"], "2026-03-02T11:00:00Z");
    assert_eq!(slots[1]["end"], "2026-03-02T13:00:00Z");
    assert_eq!(slots[2]["start"], "2026-03-02T14:00:00Z");
    assert_eq!(slots[2]["end"], "2026-03-02T17:00:00Z");
    assert_eq!(slots[1]["duration_minutes"], 120);
}

#[test]
fn availability_reads_calendar_from_stdin() {
    Command::cargo_bin("bookings")
        .unwrap()
        .args(["availability", "--from", "2026-03-03", "--to", "2026-03-03"])
        .write_stdin(calendar_json())
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-03-03T09:00:00Z"))
        .stdout(predicate::str::contains("2026-03-03T12:00:00Z"));
}

#[test]
fn availability_spanning_both_days_lists_all_slots() {
    let output = Command::cargo_bin("bookings")
        .unwrap()
        .args([
            "availability",
            "--from",
            "2026-03-02",
            "--to",
            "2026-03-03",
            "-i",
            calendar_path(),
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let slots: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(slots.as_array().unwrap().len(), 4);
}

#[test]
fn availability_rejects_inverted_date_range() {
    Command::cargo_bin("bookings")
        .unwrap()
        .args([
            "availability",
            "--from",
            "2026-03-03",
            "--to",
            "2026-03-02",
            "-i",
            calendar_path(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("after or equal to the from date"));
}

#[test]
fn availability_rejects_malformed_date() {
    Command::cargo_bin("bookings")
        .unwrap()
        .args([
            "availability",
            "--from",
            "03/02/2026",
            "--to",
            "2026-03-02",
            "-i",
            calendar_path(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn availability_rejects_malformed_calendar_json() {
    Command::cargo_bin("bookings")
        .unwrap()
        .args(["availability", "--from", "2026-03-02", "--to", "2026-03-02"])
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse calendar JSON"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Book subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn book_inside_a_free_slot_prints_the_created_event() {
    Command::cargo_bin("bookings")
        .unwrap()
        .args([
            "book",
            "--title",
            "Checkup",
            "--start",
            "2026-03-02T11:15:00Z",
            "--duration",
            "30",
            "-i",
            calendar_path(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checkup"))
        .stdout(predicate::str::contains("2026-03-02T11:15:00Z"))
        .stdout(predicate::str::contains("2026-03-02T11:45:00Z"));
}

#[test]
fn book_writes_the_updated_calendar() {
    let out_path = std::env::temp_dir().join("bookings_cli_updated_calendar.json");
    let _ = std::fs::remove_file(&out_path);

    Command::cargo_bin("bookings")
        .unwrap()
        .args([
            "book",
            "--title",
            "Checkup",
            "--start",
            "2026-03-02T11:15:00Z",
            "--duration",
            "30",
            "-i",
            calendar_path(),
            "-o",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let written = std::fs::read_to_string(&out_path).unwrap();
    let events: serde_json::Value = serde_json::from_str(&written).unwrap();
    let events = events.as_array().unwrap();
    // Fixture's four events plus the new appointment.
    assert_eq!(events.len(), 5);
    assert_eq!(events[4]["label"], "Checkup");

    let _ = std::fs::remove_file(&out_path);
}

#[test]
fn book_during_an_occupied_block_is_rejected() {
    Command::cargo_bin("bookings")
        .unwrap()
        .args([
            "book",
            "--title",
            "Checkup",
            "--start",
            "2026-03-02T10:30:00Z",
            "--duration",
            "30",
            "-i",
            calendar_path(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no available slot at the specified time",
        ));
}

#[test]
fn book_outside_availability_is_rejected() {
    Command::cargo_bin("bookings")
        .unwrap()
        .args([
            "book",
            "--title",
            "Checkup",
            "--start",
            "2026-03-02T18:00:00Z",
            "--duration",
            "30",
            "-i",
            calendar_path(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no available slot"));
}

#[test]
fn book_rejects_non_positive_duration() {
    Command::cargo_bin("bookings")
        .unwrap()
        .args([
            "book",
            "--title",
            "Checkup",
            "--start",
            "2026-03-02T11:15:00Z",
            "--duration",
            "0",
            "-i",
            calendar_path(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive number of minutes"));
}

#[test]
fn book_rejects_malformed_start_datetime() {
    Command::cargo_bin("bookings")
        .unwrap()
        .args([
            "book",
            "--title",
            "Checkup",
            "--start",
            "tomorrow at noon",
            "--duration",
            "30",
            "-i",
            calendar_path(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid start datetime"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Events subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn events_lists_everything_overlapping_the_range() {
    let output = Command::cargo_bin("bookings")
        .unwrap()
        .args([
            "events",
            "--from",
            "2026-03-02",
            "--to",
            "2026-03-02",
            "-i",
            calendar_path(),
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let events: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let events = events.as_array().unwrap();
    // The 2026-03-03 availability window falls outside the range.
    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["label"], "Available");
    assert_eq!(events[1]["label"], "Team standup");
    assert_eq!(events[2]["label"], "Dentist");
}

#[test]
fn events_requires_from_and_to_together() {
    Command::cargo_bin("bookings")
        .unwrap()
        .args(["events", "--from", "2026-03-02", "-i", calendar_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be given together"));
}
