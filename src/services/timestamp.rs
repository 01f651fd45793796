//! Timestamp parsing for entry timestamps and the `--start`/`--end` flags.
//!
//! The server stores ISO-8601 strings while users type the display form shown
//! in the cc-logs UI, so both are accepted. Everything is compared as local
//! wall-clock time.
//!
//! A trailing `Z` means UTC and is converted into the given zone. An ISO string
//! without a suffix is taken as already local. Explicit numeric offsets
//! (`+05:00`) are rejected.

use chrono::{NaiveDate, NaiveDateTime, TimeZone};
use thiserror::Error;

/// Display form used by the cc-logs UI, e.g. `11/19/2025, 11:29:15 AM`.
pub const DISPLAY_FORMAT: &str = "%m/%d/%Y, %I:%M:%S %p";

/// Format used for the window shown in the HTML header.
pub const HEADER_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

const ISO_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("unrecognized timestamp {0:?}")]
    Unrecognized(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WindowError {
    #[error("Error parsing timestamp: {0}")]
    Timestamp(#[from] TimestampError),

    #[error("Error: Start time must be before end time")]
    Reversed,
}

/// Parse and validate the `[start, end]` window. Equal bounds are allowed.
pub fn parse_window<Tz: TimeZone>(
    start: &str,
    end: &str,
    tz: &Tz,
) -> Result<(NaiveDateTime, NaiveDateTime), WindowError> {
    let start = parse_timestamp(start, tz)?;
    let end = parse_timestamp(end, tz)?;
    if start > end {
        return Err(WindowError::Reversed);
    }
    Ok((start, end))
}

/// Parse a timestamp into wall-clock time in `tz`.
pub fn parse_timestamp<Tz: TimeZone>(text: &str, tz: &Tz) -> Result<NaiveDateTime, TimestampError> {
    let trimmed = text.trim();

    if let Some(utc) = trimmed.strip_suffix('Z') {
        if let Some(naive) = parse_iso(utc) {
            return Ok(tz.from_utc_datetime(&naive).naive_local());
        }
    } else if let Some(naive) = parse_iso(trimmed) {
        return Ok(naive);
    }

    NaiveDateTime::parse_from_str(trimmed, DISPLAY_FORMAT)
        .map_err(|_| TimestampError::Unrecognized(text.to_string()))
}

fn parse_iso(text: &str) -> Option<NaiveDateTime> {
    ISO_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
