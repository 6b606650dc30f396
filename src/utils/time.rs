//! Timestamp utilities: parsing CLI and stored timestamps, formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t.trim(), "%H:%M:%S"))
        .ok()
}

/// Parse any timestamp shape found in stored collections or typed on the
/// command line:
/// - RFC 3339 with offset (`2025-11-12T04:00:00.000Z`), converted to local time
/// - naive `YYYY-MM-DDTHH:MM[:SS[.fff]]` or `YYYY-MM-DD HH:MM[:SS]`
/// - bare `YYYY-MM-DD` (midnight)
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    for fmt in DATETIME_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Same as `parse_timestamp`, with an error naming the bad input.
pub fn parse_cli_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    parse_timestamp(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

pub fn parse_optional_timestamp(input: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    input.map(|s| parse_cli_timestamp(s)).transpose()
}

/// ISO-8601 form written to storage.
pub fn to_storage(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}
