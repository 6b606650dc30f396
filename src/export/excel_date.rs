// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Excel serial + number format for a stored timestamp (`start`/`end`
/// columns). Midnight timestamps get a date-only format.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    let dt = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").ok()?;
    let serial = naive_datetime_to_excel_serial(&dt)?;

    if dt.time() == NaiveTime::MIN {
        Some(("yyyy-mm-dd", serial))
    } else {
        Some(("yyyy-mm-dd hh:mm", serial))
    }
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_time(NaiveTime::MIN);

    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    Some(days + secs / 86400.0)
}
