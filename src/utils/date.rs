use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}

/// Parse a period (used by `list --period` and `export --range`).
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
///
/// `all` is handled by the callers (no bounds).
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = p.trim();

    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidPeriod(format!(
                "start and end must have the same format: {p}"
            )));
        }

        let (from, _) = single_period(start)?;
        let (_, to) = single_period(end)?;

        if to < from {
            return Err(AppError::InvalidPeriod(format!("end before start: {p}")));
        }
        return Ok((from, to));
    }

    single_period(p)
}

fn single_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let bad = || AppError::InvalidPeriod(p.to_string());

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| bad())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(bad)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(bad)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").map_err(|_| bad())?;
            let d2 = crate::calendar::composer::end_of_month(d1);
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(bad)?;
            Ok((d, d))
        }
        _ => Err(bad()),
    }
}

/// Bounds of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date);
    (first, crate::calendar::composer::end_of_month(first))
}
