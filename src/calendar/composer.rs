//! Date-range composition.
//!
//! Everything here is a pure function of `(anchor, mode, week_start)`:
//! no I/O, no clock, no hidden state.

use super::view_mode::{ViewMode, WeekStart};
use chrono::{Datelike, Days, Months, NaiveDate};

/// Ordered cells to render for `(anchor, mode)`.
///
/// - Day   → `[anchor]`
/// - Week  → the 7 days of the week containing `anchor`
/// - Month → complete weeks covering the anchor's month
/// - Year  → the 12 first-of-month dates of the anchor's year
pub fn compose(anchor: NaiveDate, mode: ViewMode, week_start: WeekStart) -> Vec<NaiveDate> {
    match mode {
        ViewMode::Day => vec![anchor],
        ViewMode::Week => week_days(anchor, week_start),
        ViewMode::Month => month_grid(anchor, week_start),
        ViewMode::Year => year_months(anchor.year()),
    }
}

/// First and last calendar day covered by the view.
///
/// For Year this is Jan 1 … Dec 31; the filler days of the twelve
/// sub-grids are not part of the year's range.
pub fn visible_bounds(
    anchor: NaiveDate,
    mode: ViewMode,
    week_start: WeekStart,
) -> (NaiveDate, NaiveDate) {
    match mode {
        ViewMode::Day => (anchor, anchor),
        ViewMode::Week => (
            start_of_week(anchor, week_start),
            end_of_week(anchor, week_start),
        ),
        ViewMode::Month => (
            start_of_week(start_of_month(anchor), week_start),
            end_of_week(end_of_month(anchor), week_start),
        ),
        ViewMode::Year => {
            let y = anchor.year();
            (
                NaiveDate::from_ymd_opt(y, 1, 1).unwrap_or(anchor),
                NaiveDate::from_ymd_opt(y, 12, 31).unwrap_or(anchor),
            )
        }
    }
}

pub fn start_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let back = week_start.offset_of(date.weekday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

pub fn end_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let start = start_of_week(date, week_start);
    start.checked_add_days(Days::new(6)).unwrap_or(start)
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let first = start_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// The 7 contiguous dates of the week containing `date`.
pub fn week_days(date: NaiveDate, week_start: WeekStart) -> Vec<NaiveDate> {
    start_of_week(date, week_start).iter_days().take(7).collect()
}

/// start-of-week(start-of-month) … end-of-week(end-of-month).
///
/// Always a multiple of 7 cells; adjacent-month filler days included.
pub fn month_grid(date: NaiveDate, week_start: WeekStart) -> Vec<NaiveDate> {
    let first = start_of_week(start_of_month(date), week_start);
    let last = end_of_week(end_of_month(date), week_start);
    first.iter_days().take_while(|d| *d <= last).collect()
}

pub fn year_months(year: i32) -> Vec<NaiveDate> {
    (1..=12)
        .filter_map(|m| NaiveDate::from_ymd_opt(year, m, 1))
        .collect()
}

pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
