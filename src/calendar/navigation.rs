use super::view_mode::ViewMode;
use chrono::{Days, Months, NaiveDate};

/// Move the anchor by `steps` units of the view's granularity
/// (negative = backwards).
///
/// Day → 1 day, Week → 7 days, Month → 1 month, Year → 12 months.
/// Month arithmetic clamps to the last valid day (Jan 31 + 1 month = Feb 28/29).
pub fn shift(anchor: NaiveDate, mode: ViewMode, steps: i32) -> NaiveDate {
    if steps == 0 {
        return anchor;
    }

    let n = steps.unsigned_abs();
    let forward = steps > 0;

    let moved = match mode {
        ViewMode::Day | ViewMode::Week => {
            let unit = if mode == ViewMode::Day { 1 } else { 7 };
            let days = Days::new(u64::from(n) * unit);
            if forward {
                anchor.checked_add_days(days)
            } else {
                anchor.checked_sub_days(days)
            }
        }
        ViewMode::Month | ViewMode::Year => {
            let unit = if mode == ViewMode::Month { 1 } else { 12 };
            let months = Months::new(n.saturating_mul(unit));
            if forward {
                anchor.checked_add_months(months)
            } else {
                anchor.checked_sub_months(months)
            }
        }
    };

    moved.unwrap_or(anchor)
}

pub fn go_prev(anchor: NaiveDate, mode: ViewMode) -> NaiveDate {
    shift(anchor, mode, -1)
}

pub fn go_next(anchor: NaiveDate, mode: ViewMode) -> NaiveDate {
    shift(anchor, mode, 1)
}

/// Anchor on `today`, whatever the current anchor is. The view mode is kept
/// by the caller.
pub fn go_today(today: NaiveDate) -> NaiveDate {
    today
}
