use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Read-only holiday. Only used to tint calendar cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub title: String,
}

/// Fixed-date school holidays, (month, day, title).
const SEED: &[(u32, u32, &str)] = &[
    (1, 1, "New Year's Day"),
    (1, 26, "Republic Day"),
    (5, 1, "Labour Day"),
    (8, 15, "Independence Day"),
    (9, 5, "Teachers' Day"),
    (10, 2, "Gandhi Jayanti"),
    (11, 14, "Children's Day"),
    (12, 25, "Christmas Day"),
];

/// Seeded holidays for one calendar year, in date order.
pub fn seed_holidays(year: i32) -> Vec<Holiday> {
    SEED.iter()
        .filter_map(|(m, d, title)| {
            NaiveDate::from_ymd_opt(year, *m, *d).map(|date| Holiday {
                date,
                title: (*title).to_string(),
            })
        })
        .collect()
}

/// Seeded holidays whose date falls inside `[from, to]`.
pub fn holidays_between(from: NaiveDate, to: NaiveDate) -> Vec<Holiday> {
    if to < from {
        return Vec::new();
    }

    (from.year()..=to.year())
        .flat_map(seed_holidays)
        .filter(|h| h.date >= from && h.date <= to)
        .collect()
}

pub fn holiday_on(holidays: &[Holiday], date: NaiveDate) -> Option<&Holiday> {
    holidays.iter().find(|h| h.date == date)
}
