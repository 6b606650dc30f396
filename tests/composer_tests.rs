use chrono::{Datelike, Weekday};
use rschoolcal::calendar::composer::{compose, end_of_month, month_grid, visible_bounds};
use rschoolcal::calendar::{ViewMode, WeekStart};

mod common;
use common::d;

#[test]
fn test_month_grid_covers_whole_month() {
    // 2025-11-01 is a Saturday: the Sunday-start grid opens on Oct 26
    let cells = compose(d(2025, 11, 12), ViewMode::Month, WeekStart::Sunday);

    assert_eq!(cells.len(), 42);
    assert_eq!(cells[0], d(2025, 10, 26));
    assert_eq!(cells[0].weekday(), Weekday::Sun);
    assert_eq!(*cells.last().unwrap(), d(2025, 12, 6));
    assert_eq!(cells.last().unwrap().weekday(), Weekday::Sat);
    assert!(cells.contains(&d(2025, 11, 1)));
    assert!(cells.contains(&d(2025, 11, 30)));
}

#[test]
fn test_month_grid_five_weeks() {
    let cells = compose(d(2025, 12, 17), ViewMode::Month, WeekStart::Sunday);

    assert_eq!(cells.len(), 35);
    assert_eq!(cells[0], d(2025, 11, 30));
    assert_eq!(*cells.last().unwrap(), d(2026, 1, 3));
}

#[test]
fn test_month_grid_exact_four_weeks() {
    // Feb 2026 starts on a Sunday and ends on a Saturday
    let cells = compose(d(2026, 2, 10), ViewMode::Month, WeekStart::Sunday);

    assert_eq!(cells.len(), 28);
    assert_eq!(cells[0], d(2026, 2, 1));
    assert_eq!(*cells.last().unwrap(), d(2026, 2, 28));
}

#[test]
fn test_month_grid_monday_start() {
    let cells = compose(d(2025, 11, 12), ViewMode::Month, WeekStart::Monday);

    assert_eq!(cells.len(), 35);
    assert_eq!(cells[0], d(2025, 10, 27));
    assert_eq!(*cells.last().unwrap(), d(2025, 11, 30));
}

#[test]
fn test_month_grid_invariants_all_months() {
    for year in 2024..=2026 {
        for month in 1..=12 {
            for ws in [WeekStart::Sunday, WeekStart::Monday] {
                let anchor = d(year, month, 15);
                let cells = month_grid(anchor, ws);

                assert!(
                    [28, 35, 42].contains(&cells.len()),
                    "{year}-{month}: {} cells",
                    cells.len()
                );
                assert_eq!(cells[0].weekday(), ws.weekday());
                assert!(cells.contains(&d(year, month, 1)));
                assert!(cells.contains(&end_of_month(anchor)));

                // contiguous, no duplicates
                for pair in cells.windows(2) {
                    assert_eq!(pair[0].succ_opt(), Some(pair[1]));
                }
            }
        }
    }
}

#[test]
fn test_week_view() {
    let sunday = compose(d(2025, 11, 12), ViewMode::Week, WeekStart::Sunday);
    assert_eq!(sunday.len(), 7);
    assert_eq!(sunday[0], d(2025, 11, 9));
    assert_eq!(sunday[6], d(2025, 11, 15));

    let monday = compose(d(2025, 11, 12), ViewMode::Week, WeekStart::Monday);
    assert_eq!(monday[0], d(2025, 11, 10));
    assert_eq!(monday[6], d(2025, 11, 16));
}

#[test]
fn test_week_view_anchor_on_week_start() {
    let cells = compose(d(2025, 11, 9), ViewMode::Week, WeekStart::Sunday);
    assert_eq!(cells[0], d(2025, 11, 9));
}

#[test]
fn test_day_view() {
    let cells = compose(d(2025, 11, 12), ViewMode::Day, WeekStart::Sunday);
    assert_eq!(cells, vec![d(2025, 11, 12)]);
}

#[test]
fn test_year_view() {
    let cells = compose(d(2025, 11, 12), ViewMode::Year, WeekStart::Sunday);

    assert_eq!(cells.len(), 12);
    for (i, c) in cells.iter().enumerate() {
        assert_eq!(c.year(), 2025);
        assert_eq!(c.month(), i as u32 + 1);
        assert_eq!(c.day(), 1);
    }
}

#[test]
fn test_visible_bounds() {
    let anchor = d(2025, 11, 12);

    assert_eq!(
        visible_bounds(anchor, ViewMode::Year, WeekStart::Sunday),
        (d(2025, 1, 1), d(2025, 12, 31))
    );
    assert_eq!(
        visible_bounds(anchor, ViewMode::Month, WeekStart::Sunday),
        (d(2025, 10, 26), d(2025, 12, 6))
    );
    assert_eq!(
        visible_bounds(anchor, ViewMode::Day, WeekStart::Monday),
        (anchor, anchor)
    );
}

#[test]
fn test_composition_is_idempotent() {
    let anchor = d(2025, 11, 12);
    for mode in [ViewMode::Day, ViewMode::Week, ViewMode::Month, ViewMode::Year] {
        for ws in [WeekStart::Sunday, WeekStart::Monday] {
            assert_eq!(compose(anchor, mode, ws), compose(anchor, mode, ws));
            assert_eq!(visible_bounds(anchor, mode, ws), visible_bounds(anchor, mode, ws));
        }
    }
}

#[test]
fn test_leap_february() {
    let cells = compose(d(2024, 2, 29), ViewMode::Month, WeekStart::Sunday);
    assert!(cells.contains(&d(2024, 2, 29)));
    assert_eq!(end_of_month(d(2024, 2, 3)), d(2024, 2, 29));
    assert_eq!(end_of_month(d(2025, 2, 3)), d(2025, 2, 28));
}
