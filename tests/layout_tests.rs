use rschoolcal::calendar::layout::{layout_day, layout_days, place};
use rschoolcal::calendar::HourWindow;

mod common;
use common::{d, event};

const EPS: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

fn window() -> HourWindow {
    HourWindow::new(7, 23).unwrap()
}

#[test]
fn test_block_position_in_window() {
    let ev = event("e1", "Staff meeting", "2025-11-12 09:30", "2025-11-12 10:30");

    let block = place(&ev, d(2025, 11, 12), window()).expect("visible");

    assert!(approx(block.top_pct, 2.5 / 17.0 * 100.0));
    assert!(approx(block.height_pct, 1.0 / 17.0 * 100.0));
    assert!((block.top_pct - 14.7).abs() < 0.01);
    assert!((block.height_pct - 5.88).abs() < 0.01);
    assert!(!block.clipped_top);
    assert!(!block.clipped_bottom);
}

#[test]
fn test_block_clipped_at_window_start() {
    let ev = event("e1", "Early bus", "2025-11-12 06:00", "2025-11-12 08:00");

    let block = place(&ev, d(2025, 11, 12), window()).expect("visible");

    assert!(approx(block.top_pct, 0.0));
    assert!(approx(block.height_pct, 1.0 / 17.0 * 100.0));
    assert!(block.clipped_top);
    assert!(!block.clipped_bottom);
}

#[test]
fn test_block_outside_window_is_dropped() {
    let w = window();
    let before = event("e1", "Gym", "2025-11-12 05:00", "2025-11-12 06:30");
    let touching = event("e2", "Gym", "2025-11-12 05:00", "2025-11-12 07:00");
    let other_day = event("e3", "Gym", "2025-11-13 09:00", "2025-11-13 10:00");

    assert!(place(&before, d(2025, 11, 12), w).is_none());
    assert!(place(&touching, d(2025, 11, 12), w).is_none());
    assert!(place(&other_day, d(2025, 11, 12), w).is_none());
}

#[test]
fn test_late_block_reaches_midnight_unclipped() {
    let ev = event("e1", "Night watch", "2025-11-12 22:00", "2025-11-13 00:00");

    let block = place(&ev, d(2025, 11, 12), window()).expect("visible");

    assert!(approx(block.top_pct, 15.0 / 17.0 * 100.0));
    assert!(approx(block.bottom_pct(), 100.0));
    assert!(!block.clipped_bottom);
}

#[test]
fn test_zero_duration_marker() {
    let ev = event("e1", "Bell", "2025-11-12 12:00", "2025-11-12 12:00");

    let block = place(&ev, d(2025, 11, 12), window()).expect("visible");

    assert!(approx(block.top_pct, 5.0 / 17.0 * 100.0));
    assert!(approx(block.height_pct, 0.0));
}

#[test]
fn test_multi_day_timed_event_spans_both_days() {
    let ev = event("e1", "Overnight trip", "2025-11-12 20:00", "2025-11-13 09:00");
    let w = window();

    let first = place(&ev, d(2025, 11, 12), w).expect("first day");
    assert!(approx(first.top_pct, 13.0 / 17.0 * 100.0));
    assert!(approx(first.height_pct, 4.0 / 17.0 * 100.0));
    assert!(first.clipped_bottom);
    assert!(!first.clipped_top);

    let second = place(&ev, d(2025, 11, 13), w).expect("second day");
    assert!(approx(second.top_pct, 0.0));
    assert!(approx(second.height_pct, 2.0 / 17.0 * 100.0));
    assert!(second.clipped_top);
    assert!(!second.clipped_bottom);
}

#[test]
fn test_all_day_lane() {
    let events = vec![
        event("e1", "Sports week", "2025-11-12 00:00", "2025-11-14 00:00"),
        event("e2", "Staff meeting", "2025-11-12 09:30", "2025-11-12 10:30"),
    ];
    let mut events = events;
    events[0].all_day = true;

    let col = layout_day(d(2025, 11, 13), &events, window());
    assert_eq!(col.all_day.len(), 1);
    assert!(col.blocks.is_empty());

    let col = layout_day(d(2025, 11, 12), &events, window());
    assert_eq!(col.all_day.len(), 1);
    assert_eq!(col.blocks.len(), 1);
    assert_eq!(col.blocks[0].event.id, "e2");

    // all-day events never become blocks
    assert!(place(&events[0], d(2025, 11, 12), window()).is_none());
}

#[test]
fn test_blocks_sorted_top_down() {
    let events = vec![
        event("late", "Club", "2025-11-12 15:00", "2025-11-12 16:00"),
        event("early", "Assembly", "2025-11-12 08:00", "2025-11-12 08:30"),
    ];

    let col = layout_day(d(2025, 11, 12), &events, window());

    let ids: Vec<&str> = col.blocks.iter().map(|b| b.event.id.as_str()).collect();
    assert_eq!(ids, vec!["early", "late"]);
}

#[test]
fn test_week_layout_has_seven_columns() {
    let dates: Vec<_> = (9..=15).map(|day| d(2025, 11, day)).collect();
    let events = vec![event("e1", "Staff meeting", "2025-11-12 09:30", "2025-11-12 10:30")];

    let cols = layout_days(&dates, &events, window());

    assert_eq!(cols.len(), 7);
    assert_eq!(cols[0].date, d(2025, 11, 9));
    let with_blocks: Vec<_> = cols.iter().filter(|c| !c.blocks.is_empty()).collect();
    assert_eq!(with_blocks.len(), 1);
    assert_eq!(with_blocks[0].date, d(2025, 11, 12));
}

#[test]
fn test_hour_window_bounds() {
    assert!(HourWindow::new(8, 7).is_err());
    assert!(HourWindow::new(0, 24).is_err());

    let full = HourWindow::new(0, 23).unwrap();
    assert_eq!(full.hours(), 24);
    assert_eq!(window().hours(), 17);
    assert_eq!(HourWindow::default(), window());
}
