//! Time-axis layout for Day and Week views.
//!
//! Each timed event becomes a block positioned as a percentage of the
//! visible hour window. Blocks are clipped to the window; events with no
//! overlap are dropped. There is no side-by-side placement: simultaneous
//! events share the same column and overlap.

use crate::errors::{AppError, AppResult};
use crate::models::CalendarEvent;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Visible hours, both ends inclusive: `7..=23` covers 07:00 to 24:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourWindow {
    start_hour: u32,
    end_hour: u32,
}

impl Default for HourWindow {
    fn default() -> Self {
        Self {
            start_hour: 7,
            end_hour: 23,
        }
    }
}

impl HourWindow {
    pub fn new(start_hour: u32, end_hour: u32) -> AppResult<Self> {
        if end_hour > 23 || start_hour > end_hour {
            return Err(AppError::Config(format!(
                "invalid hour window {start_hour}-{end_hour} (expected 0 <= start <= end <= 23)"
            )));
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Number of hour slots drawn on the axis.
    pub fn hours(&self) -> u32 {
        self.end_hour - self.start_hour + 1
    }

    /// Absolute window bounds on `date`. The end may be midnight of the next day.
    pub fn bounds_on(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        let midnight = date.and_time(NaiveTime::MIN);
        (
            midnight + Duration::hours(i64::from(self.start_hour)),
            midnight + Duration::hours(i64::from(self.end_hour) + 1),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeBlock<'a> {
    pub event: &'a CalendarEvent,
    /// Offset from the top of the window, 0..=100.
    pub top_pct: f64,
    /// Height, 0..=100. Zero for zero-duration markers.
    pub height_pct: f64,
    /// The event starts before the visible window (or the previous day).
    pub clipped_top: bool,
    /// The event ends after the visible window (or the next day).
    pub clipped_bottom: bool,
}

impl TimeBlock<'_> {
    pub fn bottom_pct(&self) -> f64 {
        self.top_pct + self.height_pct
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn<'a> {
    pub date: NaiveDate,
    /// All-day events covering this date; their times are ignored.
    pub all_day: Vec<&'a CalendarEvent>,
    pub blocks: Vec<TimeBlock<'a>>,
}

/// Position one timed event on `date`, or `None` when it has no overlap.
pub fn place(event: &CalendarEvent, date: NaiveDate, window: HourWindow) -> Option<TimeBlock<'_>> {
    if event.all_day {
        return None;
    }

    let (win_start, win_end) = window.bounds_on(date);
    let total = (win_end - win_start).num_seconds() as f64;

    if event.is_zero_duration() {
        if event.start < win_start || event.start >= win_end {
            return None;
        }
        let top = (event.start - win_start).num_seconds() as f64 / total * 100.0;
        return Some(TimeBlock {
            event,
            top_pct: top,
            height_pct: 0.0,
            clipped_top: false,
            clipped_bottom: false,
        });
    }

    let start = event.start.max(win_start);
    let end = event.end.min(win_end);
    if end <= start {
        return None;
    }

    Some(TimeBlock {
        event,
        top_pct: (start - win_start).num_seconds() as f64 / total * 100.0,
        height_pct: (end - start).num_seconds() as f64 / total * 100.0,
        clipped_top: event.start < win_start,
        clipped_bottom: event.end > win_end,
    })
}

fn covers_day(event: &CalendarEvent, date: NaiveDate) -> bool {
    event.start_date() <= date && event.end_date() >= date
}

/// Lay out one day.
pub fn layout_day<'a>(date: NaiveDate, events: &'a [CalendarEvent], window: HourWindow) -> DayColumn<'a> {
    let mut all_day: Vec<&CalendarEvent> = Vec::new();
    let mut blocks: Vec<TimeBlock<'a>> = Vec::new();

    for ev in events {
        if ev.all_day {
            if covers_day(ev, date) {
                all_day.push(ev);
            }
        } else if let Some(block) = place(ev, date, window) {
            blocks.push(block);
        }
    }

    all_day.sort_by(|a, b| a.title.cmp(&b.title));
    blocks.sort_by(|a, b| {
        a.top_pct
            .total_cmp(&b.top_pct)
            .then_with(|| a.event.title.cmp(&b.event.title))
    });

    DayColumn {
        date,
        all_day,
        blocks,
    }
}

/// Lay out every date of a Day or Week composition.
pub fn layout_days<'a>(
    dates: &[NaiveDate],
    events: &'a [CalendarEvent],
    window: HourWindow,
) -> Vec<DayColumn<'a>> {
    dates
        .iter()
        .map(|&d| layout_day(d, events, window))
        .collect()
}
