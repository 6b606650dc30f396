//! Grid-view event binning (Month and the Year mini-grids).
//!
//! Events are grouped by the date portion of `start` only. A cell keeps at
//! most `max_chips` events; the rest become the "+N more" counter.

use crate::models::holiday::holiday_on;
use crate::models::{CalendarEvent, Holiday};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

pub const DEFAULT_MAX_CHIPS: usize = 3;

/// Per-render inputs that are not part of the composed range.
#[derive(Debug, Clone, Copy)]
pub struct BinContext<'a> {
    pub holidays: &'a [Holiday],
    pub today: NaiveDate,
    pub max_chips: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    /// False for adjacent-month filler days.
    pub in_month: bool,
    pub is_today: bool,
    pub holiday: Option<&'a Holiday>,
    /// Visible chips, at most `max_chips`.
    pub events: Vec<&'a CalendarEvent>,
    /// Events that did not fit.
    pub overflow: usize,
}

impl DayCell<'_> {
    pub fn total_events(&self) -> usize {
        self.events.len() + self.overflow
    }

    pub fn has_events(&self) -> bool {
        self.total_events() > 0
    }

    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{} more", self.overflow))
    }
}

/// Events sorted by start, then title.
pub fn sorted<'a>(events: impl IntoIterator<Item = &'a CalendarEvent>) -> Vec<&'a CalendarEvent> {
    let mut out: Vec<&CalendarEvent> = events.into_iter().collect();
    out.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.title.cmp(&b.title)));
    out
}

/// Group by start day. Days without events are absent.
pub fn group_by_start_day(events: &[CalendarEvent]) -> BTreeMap<NaiveDate, Vec<&CalendarEvent>> {
    let mut map: BTreeMap<NaiveDate, Vec<&CalendarEvent>> = BTreeMap::new();
    for ev in sorted(events) {
        map.entry(ev.start_date()).or_default().push(ev);
    }
    map
}

/// Events whose start day falls in `[from, to]`, sorted.
pub fn events_in_range(events: &[CalendarEvent], from: NaiveDate, to: NaiveDate) -> Vec<&CalendarEvent> {
    sorted(events.iter().filter(|e| e.starts_within(from, to)))
}

/// Bind events to the cells of a grid.
///
/// `month` is the (year, month) the grid belongs to; cells outside it are
/// flagged as fillers. Events starting outside the grid bind to nothing.
pub fn bin_grid<'a>(
    dates: &[NaiveDate],
    month: (i32, u32),
    events: &'a [CalendarEvent],
    ctx: BinContext<'a>,
) -> Vec<DayCell<'a>> {
    let by_day = group_by_start_day(events);

    dates
        .iter()
        .map(|&date| {
            let mut day_events = by_day.get(&date).cloned().unwrap_or_default();
            let overflow = day_events.len().saturating_sub(ctx.max_chips);
            day_events.truncate(ctx.max_chips);

            DayCell {
                date,
                in_month: (date.year(), date.month()) == month,
                is_today: date == ctx.today,
                holiday: holiday_on(ctx.holidays, date),
                events: day_events,
                overflow,
            }
        })
        .collect()
}

/// Split grid cells into rows of 7.
pub fn weeks<'c, 'a>(cells: &'c [DayCell<'a>]) -> impl Iterator<Item = &'c [DayCell<'a>]> {
    cells.chunks(7)
}
