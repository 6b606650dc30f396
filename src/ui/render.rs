//! Terminal rendering of the calendar views.
//!
//! Renderers return a `String` so commands print it and tests inspect it.
//! Cells are fitted to their width *before* colouring, so ANSI codes never
//! break the column alignment.

use crate::calendar::binner::{DayCell, weeks};
use crate::calendar::layout::{DayColumn, HourWindow, TimeBlock};
use crate::calendar::view_mode::WeekStart;
use crate::models::{CalendarEvent, Holiday};
use crate::utils::colors::{BOLD, GREY, RED, RESET, REVERSE, color_for_event_type, paint};
use crate::utils::formatting::{fit, pad_left};
use chrono::{Datelike, NaiveDate};

const MONTH_CELL_W: usize = 15;
const WEEK_CELL_W: usize = 15;
const MINI_CELL_W: usize = 3;
const MINI_GAP: &str = "    ";
const MINI_PER_ROW: usize = 3;
/// Rows per hour on the Day view axis (30-minute resolution).
const DAY_ROWS_PER_HOUR: u32 = 2;
/// Absorbs float noise when mapping percentages back onto rows.
const EPS: f64 = 1e-9;

fn chip_label(ev: &CalendarEvent) -> String {
    if ev.all_day {
        format!("{} {}", ev.event_type.tag(), ev.title)
    } else {
        format!("{} {}", ev.start.format("%H:%M"), ev.title)
    }
}

fn paint_chip(ev: &CalendarEvent, width: usize) -> String {
    paint(color_for_event_type(ev.event_type), &fit(&chip_label(ev), width))
}

fn day_number_style(cell: &DayCell<'_>) -> String {
    let mut style = String::new();
    if !cell.in_month {
        style.push_str(GREY);
    } else if cell.holiday.is_some() {
        style.push_str(RED);
    }
    if cell.is_today {
        style.push_str(REVERSE);
    }
    if cell.has_events() && cell.in_month {
        style.push_str(BOLD);
    }
    style
}

fn weekday_header(week_start: WeekStart, width: usize) -> String {
    week_start
        .weekday_labels()
        .iter()
        .map(|l| fit(l, width))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Month grid: one block of lines per week row.
pub fn render_month(title: &str, cells: &[DayCell<'_>], week_start: WeekStart) -> String {
    let w = MONTH_CELL_W;
    let mut out = String::new();

    out.push_str(&format!("{BOLD}{title}{RESET}\n"));
    out.push_str(&weekday_header(week_start, w));
    out.push('\n');
    let rule = "-".repeat(w * 7 + 6);
    out.push_str(&rule);
    out.push('\n');

    for week in weeks(cells) {
        // day numbers
        let line: Vec<String> = week
            .iter()
            .map(|c| {
                let num = fit(&format!("{:>2}", c.date.day()), w);
                paint(&day_number_style(c), &num)
            })
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');

        // holiday tint
        if week.iter().any(|c| c.holiday.is_some()) {
            let line: Vec<String> = week
                .iter()
                .map(|c| match c.holiday {
                    Some(h) => paint(RED, &fit(&h.title, w)),
                    None => " ".repeat(w),
                })
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }

        // chips
        let rows = week.iter().map(|c| c.events.len()).max().unwrap_or(0);
        for i in 0..rows {
            let line: Vec<String> = week
                .iter()
                .map(|c| match c.events.get(i) {
                    Some(ev) => paint_chip(ev, w),
                    None => " ".repeat(w),
                })
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }

        // overflow counters
        if week.iter().any(|c| c.overflow > 0) {
            let line: Vec<String> = week
                .iter()
                .map(|c| match c.overflow_label() {
                    Some(label) => paint(GREY, &fit(&label, w)),
                    None => " ".repeat(w),
                })
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }

        out.push_str(&rule);
        out.push('\n');
    }

    out
}

/// Twelve mini month grids, three per row. Days with events carry a `*`.
pub fn render_year(year: i32, months: &[Vec<DayCell<'_>>], week_start: WeekStart) -> String {
    let mini_w = MINI_CELL_W * 7;
    let mut out = format!("{BOLD}{year}{RESET}\n\n");

    for chunk in months.chunks(MINI_PER_ROW) {
        let blocks: Vec<Vec<String>> = chunk.iter().map(|m| mini_month(m, week_start)).collect();
        let height = blocks.iter().map(Vec::len).max().unwrap_or(0);

        for row in 0..height {
            let line: Vec<String> = blocks
                .iter()
                .map(|b| b.get(row).cloned().unwrap_or_else(|| " ".repeat(mini_w)))
                .collect();
            out.push_str(line.join(MINI_GAP).trim_end());
            out.push('\n');
        }
        out.push('\n');
    }

    out
}

fn mini_month(cells: &[DayCell<'_>], week_start: WeekStart) -> Vec<String> {
    let mini_w = MINI_CELL_W * 7;
    let mut lines = Vec::new();

    let title = cells
        .iter()
        .find(|c| c.in_month)
        .map(|c| c.date.format("%B").to_string())
        .unwrap_or_default();
    lines.push(paint(BOLD, &fit(&title, mini_w)));

    let header: String = week_start
        .weekday_labels()
        .iter()
        .map(|l| fit(&l[..2], MINI_CELL_W))
        .collect();
    lines.push(header);

    for week in weeks(cells) {
        let line: String = week
            .iter()
            .map(|c| {
                if !c.in_month {
                    return " ".repeat(MINI_CELL_W);
                }
                let mark = if c.has_events() { "*" } else { " " };
                let text = format!("{:>2}{}", c.date.day(), mark);
                paint(&day_number_style(c), &text)
            })
            .collect();
        lines.push(line);
    }

    // a fixed 6 week rows keeps the three months of a band aligned
    while lines.len() < 8 {
        lines.push(" ".repeat(mini_w));
    }
    lines
}

/// Row span `[first, last)` of a block on an axis of `total_rows`.
pub fn block_rows(block: &TimeBlock<'_>, total_rows: usize) -> (usize, usize) {
    let t = total_rows as f64;
    let first = ((block.top_pct / 100.0) * t + EPS).floor() as usize;
    let first = first.min(total_rows.saturating_sub(1));
    let last = ((block.bottom_pct() / 100.0) * t - EPS).ceil() as usize;
    (first, last.clamp(first + 1, total_rows))
}

fn block_label(block: &TimeBlock<'_>) -> String {
    let ev = block.event;
    let mut label = format!("{} ({})", ev.title, ev.time_label());
    if block.clipped_top {
        label.insert_str(0, "↑ ");
    }
    if block.clipped_bottom {
        label.push_str(" ↓");
    }
    label
}

fn all_day_lines(date: NaiveDate, column: &DayColumn<'_>, holidays: &[Holiday]) -> Vec<String> {
    let mut lines = Vec::new();
    for h in holidays.iter().filter(|h| h.date == date) {
        lines.push(paint(RED, &format!("Holiday: {}", h.title)));
    }
    for ev in &column.all_day {
        lines.push(paint(
            color_for_event_type(ev.event_type),
            &format!("All day: {} [{}]", ev.title, ev.event_type.as_str()),
        ));
    }
    lines
}

/// Day view: all-day lane, then a 30-minute time axis.
pub fn render_day(title: &str, column: &DayColumn<'_>, window: HourWindow, holidays: &[Holiday]) -> String {
    let mut out = format!("{BOLD}{title}{RESET}\n");

    for line in all_day_lines(column.date, column, holidays) {
        out.push_str(&line);
        out.push('\n');
    }

    let total_rows = (window.hours() * DAY_ROWS_PER_HOUR) as usize;
    let spans: Vec<(usize, usize)> = column
        .blocks
        .iter()
        .map(|b| block_rows(b, total_rows))
        .collect();

    for row in 0..total_rows {
        let minutes = row as u32 * (60 / DAY_ROWS_PER_HOUR);
        let hour = window.start_hour() + minutes / 60;
        let label = format!("{:02}:{:02}", hour, minutes % 60);

        let mut parts: Vec<String> = Vec::new();
        for (block, (first, last)) in column.blocks.iter().zip(&spans) {
            if row == *first {
                parts.push(paint(
                    color_for_event_type(block.event.event_type),
                    &format!("▌ {}", block_label(block)),
                ));
            } else if row > *first && row < *last {
                parts.push(paint(color_for_event_type(block.event.event_type), "▌"));
            }
        }

        let label = if minutes % 60 == 0 {
            label
        } else {
            paint(GREY, &label)
        };
        out.push_str(format!("{label} │ {}", parts.join("  ")).trim_end());
        out.push('\n');
    }

    if column.blocks.is_empty() && column.all_day.is_empty() {
        out.push_str(&paint(GREY, "No events in the visible hours."));
        out.push('\n');
    }

    out
}

/// Week view: seven columns on an hourly axis.
pub fn render_week(title: &str, columns: &[DayColumn<'_>], window: HourWindow, holidays: &[Holiday]) -> String {
    let w = WEEK_CELL_W;
    let mut out = format!("{BOLD}{title}{RESET}\n");

    let header: Vec<String> = columns
        .iter()
        .map(|c| {
            let text = fit(&c.date.format("%a %d").to_string(), w);
            if holidays.iter().any(|h| h.date == c.date) {
                paint(RED, &text)
            } else {
                text
            }
        })
        .collect();
    out.push_str(&format!("{}   {}\n", " ".repeat(5), header.join(" ")));

    // all-day lane
    let lane = columns.iter().map(|c| c.all_day.len()).max().unwrap_or(0);
    for i in 0..lane {
        let line: Vec<String> = columns
            .iter()
            .map(|c| match c.all_day.get(i) {
                Some(ev) => paint_chip(ev, w),
                None => " ".repeat(w),
            })
            .collect();
        out.push_str(&format!("{}   {}\n", pad_left("all", 5), line.join(" ")));
    }

    let total_rows = window.hours() as usize;
    let spans: Vec<Vec<(usize, usize)>> = columns
        .iter()
        .map(|c| c.blocks.iter().map(|b| block_rows(b, total_rows)).collect())
        .collect();

    for row in 0..total_rows {
        let hour = window.start_hour() + row as u32;
        let cells: Vec<String> = columns
            .iter()
            .zip(&spans)
            .map(|(col, col_spans)| {
                let starting = col
                    .blocks
                    .iter()
                    .zip(col_spans)
                    .find(|(_, (first, _))| *first == row);
                if let Some((block, _)) = starting {
                    return paint(
                        color_for_event_type(block.event.event_type),
                        &fit(&format!("▌{}", block.event.title), w),
                    );
                }
                let running = col
                    .blocks
                    .iter()
                    .zip(col_spans)
                    .find(|(_, (first, last))| row > *first && row < *last);
                match running {
                    Some((block, _)) => paint(color_for_event_type(block.event.event_type), &fit("▌", w)),
                    None => " ".repeat(w),
                }
            })
            .collect();
        out.push_str(format!("{:02}:00 │ {}", hour, cells.join(" ")).trim_end());
        out.push('\n');
    }

    out
}
