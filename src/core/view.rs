use crate::calendar::binner::{BinContext, DayCell, bin_grid};
use crate::calendar::composer::month_grid;
use crate::calendar::layout::{HourWindow, layout_day, layout_days};
use crate::calendar::{CalendarSession, ViewMode};
use crate::models::CalendarEvent;
use crate::models::holiday::holidays_between;
use crate::ui::render::{render_day, render_month, render_week, render_year};
use chrono::{Datelike, NaiveDate};

/// Composes, bins and renders the current view of a session.
pub struct ViewLogic;

impl ViewLogic {
    pub fn render(
        session: &CalendarSession,
        events: &[CalendarEvent],
        window: HourWindow,
        max_chips: usize,
        today: NaiveDate,
    ) -> String {
        let anchor = session.anchor();
        let week_start = session.week_start();
        let (from, to) = session.bounds();
        let holidays = holidays_between(from, to);

        let ctx = BinContext {
            holidays: &holidays,
            today,
            max_chips,
        };

        match session.mode() {
            ViewMode::Month => {
                let cells = bin_grid(&session.cells(), (anchor.year(), anchor.month()), events, ctx);
                render_month(&session.title(), &cells, week_start)
            }
            ViewMode::Year => {
                let months: Vec<Vec<DayCell<'_>>> = session
                    .cells()
                    .into_iter()
                    .map(|m| bin_grid(&month_grid(m, week_start), (m.year(), m.month()), events, ctx))
                    .collect();
                render_year(anchor.year(), &months, week_start)
            }
            ViewMode::Week => {
                let columns = layout_days(&session.cells(), events, window);
                render_week(&session.title(), &columns, window, &holidays)
            }
            ViewMode::Day => {
                let column = layout_day(anchor, events, window);
                render_day(&session.title(), &column, window, &holidays)
            }
        }
    }
}
