use super::composer::{self, compose, visible_bounds};
use super::navigation;
use super::view_mode::{ViewMode, WeekStart};
use crate::models::{CalendarEvent, Capabilities, Role};
use chrono::NaiveDate;

/// What happened after a click on a day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayClick {
    /// The day had events: the session is now in Day view on it.
    OpenedDay(NaiveDate),
    /// Empty day, nothing changes.
    Ignored,
}

/// Navigation state of one calendar screen: anchor + view mode, plus the
/// capabilities of the role that owns the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSession {
    anchor: NaiveDate,
    mode: ViewMode,
    week_start: WeekStart,
    role: Role,
}

impl CalendarSession {
    pub fn new(anchor: NaiveDate, mode: ViewMode, week_start: WeekStart, role: Role) -> Self {
        Self {
            anchor,
            mode,
            week_start,
            role,
        }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn capabilities(&self) -> Capabilities {
        self.role.capabilities()
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn cells(&self) -> Vec<NaiveDate> {
        compose(self.anchor, self.mode, self.week_start)
    }

    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        visible_bounds(self.anchor, self.mode, self.week_start)
    }

    pub fn go_prev(&mut self) {
        self.anchor = navigation::go_prev(self.anchor, self.mode);
    }

    pub fn go_next(&mut self) {
        self.anchor = navigation::go_next(self.anchor, self.mode);
    }

    pub fn go_today(&mut self, today: NaiveDate) {
        self.anchor = navigation::go_today(today);
    }

    pub fn shift(&mut self, steps: i32) {
        self.anchor = navigation::shift(self.anchor, self.mode, steps);
    }

    /// Click on a grid cell. Days with at least one event switch to
    /// Day view; empty days are a no-op.
    pub fn click_day(&mut self, date: NaiveDate, events: &[CalendarEvent]) -> DayClick {
        if events.iter().any(|e| e.start_date() == date) {
            self.anchor = date;
            self.mode = ViewMode::Day;
            DayClick::OpenedDay(date)
        } else {
            DayClick::Ignored
        }
    }

    /// Click on an event chip/block: returns the event for the detail panel.
    pub fn click_event<'a>(&self, id: &str, events: &'a [CalendarEvent]) -> Option<&'a CalendarEvent> {
        events.iter().find(|e| e.id == id)
    }

    /// Heading for the current view ("November 2025", "Week of 2025-11-09", ...).
    pub fn title(&self) -> String {
        match self.mode {
            ViewMode::Day => self.anchor.format("%A %d %B %Y").to_string(),
            ViewMode::Week => {
                let (from, to) = self.bounds();
                format!("Week {} - {}", from.format("%Y-%m-%d"), to.format("%Y-%m-%d"))
            }
            ViewMode::Month => composer::month_title(self.anchor),
            ViewMode::Year => self.anchor.format("%Y").to_string(),
        }
    }
}
