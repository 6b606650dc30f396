use super::display::{BusyStatus, Notification, Visibility};
use super::event_type::EventType;
use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Canonical calendar event.
///
/// `start`/`end` are local wall-clock timestamps. Serialized with the same
/// camelCase keys used by the persisted event collections (`allDay`,
/// `busyStatus`, `type`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub all_day: bool,
    #[serde(rename = "type", default)]
    pub event_type: EventType,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attendees: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub busy_status: BusyStatus,
    #[serde(default)]
    pub notification: Notification,
}

impl CalendarEvent {
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    pub fn is_zero_duration(&self) -> bool {
        self.start == self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// True when the start day lies inside `[from, to]`.
    pub fn starts_within(&self, from: NaiveDate, to: NaiveDate) -> bool {
        let d = self.start_date();
        d >= from && d <= to
    }

    /// `09:30-10:30`, or `all day`.
    pub fn time_label(&self) -> String {
        if self.all_day {
            "all day".to_string()
        } else if self.is_zero_duration() {
            self.start.format("%H:%M").to_string()
        } else {
            format!("{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
        }
    }

    pub fn start_str(&self) -> String {
        self.start.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%Y-%m-%d %H:%M").to_string()
    }

    /// Enforce the persistence rules: non-empty title, `end >= start`.
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title must not be empty".into()));
        }
        if self.end < self.start {
            return Err(AppError::Validation(format!(
                "end ({}) is before start ({})",
                self.end_str(),
                self.start_str()
            )));
        }
        Ok(())
    }
}

/// Event data collected by the side-panel form, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
    pub event_type: EventType,
    pub location: String,
    pub description: String,
    pub attendees: String,
    pub visibility: Visibility,
    pub busy_status: BusyStatus,
    pub notification: Notification,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            start,
            end,
            all_day: false,
            event_type: EventType::default(),
            location: String::new(),
            description: String::new(),
            attendees: String::new(),
            visibility: Visibility::default(),
            busy_status: BusyStatus::default(),
            notification: Notification::default(),
        }
    }

    pub fn with_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn all_day(mut self) -> Self {
        self.all_day = true;
        self
    }

    pub fn into_event(self, id: String) -> CalendarEvent {
        CalendarEvent {
            id,
            title: self.title.trim().to_string(),
            start: self.start,
            end: self.end,
            all_day: self.all_day,
            event_type: self.event_type,
            location: self.location,
            description: self.description,
            attendees: self.attendees,
            visibility: self.visibility,
            busy_status: self.busy_status,
            notification: self.notification,
        }
    }
}

/// Drop the id: the store assigns a fresh one on `create`.
impl From<CalendarEvent> for EventDraft {
    fn from(ev: CalendarEvent) -> Self {
        Self {
            title: ev.title,
            start: ev.start,
            end: ev.end,
            all_day: ev.all_day,
            event_type: ev.event_type,
            location: ev.location,
            description: ev.description,
            attendees: ev.attendees,
            visibility: ev.visibility,
            busy_status: ev.busy_status,
            notification: ev.notification,
        }
    }
}

/// Partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub all_day: Option<bool>,
    pub event_type: Option<EventType>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub attendees: Option<String>,
    pub visibility: Option<Visibility>,
    pub busy_status: Option<BusyStatus>,
    pub notification: Option<Notification>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        *self == EventPatch::default()
    }

    pub fn apply_to(&self, ev: &mut CalendarEvent) {
        if let Some(v) = &self.title {
            ev.title = v.trim().to_string();
        }
        if let Some(v) = self.start {
            ev.start = v;
        }
        if let Some(v) = self.end {
            ev.end = v;
        }
        if let Some(v) = self.all_day {
            ev.all_day = v;
        }
        if let Some(v) = self.event_type {
            ev.event_type = v;
        }
        if let Some(v) = &self.location {
            ev.location = v.clone();
        }
        if let Some(v) = &self.description {
            ev.description = v.clone();
        }
        if let Some(v) = &self.attendees {
            ev.attendees = v.clone();
        }
        if let Some(v) = self.visibility {
            ev.visibility = v;
        }
        if let Some(v) = self.busy_status {
            ev.busy_status = v;
        }
        if let Some(v) = self.notification {
            ev.notification = v;
        }
    }
}
