//! Storage-boundary normalisation.
//!
//! Stored collections come in several shapes: the canonical one with
//! `start`/`end`, older ones with a single `date` (and maybe `time`),
//! numeric ids, attendee arrays, free-text enum labels. Everything is
//! mapped onto `CalendarEvent` here so the rest of the crate sees one shape.

use crate::models::{BusyStatus, CalendarEvent, EventType, Notification, Visibility};
use crate::utils::time::{parse_time, parse_timestamp};
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoredEvent {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    start: Option<String>,
    #[serde(default)]
    end: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    time: Option<String>,
    #[serde(default, alias = "all_day")]
    all_day: Option<bool>,
    #[serde(default, rename = "type", alias = "eventType", alias = "kind")]
    event_type: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    attendees: Option<Value>,
    #[serde(default)]
    visibility: Option<String>,
    #[serde(default, alias = "busy_status", alias = "showAs")]
    busy_status: Option<String>,
    #[serde(default)]
    notification: Option<String>,
}

/// Why a stored record was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Rejected {
    MissingTitle,
    MissingStart,
    /// `end` present but unreadable or before `start` (strict mode only).
    InvalidEnd,
}

impl Rejected {
    pub(crate) fn reason(&self) -> &'static str {
        match self {
            Rejected::MissingTitle => "missing title",
            Rejected::MissingStart => "missing or invalid start",
            Rejected::InvalidEnd => "end is invalid or before start",
        }
    }
}

impl StoredEvent {
    /// Map to the canonical event. `new_id` is used when the record has no id.
    /// A bad `end` collapses onto `start`.
    pub(crate) fn normalize(self, new_id: impl FnOnce() -> String) -> Result<CalendarEvent, Rejected> {
        self.convert(new_id, false)
    }

    /// Same as `normalize`, but a bad `end` rejects the record.
    pub(crate) fn normalize_strict(
        self,
        new_id: impl FnOnce() -> String,
    ) -> Result<CalendarEvent, Rejected> {
        self.convert(new_id, true)
    }

    fn convert(self, new_id: impl FnOnce() -> String, strict: bool) -> Result<CalendarEvent, Rejected> {
        let title = self
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(Rejected::MissingTitle)?;

        let legacy_start = self.date.as_deref().and_then(|d| legacy_timestamp(d, self.time.as_deref()));

        let start = self
            .start
            .as_deref()
            .and_then(parse_timestamp)
            .or(legacy_start)
            .ok_or(Rejected::MissingStart)?;

        // a record with only `date` and no time is an all-day marker
        let date_only = self.start.is_none() && self.time.is_none();
        let all_day = self.all_day.unwrap_or(date_only);

        let end = match self.end.as_deref().map(|e| parse_timestamp(e).filter(|e| *e >= start)) {
            Some(Some(e)) => e,
            Some(None) if strict => return Err(Rejected::InvalidEnd),
            _ => start,
        };

        let id = match self.id {
            Some(Value::String(s)) if !s.trim().is_empty() => s,
            Some(Value::Number(n)) => n.to_string(),
            _ => new_id(),
        };

        Ok(CalendarEvent {
            id,
            title,
            start,
            end,
            all_day,
            event_type: self
                .event_type
                .as_deref()
                .and_then(EventType::parse_lenient)
                .unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            attendees: attendees_to_string(self.attendees),
            visibility: self
                .visibility
                .as_deref()
                .and_then(Visibility::parse_lenient)
                .unwrap_or_default(),
            busy_status: self
                .busy_status
                .as_deref()
                .and_then(BusyStatus::parse_lenient)
                .unwrap_or_default(),
            notification: self
                .notification
                .as_deref()
                .and_then(Notification::parse_lenient)
                .unwrap_or_default(),
        })
    }
}

fn legacy_timestamp(date: &str, time: Option<&str>) -> Option<NaiveDateTime> {
    let base = parse_timestamp(date)?;
    match time.and_then(parse_time) {
        Some(t) => Some(base.date().and_time(t)),
        None => Some(base),
    }
}

fn attendees_to_string(v: Option<Value>) -> String {
    match v {
        Some(Value::String(s)) => s,
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|i| match i {
                Value::String(s) => Some(s.clone()),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}
