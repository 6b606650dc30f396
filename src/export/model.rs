// src/export/model.rs

use crate::models::CalendarEvent;
use crate::utils::formatting::truncate_to_width;
use crate::utils::time::to_storage;
use serde::Serialize;

/// Flat event record for export. Field names double as CSV headers and
/// are recognised by `import`.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub all_day: bool,
    #[serde(rename = "type")]
    pub event_type: String,
    pub location: String,
    pub description: String,
    pub attendees: String,
    pub visibility: String,
    pub busy_status: String,
    pub notification: String,
}

impl From<&CalendarEvent> for EventExport {
    fn from(ev: &CalendarEvent) -> Self {
        Self {
            id: ev.id.clone(),
            title: ev.title.clone(),
            start: to_storage(&ev.start),
            end: to_storage(&ev.end),
            all_day: ev.all_day,
            event_type: ev.event_type.as_str().to_string(),
            location: ev.location.clone(),
            description: ev.description.clone(),
            attendees: ev.attendees.clone(),
            visibility: ev.visibility.as_str().to_string(),
            busy_status: ev.busy_status.as_str().to_string(),
            notification: ev.notification.as_str().to_string(),
        }
    }
}

/// Header per CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "title",
        "start",
        "end",
        "all_day",
        "type",
        "location",
        "description",
        "attendees",
        "visibility",
        "busy_status",
        "notification",
    ]
}

pub(crate) fn event_to_row(e: &EventExport) -> Vec<String> {
    vec![
        e.id.clone(),
        e.title.clone(),
        e.start.clone(),
        e.end.clone(),
        e.all_day.to_string(),
        e.event_type.clone(),
        e.location.clone(),
        e.description.clone(),
        e.attendees.clone(),
        e.visibility.clone(),
        e.busy_status.clone(),
        e.notification.clone(),
    ]
}

/// The PDF page is too narrow for every column: date, time, type, title
/// and location only.
pub(crate) fn get_pdf_headers() -> Vec<&'static str> {
    vec!["date", "time", "type", "title", "location"]
}

pub(crate) fn events_to_pdf_table(events: &[CalendarEvent]) -> Vec<Vec<String>> {
    events
        .iter()
        .map(|ev| {
            vec![
                ev.start_date().to_string(),
                ev.time_label(),
                ev.event_type.as_str().to_string(),
                truncate_to_width(&ev.title, 40),
                truncate_to_width(&ev.location, 24),
            ]
        })
        .collect()
}
