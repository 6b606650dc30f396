use crate::calendar::binner::{events_in_range, sorted};
use crate::models::{CalendarEvent, EventType};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

/// Width of the id column; enough for a unique prefix in practice.
const ID_W: usize = 8;

pub struct ListLogic;

impl ListLogic {
    /// Events starting inside `bounds` (all when `None`), optionally of one
    /// type, sorted by start.
    pub fn select(
        events: &[CalendarEvent],
        bounds: Option<(NaiveDate, NaiveDate)>,
        event_type: Option<EventType>,
    ) -> Vec<&CalendarEvent> {
        let in_range = match bounds {
            Some((from, to)) => events_in_range(events, from, to),
            None => sorted(events),
        };

        in_range
            .into_iter()
            .filter(|e| event_type.is_none_or(|t| e.event_type == t))
            .collect()
    }

    pub fn table(events: &[&CalendarEvent]) -> Table {
        let mut table = Table::new(vec![
            Column::new("ID", ID_W),
            Column::new("DATE", 10),
            Column::new("TIME", 11),
            Column::new("TYPE", 8),
            Column::new("TITLE", 32),
            Column::new("LOCATION", 18),
        ]);

        for ev in events {
            table.add_row(vec![
                ev.id.chars().take(ID_W).collect(),
                ev.start_date().to_string(),
                ev.time_label(),
                ev.event_type.as_str().to_string(),
                ev.title.clone(),
                ev.location.clone(),
            ]);
        }

        table
    }
}
