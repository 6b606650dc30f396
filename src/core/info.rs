use crate::models::{CalendarEvent, EventType};
use crate::store::{EventRepository, EventStore};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW, color_for_event_type, paint};
use crate::utils::formatting::pad_right;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// Aggregate figures about an event collection.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreStats {
    pub total: usize,
    pub all_day: usize,
    pub first: Option<NaiveDate>,
    pub last: Option<NaiveDate>,
    /// Count per type, in `EventType` declaration order, zeros included.
    pub per_type: Vec<(EventType, usize)>,
}

impl StoreStats {
    pub fn compute(events: &[CalendarEvent]) -> Self {
        let per_type = [
            EventType::Meeting,
            EventType::Holiday,
            EventType::Task,
            EventType::Reminder,
            EventType::Other,
        ]
        .into_iter()
        .map(|t| (t, events.iter().filter(|e| e.event_type == t).count()))
        .collect();

        Self {
            total: events.len(),
            all_day: events.iter().filter(|e| e.all_day).count(),
            first: events.iter().map(CalendarEvent::start_date).min(),
            last: events.iter().map(CalendarEvent::start_date).max(),
            per_type,
        }
    }

    /// Events per day over the covered span (at least one day).
    pub fn average_per_day(&self) -> Option<f64> {
        let (first, last) = (self.first?, self.last?);
        let days = (last - first).num_days().max(1);
        Some(self.total as f64 / days as f64)
    }
}

pub struct InfoLogic;

impl InfoLogic {
    pub fn print<R: EventRepository>(store: &EventStore<R>, path: &Path) {
        let stats = StoreStats::compute(store.events());

        println!();

        //
        // 1) LOCATION + SIZE
        //
        let file_size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        let file_kb = file_size as f64 / 1024.0;

        println!(
            "{}• Store:{} {}{}{}",
            CYAN,
            RESET,
            YELLOW,
            store.repository().describe(),
            RESET
        );
        println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

        //
        // 2) TOTALS
        //
        println!(
            "{}• Total events:{} {}{}{} ({} all day)",
            CYAN, RESET, GREEN, stats.total, RESET, stats.all_day
        );

        //
        // 3) DATE RANGE
        //
        let none = || format!("{GREY}--{RESET}");
        println!("{}• Date range:{}", CYAN, RESET);
        println!(
            "    from: {}",
            stats.first.map(|d| d.to_string()).unwrap_or_else(none)
        );
        println!(
            "    to:   {}",
            stats.last.map(|d| d.to_string()).unwrap_or_else(none)
        );

        if let Some(avg) = stats.average_per_day() {
            println!("{}• Average events/day:{} {:.2}", CYAN, RESET, avg);
        }

        //
        // 4) PER TYPE
        //
        println!("{}• By type:{}", CYAN, RESET);
        for (t, n) in &stats.per_type {
            println!(
                "    {} {}",
                paint(color_for_event_type(*t), &pad_right(t.as_str(), 10)),
                n
            );
        }

        println!();
    }
}
