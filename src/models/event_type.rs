use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Category of a calendar event. Drives colour-coding only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum EventType {
    Meeting,
    Holiday,
    Task,
    Reminder,
    #[default]
    Other,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Meeting => "Meeting",
            EventType::Holiday => "Holiday",
            EventType::Task => "Task",
            EventType::Reminder => "Reminder",
            EventType::Other => "Other",
        }
    }

    /// Lenient parser used at the storage and import boundaries
    /// (case-insensitive, a few aliases).
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "meeting" | "meet" => Some(Self::Meeting),
            "holiday" | "vacation" => Some(Self::Holiday),
            "task" | "todo" => Some(Self::Task),
            "reminder" => Some(Self::Reminder),
            "other" | "" => Some(Self::Other),
            _ => None,
        }
    }

    /// Single-letter tag used in compact month cells.
    pub fn tag(&self) -> char {
        match self {
            EventType::Meeting => 'M',
            EventType::Holiday => 'H',
            EventType::Task => 'T',
            EventType::Reminder => 'R',
            EventType::Other => 'O',
        }
    }
}
