use super::repository::EventRepository;
use crate::errors::AppResult;
use crate::models::CalendarEvent;

/// In-memory repository. Keeps the last saved snapshot and counts saves.
#[derive(Debug, Default, Clone)]
pub struct MemoryRepository {
    snapshot: Vec<CalendarEvent>,
    saves: usize,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<CalendarEvent>) -> Self {
        Self {
            snapshot: events,
            saves: 0,
        }
    }

    pub fn snapshot(&self) -> &[CalendarEvent] {
        &self.snapshot
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl EventRepository for MemoryRepository {
    fn load(&self) -> Vec<CalendarEvent> {
        self.snapshot.clone()
    }

    fn save(&mut self, events: &[CalendarEvent]) -> AppResult<()> {
        self.snapshot = events.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
