use crate::errors::AppResult;
use crate::models::CalendarEvent;

/// Backing store for an event collection.
///
/// The collection is always read and written as a whole: `save` replaces
/// everything previously stored.
pub trait EventRepository {
    /// Load the stored collection. Missing or unreadable storage yields an
    /// empty collection; implementations log the problem instead of failing.
    fn load(&self) -> Vec<CalendarEvent>;

    /// Overwrite the stored collection.
    fn save(&mut self, events: &[CalendarEvent]) -> AppResult<()>;

    /// Human readable location ("json:/path/events.json").
    fn describe(&self) -> String;
}

impl<R: EventRepository + ?Sized> EventRepository for Box<R> {
    fn load(&self) -> Vec<CalendarEvent> {
        (**self).load()
    }

    fn save(&mut self, events: &[CalendarEvent]) -> AppResult<()> {
        (**self).save(events)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
