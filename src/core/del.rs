use crate::db::log::AuditLog;
use crate::errors::{AppError, AppResult};
use crate::models::{CalendarEvent, Role};
use crate::store::{EventRepository, EventStore};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the event matching `key` and return it.
    pub fn apply<R: EventRepository>(
        store: &mut EventStore<R>,
        audit: &AuditLog,
        role: Role,
        key: &str,
    ) -> AppResult<CalendarEvent> {
        role.ensure_can_edit("delete")?;

        let ev = Self::find(store, key)?;

        if !store.delete(&ev.id)? {
            return Err(AppError::EventNotFound(key.to_string()));
        }

        audit.record("del", &ev.id, &format!("{} on {}", ev.title, ev.start_date()));
        Ok(ev)
    }

    /// Event matching `key`, for the confirmation prompt.
    pub fn find<R: EventRepository>(store: &EventStore<R>, key: &str) -> AppResult<CalendarEvent> {
        let id = store
            .resolve_id(key)?
            .ok_or_else(|| AppError::EventNotFound(key.to_string()))?;

        store
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::EventNotFound(key.to_string()))
    }
}
