use crate::db::log::AuditLog;
use crate::errors::{AppError, AppResult};
use crate::models::{CalendarEvent, EventPatch, Role};
use crate::store::{EventRepository, EventStore};
use crate::ui::messages::{info, success};

pub struct EditLogic;

impl EditLogic {
    /// Update the event matching `key` (full id or unique prefix).
    pub fn apply<R: EventRepository>(
        store: &mut EventStore<R>,
        audit: &AuditLog,
        role: Role,
        key: &str,
        patch: &EventPatch,
    ) -> AppResult<CalendarEvent> {
        role.ensure_can_edit("edit")?;

        let id = store
            .resolve_id(key)?
            .ok_or_else(|| AppError::EventNotFound(key.to_string()))?;

        if patch.is_empty() {
            info("Nothing to change.");
        } else if !store.update(&id, patch)? {
            return Err(AppError::EventNotFound(key.to_string()));
        }

        let ev = store
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::EventNotFound(key.to_string()))?;

        if !patch.is_empty() {
            audit.record("edit", &ev.id, &format!("{} ({})", ev.title, ev.time_label()));
            success(format!("Updated '{}' [id {}]", ev.title, ev.id));
        }

        Ok(ev)
    }
}
