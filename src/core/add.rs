use crate::db::log::AuditLog;
use crate::errors::AppResult;
use crate::models::{CalendarEvent, EventDraft, Role};
use crate::store::{EventRepository, EventStore};
use crate::ui::messages::success;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply<R: EventRepository>(
        store: &mut EventStore<R>,
        audit: &AuditLog,
        role: Role,
        draft: EventDraft,
    ) -> AppResult<CalendarEvent> {
        role.ensure_can_create()?;

        let ev = store.create(draft)?;

        audit.record(
            "add",
            &ev.id,
            &format!("{} on {} ({})", ev.title, ev.start_date(), ev.time_label()),
        );
        success(format!(
            "Added '{}' on {} ({}) [id {}]",
            ev.title,
            ev.start_date(),
            ev.time_label(),
            ev.id
        ));

        Ok(ev)
    }
}
