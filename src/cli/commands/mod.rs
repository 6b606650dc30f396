//! One handler per subcommand. Handlers parse arguments, open what they
//! need and hand over to the `core` logic.

pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod holidays;
pub mod import;
pub mod info;
pub mod init;
pub mod list;
pub mod log;
pub mod open;
pub mod show;
pub mod view;

use crate::cli::parser::EventFields;
use crate::config::Config;
use crate::db::log::AuditLog;
use crate::models::{EventDraft, EventPatch};

pub(crate) fn open_audit(cfg: &Config) -> AuditLog {
    AuditLog::open(&cfg.audit_path())
}

/// Copy the optional fields given on the command line into a draft.
pub(crate) fn apply_fields(draft: &mut EventDraft, fields: &EventFields) {
    if let Some(t) = fields.event_type {
        draft.event_type = t;
    }
    if let Some(v) = &fields.location {
        draft.location = v.clone();
    }
    if let Some(v) = &fields.description {
        draft.description = v.clone();
    }
    if let Some(v) = &fields.attendees {
        draft.attendees = v.clone();
    }
    if let Some(v) = fields.visibility {
        draft.visibility = v;
    }
    if let Some(v) = fields.busy_status {
        draft.busy_status = v;
    }
    if let Some(v) = fields.notification {
        draft.notification = v;
    }
}

/// Same fields as a partial update.
pub(crate) fn fields_patch(fields: &EventFields) -> EventPatch {
    EventPatch {
        event_type: fields.event_type,
        location: fields.location.clone(),
        description: fields.description.clone(),
        attendees: fields.attendees.clone(),
        visibility: fields.visibility,
        busy_status: fields.busy_status,
        notification: fields.notification,
        ..EventPatch::default()
    }
}
