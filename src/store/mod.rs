//! Event store: the authoritative collection of one calendar, with CRUD
//! operations persisted through an `EventRepository` after every mutation.
//!
//! Single-writer semantics: there is no versioning or conflict detection.

mod json_file;
mod memory;
mod normalize;
mod repository;
mod sqlite;

pub(crate) use normalize::{Rejected, StoredEvent};

pub use json_file::JsonFileRepository;
pub use memory::MemoryRepository;
pub use repository::EventRepository;
pub use sqlite::SqliteRepository;

use crate::config::{Backend, Config};
use crate::errors::{AppError, AppResult};
use crate::models::{CalendarEvent, EventDraft, EventPatch};
use std::path::Path;
use uuid::Uuid;

/// Minimum length of an id prefix accepted by `resolve_id`.
pub const MIN_ID_PREFIX: usize = 4;

pub fn new_event_id() -> String {
    Uuid::new_v4().to_string()
}

pub struct EventStore<R: EventRepository> {
    repo: R,
    events: Vec<CalendarEvent>,
}

impl<R: EventRepository> EventStore<R> {
    /// Load the collection from `repo`.
    pub fn open(repo: R) -> Self {
        let events = repo.load();
        log::debug!("loaded {} events from {}", events.len(), repo.describe());
        Self { repo, events }
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn get(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Full id for `key`: an exact id, or a unique prefix of at least
    /// `MIN_ID_PREFIX` characters. `Ok(None)` when nothing matches.
    pub fn resolve_id(&self, key: &str) -> AppResult<Option<String>> {
        let key = key.trim();
        if let Some(ev) = self.get(key) {
            return Ok(Some(ev.id.clone()));
        }
        if key.chars().count() < MIN_ID_PREFIX {
            return Ok(None);
        }

        let mut matches = self.events.iter().filter(|e| e.id.starts_with(key));
        match (matches.next(), matches.next()) {
            (Some(ev), None) => Ok(Some(ev.id.clone())),
            (Some(_), Some(_)) => Err(AppError::AmbiguousId(key.to_string())),
            _ => Ok(None),
        }
    }

    /// Validate, assign a new id, append and persist.
    pub fn create(&mut self, draft: EventDraft) -> AppResult<CalendarEvent> {
        let event = draft.into_event(new_event_id());
        event.validate()?;

        let mut next = self.events.clone();
        next.push(event.clone());
        self.commit(next)?;

        log::info!("created event {} ({})", event.id, event.title);
        Ok(event)
    }

    /// `create` for a batch, persisted with a single save. Nothing is
    /// stored when any draft fails validation.
    pub fn create_all(&mut self, drafts: Vec<EventDraft>) -> AppResult<Vec<CalendarEvent>> {
        let created: Vec<CalendarEvent> = drafts
            .into_iter()
            .map(|d| d.into_event(new_event_id()))
            .collect();
        for ev in &created {
            ev.validate()?;
        }

        let mut next = self.events.clone();
        next.extend(created.iter().cloned());
        self.commit(next)?;

        log::info!("created {} events", created.len());
        Ok(created)
    }

    /// Apply `patch` to the event with `id`. Unknown ids are ignored and
    /// reported as `Ok(false)`; the patched event must still validate.
    pub fn update(&mut self, id: &str, patch: &EventPatch) -> AppResult<bool> {
        let Some(idx) = self.events.iter().position(|e| e.id == id) else {
            log::debug!("update ignored, no event with id {}", id);
            return Ok(false);
        };

        let mut next = self.events.clone();
        patch.apply_to(&mut next[idx]);
        next[idx].validate()?;
        self.commit(next)?;

        log::info!("updated event {}", id);
        Ok(true)
    }

    /// Remove the event with `id`. Unknown ids are ignored (`Ok(false)`).
    pub fn delete(&mut self, id: &str) -> AppResult<bool> {
        if !self.events.iter().any(|e| e.id == id) {
            log::debug!("delete ignored, no event with id {}", id);
            return Ok(false);
        }

        let next: Vec<CalendarEvent> = self.events.iter().filter(|e| e.id != id).cloned().collect();
        self.commit(next)?;

        log::info!("deleted event {}", id);
        Ok(true)
    }

    /// Persist first, then swap: a failed save leaves memory untouched.
    fn commit(&mut self, next: Vec<CalendarEvent>) -> AppResult<()> {
        self.repo.save(&next)?;
        self.events = next;
        Ok(())
    }
}

pub type DynEventStore = EventStore<Box<dyn EventRepository>>;

/// Build the repository selected by the configuration.
pub fn open_repository(backend: Backend, path: &Path) -> AppResult<Box<dyn EventRepository>> {
    Ok(match backend {
        Backend::Json => Box::new(JsonFileRepository::new(path)),
        Backend::Sqlite => Box::new(SqliteRepository::open(path)?),
    })
}

/// Open the event store described by `cfg`.
pub fn open_configured(cfg: &Config) -> AppResult<DynEventStore> {
    let repo = open_repository(cfg.backend, &cfg.store_path())?;
    Ok(EventStore::open(repo))
}
