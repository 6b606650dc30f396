use super::normalize::StoredEvent;
use super::repository::EventRepository;
use super::new_event_id;
use crate::errors::AppResult;
use crate::models::CalendarEvent;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Event collection stored as one JSON array, rewritten on every save.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a JSON document into events. Anything that is not an array of
    /// objects yields an empty collection; single bad records are skipped.
    pub fn parse(content: &str) -> Vec<CalendarEvent> {
        if content.trim().is_empty() {
            return Vec::new();
        }

        let records: Vec<StoredEvent> = match serde_json::from_str(content) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("event store is corrupt, starting from an empty collection: {}", e);
                return Vec::new();
            }
        };

        let mut out: Vec<CalendarEvent> = Vec::with_capacity(records.len());
        let mut seen: HashSet<String> = HashSet::new();
        for (idx, rec) in records.into_iter().enumerate() {
            match rec.normalize(new_event_id) {
                Ok(mut ev) => {
                    // ids must stay unique: later duplicates get a fresh one
                    if !seen.insert(ev.id.clone()) {
                        let fresh = new_event_id();
                        log::warn!("stored event #{}: duplicate id {}, reassigned {}", idx, ev.id, fresh);
                        ev.id = fresh.clone();
                        seen.insert(fresh);
                    }
                    out.push(ev);
                }
                Err(r) => log::warn!("skipping stored event #{}: {}", idx, r.reason()),
            }
        }
        out
    }
}

impl EventRepository for JsonFileRepository {
    fn load(&self) -> Vec<CalendarEvent> {
        if !self.path.exists() {
            log::debug!("no event store at {}, starting empty", self.path.display());
            return Vec::new();
        }

        match fs::read_to_string(&self.path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                log::warn!("cannot read event store {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    fn save(&mut self, events: &[CalendarEvent]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(events)?;
        fs::write(&self.path, json)?;
        log::debug!("saved {} events to {}", events.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }
}
