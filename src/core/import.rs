//! CSV import.
//!
//! Columns are matched by header name (case-insensitive, with aliases), so
//! files exported by other tools load as long as their headers are
//! recognisable. Unknown columns are ignored. Each row goes through the same
//! normalisation as stored records, then through `EventStore::create_all`.

use crate::db::log::AuditLog;
use crate::errors::{AppError, AppResult};
use crate::models::{EventDraft, Role};
use crate::store::{EventRepository, EventStore, StoredEvent};
use crate::ui::messages::{info, success, warning};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;

/// Canonical record key for a CSV header, if recognised.
fn canonical_key(header: &str) -> Option<&'static str> {
    let h: String = header
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .collect();

    Some(match h.as_str() {
        "title" | "name" | "subject" | "event" => "title",
        "start" | "from" | "begin" | "starts" | "startdate" | "starttime" | "datetime" => "start",
        "end" | "to" | "until" | "ends" | "enddate" | "endtime" => "end",
        "date" | "day" => "date",
        "time" => "time",
        "allday" | "wholeday" => "allDay",
        "type" | "eventtype" | "kind" | "category" => "type",
        "location" | "place" | "venue" | "room" => "location",
        "description" | "notes" | "details" => "description",
        "attendees" | "participants" | "guests" => "attendees",
        "visibility" => "visibility",
        "busystatus" | "busy" | "showas" => "busyStatus",
        "notification" | "notify" | "reminder" => "notification",
        _ => return None,
    })
}

fn parse_flag(s: &str) -> bool {
    matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "y" | "1" | "x")
}

/// Outcome of an import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    /// (CSV line, reason)
    pub skipped: Vec<(usize, String)>,
}

pub struct ImportLogic;

impl ImportLogic {
    /// Parse CSV content into drafts. Rows that cannot become an event are
    /// reported in the second vector and left out.
    pub fn parse<RD: Read>(reader: RD) -> AppResult<(Vec<EventDraft>, Vec<(usize, String)>)> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let columns: Vec<Option<&'static str>> = rdr.headers()?.iter().map(canonical_key).collect();

        if !columns.contains(&Some("title")) {
            return Err(AppError::Import("no title column found in CSV header".into()));
        }
        if !columns.iter().any(|c| matches!(c, Some("start") | Some("date"))) {
            return Err(AppError::Import("no start/date column found in CSV header".into()));
        }

        let mut drafts = Vec::new();
        let mut skipped = Vec::new();

        for (idx, record) in rdr.records().enumerate() {
            // header is line 1
            let line = idx + 2;

            let record = match record {
                Ok(r) => r,
                Err(e) => {
                    skipped.push((line, e.to_string()));
                    continue;
                }
            };

            let mut map = Map::new();
            for (key, value) in columns.iter().zip(record.iter()) {
                let Some(key) = key else { continue };
                if value.is_empty() || map.contains_key(*key) {
                    continue;
                }
                let v = if *key == "allDay" {
                    Value::Bool(parse_flag(value))
                } else {
                    Value::String(value.to_string())
                };
                map.insert((*key).to_string(), v);
            }

            let stored: StoredEvent = match serde_json::from_value(Value::Object(map)) {
                Ok(s) => s,
                Err(e) => {
                    skipped.push((line, e.to_string()));
                    continue;
                }
            };

            match stored.normalize_strict(String::new) {
                Ok(ev) => drafts.push(EventDraft::from(ev)),
                Err(r) => skipped.push((line, r.reason().to_string())),
            }
        }

        Ok((drafts, skipped))
    }

    pub fn import<R: EventRepository>(
        store: &mut EventStore<R>,
        audit: &AuditLog,
        role: Role,
        file: &Path,
    ) -> AppResult<ImportReport> {
        role.ensure_can_create()?;

        info(format!("Importing events from CSV: {}", file.display()));
        let f = std::fs::File::open(file)
            .map_err(|e| AppError::Import(format!("{}: {}", file.display(), e)))?;

        let (drafts, skipped) = Self::parse(f)?;

        for (line, reason) in &skipped {
            warning(format!("Skipped line {}: {}", line, reason));
        }

        let created = if drafts.is_empty() {
            Vec::new()
        } else {
            store.create_all(drafts)?
        };

        let report = ImportReport {
            imported: created.len(),
            skipped,
        };

        audit.record(
            "import",
            &file.to_string_lossy(),
            &format!("{} imported, {} skipped", report.imported, report.skipped.len()),
        );
        success(format!(
            "Import completed: {} imported, {} skipped",
            report.imported,
            report.skipped.len()
        ));

        Ok(report)
    }
}
