use super::repository::EventRepository;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{BusyStatus, CalendarEvent, EventType, Notification, Visibility};
use crate::utils::time::{parse_timestamp, to_storage};
use rusqlite::{Row, params};
use std::path::{Path, PathBuf};

/// Event collection stored in the `events` table of an SQLite file.
pub struct SqliteRepository {
    path: PathBuf,
    pool: DbPool,
}

impl SqliteRepository {
    pub fn open(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self {
            path: path.to_path_buf(),
            pool,
        })
    }

    fn load_rows(&self) -> AppResult<Vec<CalendarEvent>> {
        let mut stmt = self.pool.conn.prepare(
            r#"SELECT id, title, start, "end", all_day, kind, location, description,
                      attendees, visibility, busy_status, notification
               FROM events
               ORDER BY position ASC"#,
        )?;

        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            match r? {
                Some(ev) => out.push(ev),
                None => log::warn!("skipping event row with unreadable timestamps"),
            }
        }
        Ok(out)
    }
}

/// Mapping DB → CalendarEvent. Rows with bad timestamps map to `None`.
fn map_row(row: &Row<'_>) -> rusqlite::Result<Option<CalendarEvent>> {
    let start: String = row.get(2)?;
    let end: String = row.get(3)?;
    let kind: String = row.get(5)?;
    let visibility: String = row.get(9)?;
    let busy: String = row.get(10)?;
    let notification: String = row.get(11)?;

    let (Some(start), Some(end)) = (parse_timestamp(&start), parse_timestamp(&end)) else {
        return Ok(None);
    };

    Ok(Some(CalendarEvent {
        id: row.get(0)?,
        title: row.get(1)?,
        start,
        end: end.max(start),
        all_day: row.get::<_, i64>(4)? == 1,
        event_type: EventType::parse_lenient(&kind).unwrap_or_default(),
        location: row.get(6)?,
        description: row.get(7)?,
        attendees: row.get(8)?,
        visibility: Visibility::parse_lenient(&visibility).unwrap_or_default(),
        busy_status: BusyStatus::parse_lenient(&busy).unwrap_or_default(),
        notification: Notification::parse_lenient(&notification).unwrap_or_default(),
    }))
}

impl EventRepository for SqliteRepository {
    fn load(&self) -> Vec<CalendarEvent> {
        match self.load_rows() {
            Ok(events) => events,
            Err(e) => {
                log::warn!(
                    "cannot read events from {}, starting empty: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&mut self, events: &[CalendarEvent]) -> AppResult<()> {
        let tx = self.pool.conn.transaction()?;
        tx.execute("DELETE FROM events", [])?;
        {
            let mut stmt = tx.prepare(
                r#"INSERT INTO events
                   (id, title, start, "end", all_day, kind, location, description,
                    attendees, visibility, busy_status, notification, position)
                   VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)"#,
            )?;

            for (pos, ev) in events.iter().enumerate() {
                stmt.execute(params![
                    ev.id,
                    ev.title,
                    to_storage(&ev.start),
                    to_storage(&ev.end),
                    ev.all_day as i64,
                    ev.event_type.as_str(),
                    ev.location,
                    ev.description,
                    ev.attendees,
                    ev.visibility.as_str(),
                    ev.busy_status.as_str(),
                    ev.notification.as_str(),
                    pos as i64,
                ])?;
            }
        }
        tx.commit()?;
        log::debug!("saved {} events to {}", events.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }
}
