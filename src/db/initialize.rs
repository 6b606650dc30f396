use rusqlite::{Connection, Result};

/// Ensure that the `log` table exists.
pub fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the `events` table exists.
///
/// `start` / `end` are ISO-8601 local timestamps (`YYYY-MM-DDTHH:MM:SS`),
/// so lexical order is chronological order.
pub fn ensure_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id            TEXT PRIMARY KEY,
            title         TEXT NOT NULL CHECK(length(trim(title)) > 0),
            start         TEXT NOT NULL,
            "end"         TEXT NOT NULL,
            all_day       INTEGER NOT NULL DEFAULT 0,
            kind          TEXT NOT NULL DEFAULT 'Other',
            location      TEXT NOT NULL DEFAULT '',
            description   TEXT NOT NULL DEFAULT '',
            attendees     TEXT NOT NULL DEFAULT '',
            visibility    TEXT NOT NULL DEFAULT 'Public',
            busy_status   TEXT NOT NULL DEFAULT 'Busy',
            notification  TEXT NOT NULL DEFAULT '15m',
            position      INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_events_start ON events(start);
        "#,
    )?;
    Ok(())
}

/// Initialize an event database (events + log).
pub fn init_db(conn: &Connection) -> Result<()> {
    ensure_events_table(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}
