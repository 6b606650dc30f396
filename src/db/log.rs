//! Internal audit log (`log` table).
//!
//! Writing to the audit log never fails the command that triggered it:
//! problems are reported through `log::warn!` and swallowed.

use crate::db::initialize::ensure_log_table;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;
use std::path::{Path, PathBuf};

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // Timestamp locale, formattato in ISO 8601
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Lazily opened audit database.
pub struct AuditLog {
    path: PathBuf,
    pool: Option<DbPool>,
}

impl AuditLog {
    pub fn open(path: &Path) -> Self {
        let pool = match Self::connect(path) {
            Ok(p) => Some(p),
            Err(e) => {
                log::warn!("audit log unavailable at {}: {}", path.display(), e);
                None
            }
        };

        Self {
            path: path.to_path_buf(),
            pool,
        }
    }

    /// An audit log that records nothing.
    pub fn disabled() -> Self {
        Self {
            path: PathBuf::new(),
            pool: None,
        }
    }

    fn connect(path: &Path) -> AppResult<DbPool> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let pool = DbPool::new(path)?;
        ensure_log_table(&pool.conn)?;
        Ok(pool)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pool_mut(&mut self) -> Option<&mut DbPool> {
        self.pool.as_mut()
    }

    pub fn record(&self, operation: &str, target: &str, message: &str) {
        if let Some(pool) = &self.pool
            && let Err(e) = ttlog(&pool.conn, operation, target, message)
        {
            log::warn!("failed to write audit log: {}", e);
        }
    }
}
