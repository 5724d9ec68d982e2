//! Versioned schema migrations, tracked with `PRAGMA user_version`.

use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use tracing::{debug, info};

/// Ordered migrations; index + 1 is the schema version they produce.
const MIGRATIONS: &[(&str, &str)] = &[
    (
        "create_log",
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    ),
    (
        "create_kv",
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    ),
    (
        "index_kv_updated_at",
        r#"
        CREATE INDEX IF NOT EXISTS idx_kv_updated_at ON kv(updated_at);
        "#,
    ),
];

pub fn schema_version(conn: &Connection) -> AppResult<u32> {
    let v: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    Ok(v)
}

pub fn latest_version() -> u32 {
    MIGRATIONS.len() as u32
}

/// Applies every migration above the current `user_version`, each in its own
/// transaction. Returns the number of migrations applied.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    let current = schema_version(conn)?;

    if current > latest_version() {
        return Err(AppError::Migration(format!(
            "database schema v{current} is newer than this build (v{})",
            latest_version()
        )));
    }

    let mut applied = 0;

    for (idx, (name, sql)) in MIGRATIONS.iter().enumerate().skip(current as usize) {
        let version = idx as u32 + 1;
        debug!(version, name, "applying migration");

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(sql)
            .map_err(|e| AppError::Migration(format!("{name}: {e}")))?;
        tx.pragma_update(None, "user_version", version)?;
        tx.commit()?;

        // the log table exists from version 1 onwards
        ttlog(conn, "migration_applied", name, &format!("Schema upgraded to v{version}"))?;
        applied += 1;
    }

    if applied > 0 {
        info!(applied, version = latest_version(), "database schema up to date");
    }

    Ok(applied)
}
