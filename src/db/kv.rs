//! Opaque key-value persistence of JSON values.

use std::collections::HashMap;

use chrono::Local;
use rusqlite::{OptionalExtension, params};
use serde_json::Value;

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<Value>>;
    fn set(&mut self, key: &str, value: &Value) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

/// Store backed by the `kv` table.
pub struct SqliteStore<'a> {
    pool: &'a DbPool,
}

impl<'a> SqliteStore<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn count_keys(&self, prefix: &str) -> AppResult<i64> {
        let pattern = format!("{}%", prefix.replace('%', "\\%").replace('_', "\\_"));
        let n = self.pool.conn.query_row(
            "SELECT COUNT(*) FROM kv WHERE key LIKE ?1 ESCAPE '\\'",
            [pattern],
            |row| row.get(0),
        )?;
        Ok(n)
    }
}

impl KeyValueStore for SqliteStore<'_> {
    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        let raw: Option<String> = self
            .pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| row.get(0))
            .optional()?;

        match raw {
            None => Ok(None),
            Some(text) => serde_json::from_str(&text).map(Some).map_err(|e| AppError::Store {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn set(&mut self, key: &str, value: &Value) -> AppResult<()> {
        let text = serde_json::to_string(value)?;
        self.pool.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, text, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.pool.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }
}

/// Volatile store, handy for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &Value) -> AppResult<()> {
        self.values.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.values.remove(key);
        Ok(())
    }
}
