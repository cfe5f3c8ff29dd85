//! Key-Value Repository
//!
//! SQLite-backed string slots (`kv_store` table).

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};

use super::db::SharedConnection;
use super::traits::KeyValueStore;
use crate::domain::{DomainError, DomainResult};

pub struct SqliteKvStore {
    conn: SharedConnection,
}

impl SqliteKvStore {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

fn not_initialized() -> DomainError {
    DomainError::Storage("Database not initialized".to_string())
}

#[async_trait]
impl KeyValueStore for SqliteKvStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let value = conn
            .query_row("SELECT value FROM kv_store WHERE key = ?", params![key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let now = chrono::Local::now().timestamp_millis();
        conn.execute(
            "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?, ?, ?)",
            params![key, value, now],
        )?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        conn.execute("DELETE FROM kv_store WHERE key = ?", params![key])?;
        Ok(())
    }
}
