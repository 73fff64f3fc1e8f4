//! Persisted page state.
//!
//! The page persists exactly one datum: whether this visitor has
//! registered. It lives in a kv table so shells on any platform can keep
//! it across reloads. Business logic only sees the [`StateStore`]
//! capability; [`MemoryStore`] backs tests and [`SqliteStore`] backs
//! production shells.

use std::collections::HashMap;

use rusqlite::{params, Connection};

use crate::error::StorageError;

use super::data_dir;

/// Key under which the registration flag is stored.
pub const REGISTERED_KEY: &str = "registered";

/// Value written when the visitor registers. The key is absent until then.
pub const REGISTERED_VALUE: &str = "1";

/// Minimal key-value capability for durable page state.
pub trait StateStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// SQLite-backed store at `~/.config/hackdeck/hackdeck.db`.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the store, creating the file and schema if needed.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or migrated.
    pub fn open() -> Result<Self, StorageError> {
        let path = data_dir()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?
            .join("hackdeck.db");
        let conn = Connection::open(&path)
            .map_err(|source| StorageError::OpenFailed { path, source })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(indoc::indoc! {"
            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
        "})?;
        Ok(())
    }
}

impl StateStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral shells.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
