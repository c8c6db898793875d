//! Durable key-value storage backed by SQLite.
//!
//! The store persists each collection whole, as a JSON string under a
//! well-known key. This module provides the low-level connection handling
//! and the string-keyed, string-valued `get`/`put` surface; the typed
//! collection helpers live in [`collections`].

use std::path::Path;

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

pub mod collections;
pub mod migrations;

pub use collections::{CATEGORIES_KEY, REMINDERS_KEY, TASKS_KEY};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Reads the raw string value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read value")
    }

    /// Writes `value` under `key`, replacing any previous value.
    pub fn put(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_VALUE_SQL, params![key, value, &now])
            .db_context("Failed to write value")?;
        Ok(())
    }
}
