//! Typed load/save helpers for the stored collections.
//!
//! Loading is fail-soft: a missing key is an empty collection, and a value
//! that no longer parses is logged and treated as empty rather than
//! propagated. A collection that loads is exactly the collection that was
//! saved, field for field.

use log::warn;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::Result,
    models::{Category, Reminder, Task},
};

/// Storage key for the task collection.
pub const TASKS_KEY: &str = "todos";
/// Storage key for the category collection.
pub const CATEGORIES_KEY: &str = "categories";
/// Storage key for the reminder collection.
pub const REMINDERS_KEY: &str = "reminders";

impl super::Database {
    /// Loads the task collection, falling back to empty on parse failure.
    pub fn load_tasks(&self) -> Result<Vec<Task>> {
        self.load_collection(TASKS_KEY)
    }

    /// Saves the full task collection.
    pub fn save_tasks(&mut self, tasks: &[Task]) -> Result<()> {
        self.save_collection(TASKS_KEY, tasks)
    }

    /// Loads the category collection, falling back to empty on parse failure.
    /// Seeding of the default categories is the store's concern, not ours.
    pub fn load_categories(&self) -> Result<Vec<Category>> {
        self.load_collection(CATEGORIES_KEY)
    }

    /// Saves the full category collection.
    pub fn save_categories(&mut self, categories: &[Category]) -> Result<()> {
        self.save_collection(CATEGORIES_KEY, categories)
    }

    /// Loads the reminder collection, falling back to empty on parse failure.
    pub fn load_reminders(&self) -> Result<Vec<Reminder>> {
        self.load_collection(REMINDERS_KEY)
    }

    /// Saves the full reminder collection.
    pub fn save_reminders(&mut self, reminders: &[Reminder]) -> Result<()> {
        self.save_collection(REMINDERS_KEY, reminders)
    }

    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let raw = match self.get(key)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!("Discarding unparseable '{key}' collection: {e}");
                Ok(Vec::new())
            }
        }
    }

    fn save_collection<T: Serialize>(&mut self, key: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.put(key, &json)
    }
}
