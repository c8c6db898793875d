//! The task store: single source of truth for tasks, categories, and
//! reminders.
//!
//! [`TaskStore`] owns the canonical in-memory collections for the lifetime of
//! a session and mediates every read and write. Mutations update memory
//! first and then persist the whole affected collection to durable storage
//! on a blocking task; reads always see the latest in-memory state whether
//! or not the write has landed.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Operations    │    │   TaskStore     │    │    Database     │
//! │ (task_ops,      │───▶│ (in-memory      │───▶│   (kv table,    │
//! │  subtask_ops..) │    │  collections)   │    │    JSON blobs)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Persistence failures are logged and never fail the operation: the
//! in-memory state stays authoritative for the session even when the
//! durable copy could not be written. Mutations addressed at an unknown id
//! are silent no-ops rather than errors, which keeps client retries
//! idempotent.

use std::path::PathBuf;

use log::error;
use tokio::task;

use crate::{
    db::{self, Database},
    error::Result,
    models::{Category, Reminder, Task},
};

pub mod builder;
pub mod category_ops;
pub mod queries;
pub mod reminder_ops;
pub mod subtask_ops;
pub mod task_ops;

#[cfg(test)]
mod tests;

pub use builder::StoreBuilder;

/// Owns the canonical task, category, and reminder collections.
pub struct TaskStore {
    pub(crate) db_path: PathBuf,
    pub(crate) tasks: Vec<Task>,
    pub(crate) categories: Vec<Category>,
    pub(crate) reminders: Vec<Reminder>,
    next_id: u64,
}

impl TaskStore {
    pub(crate) fn new(
        db_path: PathBuf,
        tasks: Vec<Task>,
        categories: Vec<Category>,
        reminders: Vec<Reminder>,
    ) -> Self {
        let next_id = next_free_id(&tasks, &reminders);
        Self {
            db_path,
            tasks,
            categories,
            reminders,
            next_id,
        }
    }

    /// All tasks, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// All categories, defaults first.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All reminders, in insertion order.
    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    /// Hands out the next unique id. Ids are shared across tasks, subtasks,
    /// and reminders so a single allocator covers all three.
    pub(crate) fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Persists the full task collection, logging instead of failing.
    pub(crate) async fn persist_tasks(&self) {
        match serde_json::to_string(&self.tasks) {
            Ok(json) => self.write_collection(db::TASKS_KEY, json).await,
            Err(e) => error!("Failed to serialize tasks: {e}"),
        }
    }

    /// Persists the full category collection, logging instead of failing.
    pub(crate) async fn persist_categories(&self) {
        match serde_json::to_string(&self.categories) {
            Ok(json) => self.write_collection(db::CATEGORIES_KEY, json).await,
            Err(e) => error!("Failed to serialize categories: {e}"),
        }
    }

    /// Persists the full reminder collection, logging instead of failing.
    pub(crate) async fn persist_reminders(&self) {
        match serde_json::to_string(&self.reminders) {
            Ok(json) => self.write_collection(db::REMINDERS_KEY, json).await,
            Err(e) => error!("Failed to serialize reminders: {e}"),
        }
    }

    async fn write_collection(&self, key: &'static str, json: String) {
        let db_path = self.db_path.clone();
        let outcome = task::spawn_blocking(move || -> Result<()> {
            let mut db = Database::new(&db_path)?;
            db.put(key, &json)
        })
        .await;

        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => error!("Failed to persist '{key}': {e}"),
            Err(e) => error!("Persistence task for '{key}' did not complete: {e}"),
        }
    }
}

/// One past the highest id currently in use, across tasks, their subtasks,
/// and reminders.
fn next_free_id(tasks: &[Task], reminders: &[Reminder]) -> u64 {
    let task_max = tasks
        .iter()
        .flat_map(|t| std::iter::once(t.id).chain(t.subtasks.iter().map(|s| s.id)))
        .max()
        .unwrap_or(0);
    let reminder_max = reminders.iter().map(|r| r.id).max().unwrap_or(0);
    task_max.max(reminder_max) + 1
}
