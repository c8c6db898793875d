//! Builder for creating and configuring TaskStore instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::TaskStore;
use crate::{
    db::Database,
    error::{Result, StoreError},
    models::{Category, Reminder, Task},
};

/// Builder for creating and configuring TaskStore instances.
///
/// Each consumer constructs its own store; there is no ambient singleton.
/// Tests point the builder at a temporary database and get a fully isolated
/// instance.
#[derive(Debug, Clone)]
pub struct StoreBuilder {
    database_path: Option<PathBuf>,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/lantern/lantern.db` or `~/.local/share/lantern/lantern.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured store, loading all collections from storage.
    ///
    /// A missing collection loads as empty, and an unparseable one is
    /// dropped with a warning (the fail-soft policy lives in the db layer).
    /// When no categories are stored, the fixed default set is seeded and
    /// written through immediately.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileSystem` if the database path is invalid and
    /// `StoreError::Database` if opening or reading the database fails.
    pub async fn build(self) -> Result<TaskStore> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let load_path = db_path.clone();
        let (tasks, categories, reminders) = task::spawn_blocking(move || {
            let mut db = Database::new(&load_path)?;

            let tasks = db.load_tasks()?;
            let mut categories = db.load_categories()?;
            if categories.is_empty() {
                categories = Category::defaults();
                db.save_categories(&categories)?;
            }
            let reminders = db.load_reminders()?;

            Ok::<(Vec<Task>, Vec<Category>, Vec<Reminder>), StoreError>((
                tasks, categories, reminders,
            ))
        })
        .await
        .map_err(|e| StoreError::configuration(format!("Task join error: {e}")))??;

        Ok(TaskStore::new(db_path, tasks, categories, reminders))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("lantern")
            .place_data_file("lantern.db")
            .map_err(|e| StoreError::XdgDirectory(e.to_string()))
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
