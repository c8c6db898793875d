//! Core library for the Lantern to-do application.
//!
//! This crate provides the business logic for managing tasks, categories,
//! and reminders: the durable key-value persistence layer, the task store
//! with its completion-cascade rules, the due-date bucketing utility, and
//! the display wrappers used by the CLI.
//!
//! # Quick Start
//!
//! ```rust
//! use lantern_core::{params::CreateTask, StoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a store instance backed by a specific database file
//! let mut store = StoreBuilder::new()
//!     .with_database_path(Some("lantern.db"))
//!     .build()
//!     .await?;
//!
//! // Create a task and attach a subtask to it
//! let task = store
//!     .create_task(&CreateTask {
//!         title: "Plan the week".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! store.add_subtask(task.id, "Review calendar").await?;
//!
//! // Query the in-memory state
//! println!("completion: {:.0}%", store.completion_rate());
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod group;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    Categories, ClearResult, CreateResult, DeleteResult, GroupedTasks, Notice, Reminders,
    StatsReport, TaskList, UpdateResult,
};
pub use error::{Result, StoreError};
pub use group::DateGroup;
pub use models::{Category, Link, Priority, Reminder, SubTask, Task};
pub use params::{CreateReminder, CreateTask, TaskQuery, UpdateTask};
pub use store::{StoreBuilder, TaskStore};
