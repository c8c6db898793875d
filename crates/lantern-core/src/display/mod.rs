//! Display formatting for models, collections, and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (in [`models`]),
//! while newtype wrappers provide contextual formatting for collections and
//! operation outcomes. All formatters emit markdown, which the CLI renders
//! through its terminal renderer or prints verbatim in plain mode.
//!
//! ## Module Organization
//!
//! - [`collections`]: collection wrappers (TaskList, GroupedTasks, ...)
//! - [`results`]: mutation result wrappers (CreateResult, ClearResult, ...)
//! - [`status`]: transient notices, including the no-op "not found" case
//! - [`datetime`]: date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{Categories, GroupedTasks, Reminders, TaskList};
pub use datetime::{LocalDate, LocalDateTime};
pub use results::{ClearResult, CreateResult, DeleteResult, StatsReport, UpdateResult};
pub use status::Notice;
