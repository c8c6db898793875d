//! Data models for tasks, categories, and reminders.
//!
//! This module contains the core domain models of the lantern to-do system.
//! Display implementations for these models live in
//! [`crate::display::models`] to keep data structures separate from
//! presentation logic.
//!
//! All models serialize through serde: the stored form is a JSON array per
//! collection, with `jiff::Timestamp` fields as RFC 3339 strings and
//! `jiff::civil::Date` fields as `YYYY-MM-DD`. A serialize/deserialize round
//! trip is lossless at field level.

pub mod category;
pub mod priority;
pub mod reminder;
pub mod task;


// Re-export all public types at the models level
pub use category::{Category, FALLBACK_COLOR};
pub use priority::Priority;
pub use reminder::Reminder;
pub use task::{Link, SubTask, Task};
