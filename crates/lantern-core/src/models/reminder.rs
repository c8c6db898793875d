//! Reminder model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Priority;

/// An ad hoc reminder, stored alongside tasks but not unified with them.
///
/// Reminders carry their own category string with no referential integrity
/// to task categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reminder {
    /// Unique identifier for the reminder
    pub id: u64,

    /// Reminder text
    pub text: String,

    /// Optional date the reminder is for
    pub date: Option<Date>,

    /// Urgency of the reminder
    #[serde(default)]
    pub priority: Priority,

    /// Free-form category label
    pub category: Option<String>,

    /// Whether the reminder has been dismissed
    pub completed: bool,
}
