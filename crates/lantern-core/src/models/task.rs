//! Task and subtask model definitions.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::Priority;

/// Represents a user-created unit of work with its checklist and links.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task, assigned at creation
    pub id: u64,

    /// Display title of the task
    pub title: String,

    /// Optional free-text description
    pub description: Option<String>,

    /// Whether the task is completed
    pub completed: bool,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the task was last modified (UTC), refreshed on every
    /// mutation including subtask mutations and completion toggles
    pub updated_at: Timestamp,

    /// Urgency of the task
    #[serde(default)]
    pub priority: Priority,

    /// Reference to a category id. Not enforced as a foreign key: a dangling
    /// reference renders as uncategorized rather than failing.
    pub category_id: Option<String>,

    /// Due date at calendar-day granularity. Tasks without a due date never
    /// appear in date-bucketed or date-filtered views.
    pub due_date: Option<Date>,

    /// Checklist items, in insertion order (which is also display order)
    #[serde(default)]
    pub subtasks: Vec<SubTask>,

    /// Related links; an empty list is equivalent to absent
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Task {
    /// Whether the subtask at `index` is unlocked for interaction.
    ///
    /// Subtasks unlock sequentially: item `i` is actionable only once every
    /// earlier item is complete. This is a presentation-layer gate; the store
    /// itself never rejects a toggle on a locked subtask.
    pub fn subtask_unlocked(&self, index: usize) -> bool {
        self.subtasks[..index.min(self.subtasks.len())]
            .iter()
            .all(|s| s.completed)
    }
}

/// A checklist item scoped to exactly one task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubTask {
    /// Unique identifier for the subtask
    pub id: u64,

    /// Display title of the subtask
    pub title: String,

    /// Whether the subtask is completed
    pub completed: bool,
}

/// A URL with an optional human-readable title, attached to a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Link {
    /// Target URL
    pub url: String,

    /// Optional display title for the link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
