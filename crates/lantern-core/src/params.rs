//! Parameter structures for store operations.
//!
//! These are framework-free structures shared across interfaces. The CLI
//! wraps them with clap-specific argument structs and converts via `From`,
//! keeping the core free of CLI concerns:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   Task Store    │
//! │  (clap derives) │───▶│ (this module)   │───▶│                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{Link, Priority};

/// Parameters for creating a new task.
///
/// System-assigned fields (`id`, `completed`, `created_at`, `updated_at`,
/// `subtasks`) are deliberately absent; the store fills them in. Subtasks
/// are attached afterwards using the returned task id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTask {
    /// Title of the task (required, must not be blank)
    pub title: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Urgency; defaults to medium
    #[serde(default)]
    pub priority: Priority,
    /// Optional category id to tag the task with
    pub category_id: Option<String>,
    /// Optional due date
    pub due_date: Option<Date>,
    /// Related links
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Parameters for partially updating an existing task.
///
/// `None` fields are left unchanged. In particular, an omitted `links`
/// retains the stored list, while `Some(vec![])` explicitly clears it --
/// "not provided" and "provided empty" are distinct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// Updated title
    pub title: Option<String>,
    /// Updated description
    pub description: Option<String>,
    /// Updated priority
    pub priority: Option<Priority>,
    /// Updated category id
    pub category_id: Option<String>,
    /// Updated due date
    pub due_date: Option<Date>,
    /// Replacement link list; omit to keep the existing links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

impl UpdateTask {
    /// Whether the update carries any field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.category_id.is_none()
            && self.due_date.is_none()
            && self.links.is_none()
    }
}

/// Parameters for creating a new reminder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateReminder {
    /// Reminder text (required, must not be blank)
    pub text: String,
    /// Optional date the reminder is for
    pub date: Option<Date>,
    /// Urgency; defaults to medium
    #[serde(default)]
    pub priority: Priority,
    /// Free-form category label
    pub category: Option<String>,
}

/// Filter options for querying tasks.
///
/// All provided filters combine with logical AND; an absent filter passes
/// everything, so the default query returns every task in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskQuery {
    /// Case-insensitive substring match against title or description
    pub search: Option<String>,
    /// Exact category id match
    pub category_id: Option<String>,
    /// Completion state match; absent passes both states
    pub completed: Option<bool>,
    /// Calendar-day equality against the due date. Tasks without a due date
    /// never match when this is set.
    pub due_on: Option<Date>,
}
