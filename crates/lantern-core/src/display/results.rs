//! Result wrapper types for displaying mutation outcomes.
//!
//! Every store mutation surfaces a transient confirmation to the user;
//! these wrappers give those confirmations one consistent shape.

use std::fmt;

use crate::models::{Category, Reminder, SubTask, Task};

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added task with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<SubTask> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added subtask '{}' with ID: {}",
            self.resource.title, self.resource.id
        )
    }
}

impl fmt::Display for CreateResult<Category> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added category '{}' with id '{}'",
            self.resource.name, self.resource.id
        )
    }
}

impl fmt::Display for CreateResult<Reminder> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added reminder with ID: {}", self.resource.id)
    }
}

/// Wrapper type for displaying the result of update operations.
pub struct UpdateResult<T> {
    pub resource: T,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for UpdateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated task with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted task '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}

impl fmt::Display for DeleteResult<SubTask> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted subtask '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}

impl fmt::Display for DeleteResult<Category> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted category '{}'", self.resource.name)
    }
}

impl fmt::Display for DeleteResult<Reminder> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted reminder (ID: {})", self.resource.id)
    }
}

/// Wrapper type for reporting a bulk clear of completed tasks.
pub struct ClearResult {
    pub removed: usize,
}

impl fmt::Display for ClearResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.removed {
            0 => writeln!(f, "No completed tasks to clear."),
            1 => writeln!(f, "Cleared 1 completed task."),
            n => writeln!(f, "Cleared {n} completed tasks."),
        }
    }
}

/// Aggregate statistics over the task collection.
pub struct StatsReport {
    pub total: usize,
    pub completed: usize,
    pub completion_rate: f64,
    pub due_today: usize,
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Stats")?;
        writeln!(f)?;
        writeln!(f, "- Tasks: {}", self.total)?;
        writeln!(f, "- Completed: {}", self.completed)?;
        writeln!(f, "- Completion rate: {:.0}%", self.completion_rate)?;
        writeln!(f, "- Due today: {}", self.due_today)
    }
}
