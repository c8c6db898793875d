//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers give collections a `Display` implementation with
//! graceful empty-collection handling, keeping presentation out of the
//! query layer.

use std::fmt;

use super::datetime::LocalDate;
use crate::{
    group::DateGroup,
    models::{Category, Reminder, Task},
};

/// Newtype wrapper for displaying a list of full task cards.
pub struct TaskList(pub Vec<Task>);

impl TaskList {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of tasks in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterator over the tasks.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks found.")
        } else {
            for task in &self.0 {
                write!(f, "{task}")?;
                writeln!(f)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying tasks bucketed by due date.
///
/// Buckets are expected in display order (the grouping query already sorts
/// them); each task renders as a compact one-line entry.
pub struct GroupedTasks(pub Vec<(DateGroup, Vec<Task>)>);

impl GroupedTasks {
    /// Check if there are no tasks in any bucket.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|(_, tasks)| tasks.is_empty())
    }
}

impl fmt::Display for GroupedTasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No tasks found.");
        }

        for (group, tasks) in &self.0 {
            writeln!(f, "# {group}")?;
            writeln!(f)?;
            for task in tasks {
                write!(
                    f,
                    "- {} {}. {}",
                    if task.completed { "[x]" } else { "[ ]" },
                    task.id,
                    task.title
                )?;
                if task.priority != crate::models::Priority::Medium {
                    write!(f, " ({})", task.priority)?;
                }
                if !task.subtasks.is_empty() {
                    let done = task.subtasks.iter().filter(|s| s.completed).count();
                    write!(f, " [{done}/{}]", task.subtasks.len())?;
                }
                if let Some(due) = &task.due_date {
                    write!(f, " due {}", LocalDate(due))?;
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the category list.
pub struct Categories(pub Vec<Category>);

impl fmt::Display for Categories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No categories found.")
        } else {
            for category in &self.0 {
                write!(f, "{category}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the reminder list.
pub struct Reminders(pub Vec<Reminder>);

impl fmt::Display for Reminders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No reminders found.")
        } else {
            for reminder in &self.0 {
                write!(f, "{reminder}")?;
            }
            Ok(())
        }
    }
}
