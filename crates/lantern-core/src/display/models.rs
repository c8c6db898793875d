//! Display implementations for domain models.
//!
//! All output is markdown for rich terminal rendering. Completion is shown
//! with the `✓`/`○` icons; subtasks that are still gated by an earlier
//! incomplete subtask carry a `(locked)` annotation. The lock is purely
//! presentational -- the store will happily toggle a locked subtask.

use std::fmt;

use super::datetime::{LocalDate, LocalDateTime};
use crate::{
    group::DateGroup,
    models::{Category, Priority, Reminder, Task},
};

/// Icon plus word for a completion flag.
pub(crate) fn completion_icon(completed: bool) -> &'static str {
    if completed {
        "✓ Done"
    } else {
        "○ Open"
    }
}

fn checkbox(completed: bool) -> &'static str {
    if completed {
        "[x]"
    } else {
        "[ ]"
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {}. {} ({})",
            self.id,
            self.title,
            completion_icon(self.completed)
        )?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Priority: {}", self.priority)?;
        if let Some(category_id) = &self.category_id {
            writeln!(f, "- Category: {category_id}")?;
        }
        if let Some(due) = &self.due_date {
            writeln!(
                f,
                "- Due: {} ({})",
                LocalDate(due),
                DateGroup::classify_now(Some(*due))
            )?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if !self.subtasks.is_empty() {
            writeln!(f, "\n### Subtasks")?;
            writeln!(f)?;
            for (index, subtask) in self.subtasks.iter().enumerate() {
                let lock = if !subtask.completed && !self.subtask_unlocked(index) {
                    " (locked)"
                } else {
                    ""
                };
                writeln!(
                    f,
                    "- {} {}. {}{lock}",
                    checkbox(subtask.completed),
                    subtask.id,
                    subtask.title
                )?;
            }
        }

        if !self.links.is_empty() {
            writeln!(f, "\n### Links")?;
            writeln!(f)?;
            for link in &self.links {
                match &link.title {
                    Some(title) => writeln!(f, "- {}: {}", title, link.url)?,
                    None => writeln!(f, "- {}", link.url)?,
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **{}** ({}) {}", self.name, self.id, self.color)
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} {}. {}",
            checkbox(self.completed),
            self.id,
            self.text
        )?;
        if let Some(date) = &self.date {
            write!(f, " due {}", LocalDate(date))?;
        }
        if self.priority != Priority::Medium {
            write!(f, " ({})", self.priority)?;
        }
        if let Some(category) = &self.category {
            write!(f, " [{category}]")?;
        }
        writeln!(f)
    }
}
