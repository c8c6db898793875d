//! Transient status messages for operation feedback.

use std::fmt;

/// A one-line notice about the outcome of an operation.
///
/// Mutations on unknown ids are no-ops by contract, so "not found" is a
/// skipped notice rather than an error.
pub struct Notice {
    pub message: String,
    pub skipped: bool,
}

impl Notice {
    /// A notice for an operation that took effect.
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            skipped: false,
        }
    }

    /// A notice for an operation that matched nothing and was skipped.
    pub fn skipped(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            skipped: true,
        }
    }

    /// A skipped notice for an unknown resource id.
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        Self::skipped(format!("No {resource} with ID {id}; nothing changed."))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.skipped {
            writeln!(f, "Skipped: {}", self.message)
        } else {
            writeln!(f, "{}", self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_display() {
        let done = Notice::done("Toggled task 3.");
        assert_eq!(format!("{done}"), "Toggled task 3.\n");

        let missing = Notice::not_found("task", 99);
        assert_eq!(
            format!("{missing}"),
            "Skipped: No task with ID 99; nothing changed.\n"
        );
    }
}
