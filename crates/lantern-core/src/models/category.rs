//! Category model definition and the default category set.

use serde::{Deserialize, Serialize};

/// Color used when a task references no category, or a category that no
/// longer exists.
pub const FALLBACK_COLOR: &str = "#9CA3AF";

/// A named, colored grouping label applied to tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// String identifier, either one of the fixed defaults or user-defined
    pub id: String,

    /// Display name of the category
    pub name: String,

    /// CSS color value used for visual tagging
    pub color: String,
}

impl Category {
    /// The fixed default set seeded into the store when no categories exist.
    pub fn defaults() -> Vec<Category> {
        [
            ("personal", "Personal", "#8B5CF6"),
            ("work", "Work", "#3B82F6"),
            ("shopping", "Shopping", "#F59E0B"),
            ("health", "Health", "#10B981"),
            ("others", "Others", "#6B7280"),
        ]
        .into_iter()
        .map(|(id, name, color)| Category {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
        })
        .collect()
    }
}
