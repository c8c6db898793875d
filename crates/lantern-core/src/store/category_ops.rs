//! Category mutations for the TaskStore.

use super::TaskStore;
use crate::{
    error::{Result, StoreError},
    models::Category,
};

impl TaskStore {
    /// Adds a user-defined category.
    ///
    /// The id is a slug derived from the name; on collision a numeric
    /// suffix from the shared id allocator keeps it unique.
    pub async fn add_category(&mut self, name: &str, color: &str) -> Result<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::invalid_input(
                "name",
                "Category name must not be blank",
            ));
        }

        let mut id = slugify(name);
        if id.is_empty() || self.categories.iter().any(|c| c.id == id) {
            id = format!("{}-{}", id, self.alloc_id());
        }

        let category = Category {
            id,
            name: name.to_string(),
            color: color.to_string(),
        };
        self.categories.push(category.clone());
        self.persist_categories().await;
        Ok(category)
    }

    /// Removes the category with the given id. No-op when the id is unknown.
    ///
    /// Tasks referencing the category are deliberately left alone: a
    /// dangling `category_id` renders as uncategorized.
    pub async fn delete_category(&mut self, id: &str) -> Option<Category> {
        let position = self.categories.iter().position(|c| c.id == id)?;
        let removed = self.categories.remove(position);
        self.persist_categories().await;
        Some(removed)
    }
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
