//! Reminder mutations for the TaskStore.
//!
//! Reminders are a parallel collection: they live next to tasks in the same
//! database but share nothing with the task model beyond the id allocator.

use super::TaskStore;
use crate::{
    error::{Result, StoreError},
    models::Reminder,
    params::CreateReminder,
};

impl TaskStore {
    /// Creates a new reminder.
    pub async fn add_reminder(&mut self, params: &CreateReminder) -> Result<Reminder> {
        let text = params.text.trim();
        if text.is_empty() {
            return Err(StoreError::invalid_input(
                "text",
                "Reminder text must not be blank",
            ));
        }

        let reminder = Reminder {
            id: self.alloc_id(),
            text: text.to_string(),
            date: params.date,
            priority: params.priority,
            category: params.category.clone(),
            completed: false,
        };

        self.reminders.push(reminder.clone());
        self.persist_reminders().await;
        Ok(reminder)
    }

    /// Flips the completion flag of the reminder with the given id. No-op
    /// when the id is unknown.
    pub async fn toggle_reminder(&mut self, id: u64) -> Option<Reminder> {
        let reminder = self.reminders.iter_mut().find(|r| r.id == id)?;
        reminder.completed = !reminder.completed;

        let toggled = reminder.clone();
        self.persist_reminders().await;
        Some(toggled)
    }

    /// Removes the reminder with the given id. No-op when the id is unknown.
    pub async fn delete_reminder(&mut self, id: u64) -> Option<Reminder> {
        let position = self.reminders.iter().position(|r| r.id == id)?;
        let removed = self.reminders.remove(position);
        self.persist_reminders().await;
        Some(removed)
    }
}
