//! Task mutations for the TaskStore.

use jiff::Timestamp;

use super::TaskStore;
use crate::{
    error::{Result, StoreError},
    models::Task,
    params::{CreateTask, UpdateTask},
};

impl TaskStore {
    /// Creates a new task and appends it to the collection.
    ///
    /// The store assigns the id and stamps `created_at`/`updated_at`; the
    /// task starts incomplete with no subtasks. Provided links are kept as
    /// given. Returns the created task so callers can attach subtasks using
    /// its id.
    pub async fn create_task(&mut self, params: &CreateTask) -> Result<Task> {
        let title = params.title.trim();
        if title.is_empty() {
            return Err(StoreError::invalid_input(
                "title",
                "Task title must not be blank",
            ));
        }

        let now = Timestamp::now();
        let task = Task {
            id: self.alloc_id(),
            title: title.to_string(),
            description: params.description.clone(),
            completed: false,
            created_at: now,
            updated_at: now,
            priority: params.priority,
            category_id: params.category_id.clone(),
            due_date: params.due_date,
            subtasks: Vec::new(),
            links: params.links.clone(),
        };

        self.tasks.push(task.clone());
        self.persist_tasks().await;
        Ok(task)
    }

    /// Merges the provided fields into the task with the given id.
    ///
    /// `None` fields are left untouched; an omitted `links` keeps the stored
    /// list while an explicit empty list clears it. Refreshes `updated_at`.
    /// Returns `None` without persisting when the id is unknown -- updates
    /// never create tasks.
    pub async fn update_task(&mut self, id: u64, params: &UpdateTask) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;

        if let Some(title) = &params.title {
            task.title = title.clone();
        }
        if let Some(description) = &params.description {
            task.description = Some(description.clone());
        }
        if let Some(priority) = params.priority {
            task.priority = priority;
        }
        if let Some(category_id) = &params.category_id {
            task.category_id = Some(category_id.clone());
        }
        if let Some(due_date) = params.due_date {
            task.due_date = Some(due_date);
        }
        if let Some(links) = &params.links {
            task.links = links.clone();
        }
        task.updated_at = Timestamp::now();

        let updated = task.clone();
        self.persist_tasks().await;
        Some(updated)
    }

    /// Removes the task with the given id. No-op when the id is unknown.
    pub async fn delete_task(&mut self, id: u64) -> Option<Task> {
        let position = self.tasks.iter().position(|t| t.id == id)?;
        let removed = self.tasks.remove(position);
        self.persist_tasks().await;
        Some(removed)
    }

    /// Flips the task's completion flag.
    ///
    /// Every subtask is synchronized to the parent's new state in both
    /// directions: completing the task completes all subtasks, and
    /// un-completing it un-completes them. Returns the toggled task.
    pub async fn toggle_task(&mut self, id: u64) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;

        task.completed = !task.completed;
        let state = task.completed;
        for subtask in &mut task.subtasks {
            subtask.completed = state;
        }
        task.updated_at = Timestamp::now();

        let toggled = task.clone();
        self.persist_tasks().await;
        Some(toggled)
    }

    /// Removes every completed task in one pass, preserving the relative
    /// order of the remaining tasks. Returns the number removed.
    pub async fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();

        if removed > 0 {
            self.persist_tasks().await;
        }
        removed
    }
}
