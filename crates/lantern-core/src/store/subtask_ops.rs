//! Subtask mutations and the parent/child completion reconciliation.

use jiff::Timestamp;

use super::TaskStore;
use crate::{
    error::{Result, StoreError},
    models::{SubTask, Task},
};

impl TaskStore {
    /// Appends a new subtask to the named task's checklist.
    ///
    /// Returns `Ok(None)` when the task id is unknown. Refreshes the parent's
    /// `updated_at`.
    pub async fn add_subtask(&mut self, task_id: u64, title: &str) -> Result<Option<SubTask>> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::invalid_input(
                "title",
                "Subtask title must not be blank",
            ));
        }

        let id = self.alloc_id();
        let task = match self.tasks.iter_mut().find(|t| t.id == task_id) {
            Some(task) => task,
            None => return Ok(None),
        };

        let subtask = SubTask {
            id,
            title: title.to_string(),
            completed: false,
        };
        task.subtasks.push(subtask.clone());
        task.updated_at = Timestamp::now();

        self.persist_tasks().await;
        Ok(Some(subtask))
    }

    /// Removes the named subtask from the named task. No-op when either id
    /// is unknown. Refreshes the parent's `updated_at`.
    pub async fn delete_subtask(&mut self, task_id: u64, subtask_id: u64) -> Option<SubTask> {
        let task = self.tasks.iter_mut().find(|t| t.id == task_id)?;
        let position = task.subtasks.iter().position(|s| s.id == subtask_id)?;

        let removed = task.subtasks.remove(position);
        task.updated_at = Timestamp::now();

        self.persist_tasks().await;
        Some(removed)
    }

    /// Flips exactly the named subtask, then reconciles the parent.
    ///
    /// The reconciliation rules, evaluated in order:
    ///
    /// 1. The toggled subtask became incomplete: the parent becomes
    ///    incomplete, regardless of the other subtasks.
    /// 2. Every subtask is now complete: the parent becomes complete.
    /// 3. Otherwise the parent's completion is left as it was.
    ///
    /// Refreshes the parent's `updated_at` and returns the reconciled parent.
    pub async fn toggle_subtask(&mut self, task_id: u64, subtask_id: u64) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == task_id)?;
        let subtask = task.subtasks.iter_mut().find(|s| s.id == subtask_id)?;

        subtask.completed = !subtask.completed;
        let now_complete = subtask.completed;

        if !now_complete {
            task.completed = false;
        } else if task.subtasks.iter().all(|s| s.completed) {
            task.completed = true;
        }
        task.updated_at = Timestamp::now();

        let reconciled = task.clone();
        self.persist_tasks().await;
        Some(reconciled)
    }
}
