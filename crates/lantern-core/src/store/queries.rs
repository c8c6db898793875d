//! Read-only queries over the TaskStore.
//!
//! Queries borrow the in-memory collections directly and never touch the
//! database, so they observe every completed mutation immediately.

use std::collections::BTreeMap;

use jiff::{civil::Date, Zoned};

use super::TaskStore;
use crate::{
    group::DateGroup,
    models::{Category, Task},
    params::TaskQuery,
};

impl TaskStore {
    /// Returns the tasks matching every provided filter, in insertion order.
    ///
    /// An empty or blank search string passes everything, so the default
    /// query returns the whole collection unchanged.
    pub fn filter_tasks(&self, query: &TaskQuery) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| matches(t, query))
            .cloned()
            .collect()
    }

    /// Returns the tasks whose `category_id` exactly equals the argument.
    pub fn tasks_by_category(&self, category_id: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.category_id.as_deref() == Some(category_id))
            .cloned()
            .collect()
    }

    /// Percentage of completed tasks, `0.0` for an empty collection.
    pub fn completion_rate(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        completed as f64 * 100.0 / self.tasks.len() as f64
    }

    /// Number of tasks due on the given calendar day.
    pub fn task_count_for_date(&self, date: Date) -> usize {
        self.task_count_for_date_where(date, |_| true)
    }

    /// Number of tasks due on the given calendar day that also satisfy the
    /// predicate.
    pub fn task_count_for_date_where<F>(&self, date: Date, predicate: F) -> usize
    where
        F: Fn(&Task) -> bool,
    {
        self.tasks
            .iter()
            .filter(|t| t.due_date == Some(date) && predicate(t))
            .count()
    }

    /// Tasks bucketed by due date relative to the current day, buckets in
    /// display order.
    pub fn grouped_tasks(&self) -> Vec<(DateGroup, Vec<Task>)> {
        self.grouped_tasks_for(Zoned::now().date())
    }

    /// Tasks bucketed by due date relative to an explicit reference day.
    pub fn grouped_tasks_for(&self, today: Date) -> Vec<(DateGroup, Vec<Task>)> {
        let mut groups: BTreeMap<DateGroup, Vec<Task>> = BTreeMap::new();
        for task in &self.tasks {
            groups
                .entry(DateGroup::classify(task.due_date, today))
                .or_default()
                .push(task.clone());
        }
        groups.into_iter().collect()
    }

    /// Looks up a task by id.
    pub fn get_task(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Resolves a task's category, `None` when the reference is absent or
    /// dangling (the display layer substitutes the fallback color).
    pub fn category_for(&self, task: &Task) -> Option<&Category> {
        let category_id = task.category_id.as_deref()?;
        self.categories.iter().find(|c| c.id == category_id)
    }
}

fn matches(task: &Task, query: &TaskQuery) -> bool {
    if let Some(search) = &query.search {
        let needle = search.trim().to_lowercase();
        if !needle.is_empty() {
            let in_title = task.title.to_lowercase().contains(&needle);
            let in_description = task
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
            if !in_title && !in_description {
                return false;
            }
        }
    }

    if let Some(category_id) = &query.category_id {
        if task.category_id.as_deref() != Some(category_id.as_str()) {
            return false;
        }
    }

    if let Some(completed) = query.completed {
        if task.completed != completed {
            return false;
        }
    }

    if let Some(due_on) = query.due_on {
        // Tasks without a due date never match a date filter
        if task.due_date != Some(due_on) {
            return false;
        }
    }

    true
}
