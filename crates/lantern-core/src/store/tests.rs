//! Tests for the task store.

use std::time::Duration;

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::{
    error::StoreError,
    models::{Link, Priority},
    params::{CreateReminder, CreateTask, TaskQuery, UpdateTask},
};

/// Helper function to create a store backed by a temporary database.
async fn create_test_store() -> (TempDir, TaskStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = StoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create store");
    (temp_dir, store)
}

fn titled(title: &str) -> CreateTask {
    CreateTask {
        title: title.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_task_defaults() {
    let (_temp_dir, mut store) = create_test_store().await;

    let task = store
        .create_task(&titled("Water the plants"))
        .await
        .expect("Failed to create task");

    assert!(!task.completed);
    assert!(task.subtasks.is_empty());
    assert!(task.links.is_empty());
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.created_at, task.updated_at);
}

#[tokio::test]
async fn test_create_task_ids_are_unique() {
    let (_temp_dir, mut store) = create_test_store().await;

    let mut ids = Vec::new();
    for i in 0..5 {
        let task = store
            .create_task(&titled(&format!("Task {i}")))
            .await
            .expect("Failed to create task");
        ids.push(task.id);
    }

    let mut deduped = ids.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[tokio::test]
async fn test_create_task_rejects_blank_title() {
    let (_temp_dir, mut store) = create_test_store().await;

    let result = store.create_task(&titled("   ")).await;
    match result {
        Err(StoreError::InvalidInput { field, .. }) => assert_eq!(field, "title"),
        other => panic!("Expected InvalidInput error, got {other:?}"),
    }
    assert!(store.tasks().is_empty());
}

#[tokio::test]
async fn test_update_task_merges_fields() {
    let (_temp_dir, mut store) = create_test_store().await;

    let task = store
        .create_task(&titled("Draft report"))
        .await
        .expect("Failed to create task");

    // Coarse clocks could stamp the update with the creation time
    std::thread::sleep(Duration::from_millis(2));

    let updated = store
        .update_task(
            task.id,
            &UpdateTask {
                description: Some("First pass only".to_string()),
                priority: Some(Priority::High),
                ..Default::default()
            },
        )
        .await
        .expect("Task should exist");

    assert_eq!(updated.title, "Draft report");
    assert_eq!(updated.description, Some("First pass only".to_string()));
    assert_eq!(updated.priority, Priority::High);
    assert!(updated.updated_at > updated.created_at);
}

#[tokio::test]
async fn test_update_task_unknown_id_is_noop() {
    let (_temp_dir, mut store) = create_test_store().await;

    let result = store
        .update_task(
            999,
            &UpdateTask {
                title: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_none());
    // Updates never create tasks
    assert!(store.tasks().is_empty());
}

#[tokio::test]
async fn test_update_task_omitted_links_are_retained() {
    let (_temp_dir, mut store) = create_test_store().await;

    let links = vec![Link {
        url: "https://example.com".to_string(),
        title: None,
    }];
    let task = store
        .create_task(&CreateTask {
            title: "Read article".to_string(),
            links: links.clone(),
            ..Default::default()
        })
        .await
        .expect("Failed to create task");

    // Omitted links field keeps the stored list
    let updated = store
        .update_task(
            task.id,
            &UpdateTask {
                description: Some("x".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("Task should exist");
    assert_eq!(updated.links, links);

    // An explicit empty list clears it
    let cleared = store
        .update_task(
            task.id,
            &UpdateTask {
                links: Some(vec![]),
                ..Default::default()
            },
        )
        .await
        .expect("Task should exist");
    assert!(cleared.links.is_empty());
}

#[tokio::test]
async fn test_delete_task() {
    let (_temp_dir, mut store) = create_test_store().await;

    let task = store
        .create_task(&titled("Temporary"))
        .await
        .expect("Failed to create task");

    let removed = store.delete_task(task.id).await.expect("Task should exist");
    assert_eq!(removed.id, task.id);
    assert!(store.tasks().is_empty());

    // Deleting again is a no-op
    assert!(store.delete_task(task.id).await.is_none());
}

#[tokio::test]
async fn test_toggle_task_cascades_to_subtasks() {
    let (_temp_dir, mut store) = create_test_store().await;

    let task = store
        .create_task(&titled("Pack for the trip"))
        .await
        .expect("Failed to create task");
    store
        .add_subtask(task.id, "Clothes")
        .await
        .expect("add subtask");
    store
        .add_subtask(task.id, "Chargers")
        .await
        .expect("add subtask");

    let completed = store.toggle_task(task.id).await.expect("Task should exist");
    assert!(completed.completed);
    assert!(completed.subtasks.iter().all(|s| s.completed));

    // Toggling back synchronizes the subtasks to incomplete as well
    let reopened = store.toggle_task(task.id).await.expect("Task should exist");
    assert!(!reopened.completed);
    assert!(reopened.subtasks.iter().all(|s| !s.completed));
}

#[tokio::test]
async fn test_add_subtask_to_unknown_task() {
    let (_temp_dir, mut store) = create_test_store().await;

    let result = store.add_subtask(42, "Orphan").await.expect("no error");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_add_subtask_rejects_blank_title() {
    let (_temp_dir, mut store) = create_test_store().await;

    let task = store
        .create_task(&titled("Parent"))
        .await
        .expect("Failed to create task");

    assert!(store.add_subtask(task.id, "  ").await.is_err());
}

#[tokio::test]
async fn test_delete_subtask() {
    let (_temp_dir, mut store) = create_test_store().await;

    let task = store
        .create_task(&titled("Parent"))
        .await
        .expect("Failed to create task");
    let subtask = store
        .add_subtask(task.id, "Child")
        .await
        .expect("no error")
        .expect("task exists");

    let removed = store
        .delete_subtask(task.id, subtask.id)
        .await
        .expect("subtask exists");
    assert_eq!(removed.id, subtask.id);
    assert!(store.get_task(task.id).unwrap().subtasks.is_empty());

    // Unknown subtask id is a no-op
    assert!(store.delete_subtask(task.id, subtask.id).await.is_none());
}

#[tokio::test]
async fn test_toggle_last_subtask_completes_parent() {
    let (_temp_dir, mut store) = create_test_store().await;

    let task = store
        .create_task(&titled("Two-step job"))
        .await
        .expect("Failed to create task");
    let first = store
        .add_subtask(task.id, "First")
        .await
        .expect("no error")
        .expect("task exists");
    let second = store
        .add_subtask(task.id, "Second")
        .await
        .expect("no error")
        .expect("task exists");

    let after_first = store
        .toggle_subtask(task.id, first.id)
        .await
        .expect("subtask exists");
    // One of two complete: parent unchanged
    assert!(!after_first.completed);

    let after_second = store
        .toggle_subtask(task.id, second.id)
        .await
        .expect("subtask exists");
    // All subtasks complete: parent completes
    assert!(after_second.completed);
}

#[tokio::test]
async fn test_untoggling_any_subtask_reopens_parent() {
    let (_temp_dir, mut store) = create_test_store().await;

    let task = store
        .create_task(&titled("Three-step job"))
        .await
        .expect("Failed to create task");
    let mut subtask_ids = Vec::new();
    for title in ["a", "b", "c"] {
        let subtask = store
            .add_subtask(task.id, title)
            .await
            .expect("no error")
            .expect("task exists");
        subtask_ids.push(subtask.id);
    }

    // Complete the parent, cascading to all subtasks
    store.toggle_task(task.id).await.expect("task exists");

    // Un-complete the middle subtask: parent reopens even though the other
    // two remain complete
    let reconciled = store
        .toggle_subtask(task.id, subtask_ids[1])
        .await
        .expect("subtask exists");
    assert!(!reconciled.completed);
    assert!(reconciled.subtasks[0].completed);
    assert!(!reconciled.subtasks[1].completed);
    assert!(reconciled.subtasks[2].completed);
}

#[tokio::test]
async fn test_clear_completed_preserves_order() {
    let (_temp_dir, mut store) = create_test_store().await;

    let mut ids = Vec::new();
    for i in 0..5 {
        let task = store
            .create_task(&titled(&format!("Task {i}")))
            .await
            .expect("Failed to create task");
        ids.push(task.id);
    }

    store.toggle_task(ids[1]).await.expect("task exists");
    store.toggle_task(ids[3]).await.expect("task exists");

    let removed = store.clear_completed().await;
    assert_eq!(removed, 2);

    let remaining: Vec<u64> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(remaining, vec![ids[0], ids[2], ids[4]]);

    // Nothing left to clear
    assert_eq!(store.clear_completed().await, 0);
}

#[tokio::test]
async fn test_filter_tasks_empty_query_returns_all_in_order() {
    let (_temp_dir, mut store) = create_test_store().await;

    for title in ["One", "Two", "Three"] {
        store
            .create_task(&titled(title))
            .await
            .expect("Failed to create task");
    }

    let query = TaskQuery {
        search: Some(String::new()),
        ..Default::default()
    };
    let all = store.filter_tasks(&query);
    let titles: Vec<&str> = all.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Two", "Three"]);
}

#[tokio::test]
async fn test_filter_tasks_search_is_case_insensitive() {
    let (_temp_dir, mut store) = create_test_store().await;

    store
        .create_task(&CreateTask {
            title: "Buy groceries".to_string(),
            description: Some("Milk and EGGS".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create task");
    store
        .create_task(&titled("Walk the dog"))
        .await
        .expect("Failed to create task");

    let by_title = store.filter_tasks(&TaskQuery {
        search: Some("GROCER".to_string()),
        ..Default::default()
    });
    assert_eq!(by_title.len(), 1);

    let by_description = store.filter_tasks(&TaskQuery {
        search: Some("eggs".to_string()),
        ..Default::default()
    });
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].title, "Buy groceries");
}

#[tokio::test]
async fn test_filter_tasks_combines_with_and() {
    let (_temp_dir, mut store) = create_test_store().await;

    let due = date(2025, 6, 15);
    store
        .create_task(&CreateTask {
            title: "Pay rent".to_string(),
            category_id: Some("personal".to_string()),
            due_date: Some(due),
            ..Default::default()
        })
        .await
        .expect("Failed to create task");
    store
        .create_task(&CreateTask {
            title: "Pay invoice".to_string(),
            category_id: Some("work".to_string()),
            due_date: Some(due),
            ..Default::default()
        })
        .await
        .expect("Failed to create task");
    // No due date: never matches a date filter
    store
        .create_task(&CreateTask {
            title: "Pay attention".to_string(),
            category_id: Some("personal".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create task");

    let matched = store.filter_tasks(&TaskQuery {
        search: Some("pay".to_string()),
        category_id: Some("personal".to_string()),
        completed: Some(false),
        due_on: Some(due),
    });
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].title, "Pay rent");
}

#[tokio::test]
async fn test_tasks_by_category_exact_match_only() {
    let (_temp_dir, mut store) = create_test_store().await;

    store
        .create_task(&CreateTask {
            title: "Standup".to_string(),
            category_id: Some("work".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create task");
    store
        .create_task(&CreateTask {
            title: "Workout".to_string(),
            category_id: Some("workout".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create task");

    let work = store.tasks_by_category("work");
    assert_eq!(work.len(), 1);
    assert_eq!(work[0].title, "Standup");
}

#[tokio::test]
async fn test_completion_rate() {
    let (_temp_dir, mut store) = create_test_store().await;

    // Zero tasks: defined as 0, not a division by zero
    assert_eq!(store.completion_rate(), 0.0);

    let mut ids = Vec::new();
    for i in 0..4 {
        let task = store
            .create_task(&titled(&format!("Task {i}")))
            .await
            .expect("Failed to create task");
        ids.push(task.id);
    }
    store.toggle_task(ids[0]).await.expect("task exists");

    assert_eq!(store.completion_rate(), 25.0);
}

#[tokio::test]
async fn test_task_count_for_date() {
    let (_temp_dir, mut store) = create_test_store().await;

    let due = date(2025, 6, 15);
    for title in ["a", "b"] {
        store
            .create_task(&CreateTask {
                title: title.to_string(),
                due_date: Some(due),
                ..Default::default()
            })
            .await
            .expect("Failed to create task");
    }
    let other = store
        .create_task(&CreateTask {
            title: "c".to_string(),
            due_date: Some(date(2025, 6, 16)),
            ..Default::default()
        })
        .await
        .expect("Failed to create task");
    store.toggle_task(other.id).await.expect("task exists");

    assert_eq!(store.task_count_for_date(due), 2);
    assert_eq!(store.task_count_for_date(date(2025, 6, 16)), 1);
    assert_eq!(
        store.task_count_for_date_where(date(2025, 6, 16), |t| !t.completed),
        0
    );
}

#[tokio::test]
async fn test_grouped_tasks_bucket_order() {
    let (_temp_dir, mut store) = create_test_store().await;

    let today = date(2025, 6, 15);
    for (title, due) in [
        ("Far", Some(date(2025, 8, 1))),
        ("Now", Some(today)),
        ("Loose", None),
        ("Soon", Some(date(2025, 6, 16))),
    ] {
        store
            .create_task(&CreateTask {
                title: title.to_string(),
                due_date: due,
                ..Default::default()
            })
            .await
            .expect("Failed to create task");
    }

    let grouped = store.grouped_tasks_for(today);
    let labels: Vec<&str> = grouped.iter().map(|(g, _)| g.label()).collect();
    assert_eq!(
        labels,
        vec!["Today", "Tomorrow", "August 2025", "No Due Date"]
    );
    assert_eq!(grouped[0].1[0].title, "Now");
}

#[tokio::test]
async fn test_default_categories_are_seeded() {
    let (_temp_dir, store) = create_test_store().await;

    assert_eq!(store.categories().len(), 5);
    assert!(store.categories().iter().any(|c| c.id == "work"));
}

#[tokio::test]
async fn test_category_for_tolerates_dangling_reference() {
    let (_temp_dir, mut store) = create_test_store().await;

    let task = store
        .create_task(&CreateTask {
            title: "Mystery".to_string(),
            category_id: Some("no-such-category".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create task");

    let task = store.get_task(task.id).unwrap().clone();
    assert!(store.category_for(&task).is_none());
}

#[tokio::test]
async fn test_add_category_slug_collision() {
    let (_temp_dir, mut store) = create_test_store().await;

    let first = store
        .add_category("Side Projects", "#FF0000")
        .await
        .expect("Failed to add category");
    assert_eq!(first.id, "side-projects");

    let second = store
        .add_category("Side Projects", "#00FF00")
        .await
        .expect("Failed to add category");
    assert_ne!(second.id, first.id);
    assert!(second.id.starts_with("side-projects-"));
}

#[tokio::test]
async fn test_delete_category_leaves_tasks_alone() {
    let (_temp_dir, mut store) = create_test_store().await;

    let task = store
        .create_task(&CreateTask {
            title: "Inbox zero".to_string(),
            category_id: Some("work".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create task");

    let removed = store.delete_category("work").await;
    assert!(removed.is_some());

    // The task keeps its now-dangling reference
    let task = store.get_task(task.id).unwrap();
    assert_eq!(task.category_id.as_deref(), Some("work"));
}

#[tokio::test]
async fn test_reminder_lifecycle() {
    let (_temp_dir, mut store) = create_test_store().await;

    let reminder = store
        .add_reminder(&CreateReminder {
            text: "Renew passport".to_string(),
            date: Some(date(2025, 9, 1)),
            ..Default::default()
        })
        .await
        .expect("Failed to add reminder");
    assert!(!reminder.completed);

    let toggled = store
        .toggle_reminder(reminder.id)
        .await
        .expect("reminder exists");
    assert!(toggled.completed);

    assert!(store.delete_reminder(reminder.id).await.is_some());
    assert!(store.reminders().is_empty());
    assert!(store.toggle_reminder(reminder.id).await.is_none());
}
