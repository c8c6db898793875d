use jiff::civil::date;
use lantern_core::{Database, Priority, Reminder, Task};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (_temp_file, _db) = create_test_db();

    // Schema creation must succeed on a brand-new file
    assert!(_temp_file.path().exists());
}

#[test]
fn test_get_missing_key() {
    let (_temp_file, db) = create_test_db();

    let value = db.get("todos").expect("Failed to read value");
    assert!(value.is_none());
}

#[test]
fn test_put_and_get_round_trip() {
    let (_temp_file, mut db) = create_test_db();

    db.put("todos", "[]").expect("Failed to write value");
    let value = db.get("todos").expect("Failed to read value");
    assert_eq!(value.as_deref(), Some("[]"));
}

#[test]
fn test_put_replaces_existing_value() {
    let (_temp_file, mut db) = create_test_db();

    db.put("categories", "first").expect("Failed to write");
    db.put("categories", "second").expect("Failed to write");

    let value = db.get("categories").expect("Failed to read value");
    assert_eq!(value.as_deref(), Some("second"));
}

#[test]
fn test_keys_are_independent() {
    let (_temp_file, mut db) = create_test_db();

    db.put("todos", "a").expect("Failed to write");
    db.put("reminders", "b").expect("Failed to write");

    assert_eq!(db.get("todos").unwrap().as_deref(), Some("a"));
    assert_eq!(db.get("reminders").unwrap().as_deref(), Some("b"));
}

#[test]
fn test_task_collection_round_trip() {
    let (_temp_file, mut db) = create_test_db();

    let tasks = vec![Task {
        id: 1,
        title: "Water the plants".to_string(),
        description: None,
        completed: false,
        created_at: "2025-06-01T08:00:00Z".parse().unwrap(),
        updated_at: "2025-06-01T08:00:00Z".parse().unwrap(),
        priority: Priority::Low,
        category_id: Some("personal".to_string()),
        due_date: Some(date(2025, 6, 2)),
        subtasks: vec![],
        links: vec![],
    }];

    db.save_tasks(&tasks).expect("Failed to save tasks");
    let loaded = db.load_tasks().expect("Failed to load tasks");
    assert_eq!(loaded, tasks);
}

#[test]
fn test_missing_collection_loads_empty() {
    let (_temp_file, db) = create_test_db();

    assert!(db.load_tasks().expect("Failed to load").is_empty());
    assert!(db.load_categories().expect("Failed to load").is_empty());
    assert!(db.load_reminders().expect("Failed to load").is_empty());
}

#[test]
fn test_unparseable_collection_loads_empty() {
    let (_temp_file, mut db) = create_test_db();

    db.put("reminders", "{not json").expect("Failed to write");

    let reminders: Vec<Reminder> = db.load_reminders().expect("Failed to load reminders");
    assert!(reminders.is_empty());
}

#[test]
fn test_reopening_database_preserves_values() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");

    {
        let mut db = Database::new(temp_file.path()).expect("Failed to create database");
        db.put("todos", "[1]").expect("Failed to write");
    }

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(db.get("todos").unwrap().as_deref(), Some("[1]"));
}
