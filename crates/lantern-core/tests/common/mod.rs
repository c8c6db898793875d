use std::path::{Path, PathBuf};

use lantern_core::{StoreBuilder, TaskStore};
use tempfile::TempDir;

/// Helper function to create a store backed by a fresh temporary database
pub async fn create_test_store() -> (TempDir, TaskStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir.path().join("test.db")).await;
    (temp_dir, store)
}

/// Opens (or reopens) a store at the given database path
pub async fn open_store(db_path: &Path) -> TaskStore {
    StoreBuilder::new()
        .with_database_path(Some(PathBuf::from(db_path)))
        .build()
        .await
        .expect("Failed to create store")
}
