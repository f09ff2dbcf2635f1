use stride_core::{PlanCatalog, Tracker, TrackerBuilder};
use tempfile::TempDir;

/// Helper function to create a test tracker over the built-in catalog
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_catalog(PlanCatalog::builtin().expect("Failed to load catalog"))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}
