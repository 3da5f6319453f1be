use kheti_core::{Farmbook, FarmbookBuilder};
use tempfile::TempDir;

/// Helper function to create a test farmbook
pub async fn create_test_farmbook() -> (TempDir, Farmbook) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let farmbook = FarmbookBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create farmbook");
    (temp_dir, farmbook)
}
