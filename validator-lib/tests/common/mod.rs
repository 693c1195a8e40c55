use tempfile::TempDir;
use validator_lib::{RowValidator, ValidationReport};

// Re-export shared test utilities from src/test_utils.rs
#[allow(unused_imports)]
pub use validator_lib::test_utils::{USERS_HEADER, users_csv, write_csv_fixture};

/// Validate CSV content through a throwaway on-disk file
#[allow(dead_code)]
pub fn validate_content(content: &str) -> ValidationReport {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_csv_fixture(dir.path(), content);

    RowValidator::new(&path)
        .validate()
        .expect("validation should only fail on unreadable files")
}
