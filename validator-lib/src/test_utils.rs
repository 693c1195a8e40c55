// Test utilities available to both unit and integration tests
// Only compiled when testing

use std::fs;
use std::path::Path;

/// Header line used by most validator fixtures
pub const USERS_HEADER: &str = "name,age,email,country";

/// Build a CSV body from the users header plus the given data rows
#[allow(dead_code)]
pub fn users_csv(rows: &[&str]) -> String {
    let mut content = String::from(USERS_HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    content
}

/// Write CSV content into `dir` and return the fixture path
#[allow(dead_code)]
pub fn write_csv_fixture(dir: &Path, content: &str) -> String {
    let path = dir.join("data.csv");
    fs::write(&path, content).expect("Failed to write CSV fixture");
    path.to_string_lossy().into_owned()
}
