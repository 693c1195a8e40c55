//! Report formatting tests: row numbering, the `; ` violation separator,
//! and the JSON rendering of the report.

use serde_json::Value;

mod common;
use common::{users_csv, validate_content};

// Violations are joined with "; " in detection order, prefixed by the
// 1-based row number (header counts as row 1)
#[test]
fn test_violations_joined_in_detection_order() {
    let report = validate_content(&users_csv(&[",30,bad,USA"]));

    assert_eq!(
        report.errors[0],
        "Row 2: Missing value in 'name'; Invalid email 'bad'"
    );
}

// Error strings carry the row's file position, counting the header
#[test]
fn test_row_numbers_match_file_positions() {
    let content = users_csv(&[
        "Alice,30,a@b.com,USA",
        ",25,b@c.com,Canada",
        "Bob,26,b@c.com,Canada",
        "Charlie,-5,c@d.com,UK",
    ]);

    let report = validate_content(&content);

    assert_eq!(report.errors.len(), 2);
    assert!(report.errors[0].starts_with("Row 3: "));
    assert!(report.errors[1].starts_with("Row 5: "));
}

#[test]
fn test_report_to_json() {
    let report = validate_content(&users_csv(&["Alice,30,a@b.com,USA", ",25,b@c.com,Canada"]));

    let json: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["valid_row_count"], 1);
    assert_eq!(json["invalid_row_count"], 1);
    assert_eq!(json["errors"].as_array().unwrap().len(), 1);
    assert!(
        json["errors"][0]
            .as_str()
            .unwrap()
            .contains("Missing value in 'name'")
    );
}
