// reset; cargo run -p csv-validator
// Validates the bundled sample file and exits non-zero when it has invalid rows.

use validator_lib::{ERRORS_LOG_FILE, RowValidator};

/// Relative to the workspace root, where `cargo run` is expected to be invoked
const SAMPLE_DATA_PATH: &str = "csv-validator/data/users.csv";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let validator = RowValidator::new(SAMPLE_DATA_PATH);
    let report = validator.validate()?;

    if report.invalid_row_count > 0 {
        eprintln!(
            "❌ Validation failed: {} of {} rows invalid",
            report.invalid_row_count,
            report.valid_row_count + report.invalid_row_count
        );
        eprintln!("❌ Check {} for details.", ERRORS_LOG_FILE);
        std::process::exit(1);
    }

    println!("✅ Validation completed!");
    Ok(())
}
