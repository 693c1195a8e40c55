use std::fmt;
use std::fs;

use anyhow::Result;
use csv::StringRecord;
use serde::Serialize;
use thiserror::Error;

use crate::utils::{normalize_header, write_error_to_log};

/// Field name that activates the age rule when present in the header
const AGE_FIELD: &str = "age";

/// Field name that activates the email rule when present in the header
const EMAIL_FIELD: &str = "email";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("Missing value in '{field}'")]
    MissingValue { field: String },

    #[error("Invalid age '{value}'")]
    InvalidAge { value: String },

    #[error("Invalid email '{value}'")]
    InvalidEmail { value: String },

    #[error("File is empty")]
    EmptyFile,
}

/// One invalid row: its 1-based row number (the header line counts as row 1,
/// so the first data row is row 2) and the violations detected for it, in
/// detection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub row_number: usize,
    pub violations: Vec<RuleViolation>,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .violations
            .iter()
            .map(|violation| violation.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Row {}: {}", self.row_number, joined)
    }
}

/// Aggregated outcome of one validation pass.
///
/// Counts partition the data rows: every processed row is counted exactly
/// once, and `errors` holds one formatted string per invalid row, in row
/// order. The empty-file case is the lone exception: both counts are zero and
/// `errors` holds the single synthetic "File is empty" entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid_row_count: usize,
    pub invalid_row_count: usize,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn new() -> Self {
        ValidationReport {
            valid_row_count: 0,
            invalid_row_count: 0,
            errors: Vec::new(),
        }
    }

    fn empty_file() -> Self {
        ValidationReport {
            valid_row_count: 0,
            invalid_row_count: 0,
            errors: vec![RuleViolation::EmptyFile.to_string()],
        }
    }

    /// True when no problems were found (including the empty-file case)
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Render the report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Print the human-readable report to standard output
    pub fn print(&self) {
        println!("\n===== Data Validation Report =====");
        if self.errors.is_empty() {
            println!("No issues found. File is valid.");
        } else {
            for error in &self.errors {
                println!("{error}");
            }
        }
    }
}

/// Rules that only fire when their field exists in the header. The table is
/// built once at header-parse time instead of re-checking existence per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldRule {
    Age,
    Email,
}

pub struct RowValidator {
    csv_path: String,
}

impl RowValidator {
    //////////////////////////////////////////////////////////////
    ///  Public API
    //////////////////////////////////////////////////////////////

    /// Create a new RowValidator
    ///
    /// # Arguments
    /// * `csv_path` - Path to the CSV file to validate
    pub fn new(csv_path: &str) -> Self {
        RowValidator {
            csv_path: csv_path.to_string(),
        }
    }

    /// Validate the CSV file and return the aggregated report.
    ///
    /// Every in-scope problem (blank fields, malformed ages, malformed
    /// emails, an empty file) lands in the returned report; the `Err` arm is
    /// reserved for I/O failures such as an unreadable path. As a side
    /// channel the report is printed to stdout and, when errors exist,
    /// appended to the errors log. Neither affects the returned value.
    pub fn validate(&self) -> Result<ValidationReport> {
        let content = fs::read_to_string(&self.csv_path)?;
        let report = Self::validate_content(&content)?;

        report.print();
        if !report.errors.is_empty() {
            write_error_to_log("CSV Validation Error Report", &report.errors.join("\n"));
        }

        Ok(report)
    }

    //////////////////////////////////////////////////////////////
    ///  Private methods
    //////////////////////////////////////////////////////////////

    fn validate_content(content: &str) -> Result<ValidationReport> {
        if content.trim().is_empty() {
            return Ok(ValidationReport::empty_file());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
        let rule_table = Self::build_rule_table(&headers);

        let mut report = ValidationReport::new();

        // The header line is row 1, so data rows start at 2
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let row_number = index + 2;

            let violations = Self::evaluate_record(&headers, &rule_table, &record);
            if violations.is_empty() {
                report.valid_row_count += 1;
            } else {
                report.invalid_row_count += 1;
                report.errors.push(
                    RowError {
                        row_number,
                        violations,
                    }
                    .to_string(),
                );
            }
        }

        Ok(report)
    }

    /// Build the ordered rule table from the header field list.
    ///
    /// Presence checking covers every header field unconditionally, so only
    /// the conditional rules are registered here, keyed by column index.
    fn build_rule_table(headers: &[String]) -> Vec<(usize, FieldRule)> {
        let mut rule_table = Vec::new();

        if let Some(index) = headers.iter().position(|header| header == AGE_FIELD) {
            rule_table.push((index, FieldRule::Age));
        }
        if let Some(index) = headers.iter().position(|header| header == EMAIL_FIELD) {
            rule_table.push((index, FieldRule::Email));
        }

        rule_table
    }

    /// Evaluate every rule against one record, collecting all violations
    /// rather than stopping at the first.
    ///
    /// Ragged records are tolerated: cells absent from a short record are
    /// treated as blank, and cells beyond the header are ignored.
    fn evaluate_record(
        headers: &[String],
        rule_table: &[(usize, FieldRule)],
        record: &StringRecord,
    ) -> Vec<RuleViolation> {
        let mut violations = Vec::new();

        for (index, field) in headers.iter().enumerate() {
            let cell = record.get(index).unwrap_or("");
            if cell.trim().is_empty() {
                violations.push(RuleViolation::MissingValue {
                    field: field.clone(),
                });
            }
        }

        for (index, rule) in rule_table {
            let cell = record.get(*index).unwrap_or("");
            match rule {
                // Only optionally-signed base-10 integers parse; the raw cell
                // text is reported verbatim on failure
                FieldRule::Age => match cell.parse::<i64>() {
                    Ok(age) if age >= 0 => {}
                    _ => violations.push(RuleViolation::InvalidAge {
                        value: cell.to_string(),
                    }),
                },
                FieldRule::Email => {
                    if !cell.is_empty() && !cell.contains('@') {
                        violations.push(RuleViolation::InvalidEmail {
                            value: cell.to_string(),
                        });
                    }
                }
            }
        }

        violations
    }
}
