/// Normalize a header field name by replacing control characters (newlines,
/// tabs, etc.) with spaces and collapsing whitespace runs into single spaces.
/// Leading and trailing whitespace is removed.
pub fn normalize_header(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
