//! Display formatting for backend values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Calendar part of an ISO-8601 timestamp (`2024-05-01T10:00:00Z` → `2024-05-01`).
#[must_use]
pub fn short_date(raw: &str) -> &str {
    raw.split_once('T').map_or(raw, |(date, _)| date).trim()
}

/// `short_date` of an optional timestamp, empty when absent.
#[must_use]
pub fn optional_date(raw: Option<&str>) -> String {
    raw.map(short_date).unwrap_or_default().to_owned()
}

/// Count with its noun: "1 Comment", "3 Comments".
#[must_use]
pub fn count_label(count: usize, singular: &str, plural: &str) -> String {
    format!("{count} {}", if count == 1 { singular } else { plural })
}
