//! Field parsing utilities for phone specification records
//!
//! This module provides the tolerant extraction functions applied to raw CSV
//! cells. Every function maps text to either a value or `None`; malformed
//! input is never an error.

use super::column_mapping::ColumnMapping;
use csv::StringRecord;
use regex::Regex;
use std::sync::LazyLock;

// ASCII digits only; `\d` is Unicode-aware in the regex crate.
static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("Invalid regex pattern"));

// The regex crate has no look-around, so the bounding non-digits are consumed
// and the year itself is captured.
static YEAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])([0-9]{4})(?:[^0-9]|$)").expect("Invalid regex pattern")
});

static RELEASED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\breleased\b").expect("Invalid regex pattern"));

/// Extract the first integer or decimal number from free text
///
/// `"150 g (5.29 oz)"` yields `150.0`; text without digits yields `None`.
pub fn extract_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    NUMBER_PATTERN
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Extract the first standalone four digit year from free text
///
/// The digits must be bounded by non-digits or the text edges, so longer
/// digit runs such as `"12345"` never produce a year.
pub fn extract_year(text: &str) -> Option<i32> {
    YEAR_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i32>().ok())
}

/// Extract the release year from a launch status
///
/// Prefers the first year following a `Released` marker and falls back to the
/// first year anywhere in the text.
pub fn extract_release_year(status: &str) -> Option<i32> {
    RELEASED_MARKER
        .find(status)
        .and_then(|marker| extract_year(&status[marker.end()..]))
        .or_else(|| extract_year(status))
}

/// Trimmed copy of a raw cell
pub fn passthrough(text: &str) -> String {
    text.trim().to_string()
}

/// Trimmed copy of a raw cell, absent when blank
pub fn passthrough_optional(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Get a field value from a CSV record, empty when the column or cell is missing
pub fn get_field<'a>(record: &'a StringRecord, mapping: &ColumnMapping, field_name: &str) -> &'a str {
    mapping
        .get_index(field_name)
        .and_then(|index| record.get(index))
        .map(|s| s.trim())
        .unwrap_or("")
}
