//! Column mapping for phone specification CSV headers
//!
//! This module resolves header names to column indexes. Lookup is
//! case-insensitive, and expected columns absent from the header are
//! recorded rather than treated as fatal.

use crate::constants::columns;
use csv::StringRecord;
use std::collections::HashMap;

/// Column mapping for a loaded header row
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Lowercased column name to index mapping
    pub name_to_index: HashMap<String, usize>,

    /// Expected columns not present in the header
    pub missing_columns: Vec<String>,

    /// Header columns the record parser does not read
    pub extra_columns: Vec<String>,
}

impl ColumnMapping {
    /// Analyze column headers against the expected column set
    pub fn analyze(headers: &StringRecord) -> Self {
        let mut name_to_index = HashMap::new();
        let mut extra_columns = Vec::new();

        for (index, header) in headers.iter().enumerate() {
            let column_name = header.trim().to_lowercase();

            if !columns::EXPECTED.contains(&column_name.as_str()) {
                extra_columns.push(column_name.clone());
            }

            // First occurrence wins for duplicated headers
            name_to_index.entry(column_name).or_insert(index);
        }

        let mut mapping = ColumnMapping {
            name_to_index,
            missing_columns: Vec::new(),
            extra_columns,
        };
        mapping.missing_columns = columns::EXPECTED
            .iter()
            .filter(|name| !mapping.has_column(name))
            .map(|name| name.to_string())
            .collect();

        mapping
    }

    /// Get the index for a given column name (case-insensitive)
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index
            .get(&column_name.trim().to_lowercase())
            .copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.get_index(column_name).is_some()
    }

    /// Whether every expected column was found
    pub fn is_complete(&self) -> bool {
        self.missing_columns.is_empty()
    }

    /// Get statistics about the column mapping (total, missing, extra)
    pub fn stats(&self) -> (usize, usize, usize) {
        (
            self.name_to_index.len(),
            self.missing_columns.len(),
            self.extra_columns.len(),
        )
    }
}
