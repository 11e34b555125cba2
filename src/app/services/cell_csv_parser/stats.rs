//! Parsing statistics and result structures for phone dataset loading
//!
//! This module provides types for tracking load success rates and carrying
//! parsed records to the aggregation stage.

use crate::app::models::PhoneRecord;
use crate::constants::SUCCESS_RATE_THRESHOLD;

/// Parsing result with records and basic statistics
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// Parsed phone records in input order
    pub records: Vec<PhoneRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,

    /// Expected columns absent from the header
    pub missing_columns: Vec<String>,
}

impl ParseResult {
    /// Result for a source that could not be read
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of data rows encountered
    pub total_records: usize,

    /// Number of records successfully parsed
    pub records_parsed: usize,

    /// Number of rows skipped because the CSV reader rejected them
    pub records_skipped: usize,

    /// List of parsing errors for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_records: 0,
            records_parsed: 0,
            records_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_records as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > SUCCESS_RATE_THRESHOLD
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
