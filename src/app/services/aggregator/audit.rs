//! Field quality audit over a loaded record set
//!
//! Tallies the derived per-record validations so the report can show how much
//! of the dataset was usable for each query.

use serde::{Deserialize, Serialize};

use crate::app::models::PhoneRecord;
use crate::constants::MIN_VALID_RELEASE_YEAR;

/// Counts of records failing each derived validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub total_records: usize,
    /// Records with manufacturer, model and announced year present
    pub valid_records: usize,
    pub invalid_weight: usize,
    pub invalid_display_size: usize,
    pub invalid_launch_status: usize,
    pub invalid_sensors: usize,
    pub invalid_resolution: usize,
}

impl ValidationSummary {
    /// Audit records using the default earliest release year
    pub fn from_records(records: &[PhoneRecord]) -> Self {
        Self::from_records_with_min_year(records, MIN_VALID_RELEASE_YEAR)
    }

    pub fn from_records_with_min_year(records: &[PhoneRecord], min_release_year: i32) -> Self {
        let mut summary = Self {
            total_records: records.len(),
            ..Default::default()
        };

        for record in records {
            summary.valid_records += usize::from(record.is_valid());
            summary.invalid_weight += usize::from(!record.has_valid_weight());
            summary.invalid_display_size += usize::from(!record.has_valid_display_size());
            summary.invalid_launch_status +=
                usize::from(!record.has_valid_launch_status_since(min_release_year));
            summary.invalid_sensors += usize::from(!record.has_valid_sensors());
            summary.invalid_resolution += usize::from(!record.has_valid_resolution());
        }

        summary
    }

    /// Share of records that are valid, as a percentage
    pub fn validity_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.valid_records as f64 / self.total_records as f64) * 100.0
        }
    }
}
