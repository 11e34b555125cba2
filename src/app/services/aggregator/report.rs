//! Aggregate report structure combining all query results

use super::audit::ValidationSummary;
use super::queries::{LaunchYearCount, ManufacturerWeight};
use crate::app::models::PhoneRecord;

/// Results of one aggregation pass over a record set
///
/// Borrows mismatched records from the collection it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateReport<'a> {
    /// Manufacturer with the highest mean weight, `None` when no weights exist
    pub heaviest_manufacturer: Option<ManufacturerWeight>,

    /// Records announced and released in different years, in input order
    pub release_mismatches: Vec<&'a PhoneRecord>,

    /// Records listing exactly one sensor entry
    pub single_sensor_count: usize,

    /// Busiest announcement year, `None` when no year qualifies
    pub peak_launch_year: Option<LaunchYearCount>,

    /// Field quality counts
    pub validation: ValidationSummary,
}

impl AggregateReport<'_> {
    /// Number of records with a release year mismatch
    pub fn mismatch_count(&self) -> usize {
        self.release_mismatches.len()
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Aggregate Summary: {} records | heaviest: {} | mismatches: {} | \
             single sensor: {} | peak year: {}",
            self.validation.total_records,
            self.heaviest_manufacturer
                .as_ref()
                .map(|m| format!("{} ({:.2} g)", m.manufacturer, m.average_weight))
                .unwrap_or_else(|| "none".to_string()),
            self.mismatch_count(),
            self.single_sensor_count,
            self.peak_launch_year
                .map(|p| format!("{} ({} launches)", p.year, p.count))
                .unwrap_or_else(|| "none".to_string()),
        )
    }
}
