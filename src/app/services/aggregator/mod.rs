//! Aggregation of parsed phone records into summary results
//!
//! This module answers the fixed set of questions asked of a phone dataset
//! once it is fully loaded. Every query is a pure function of an immutable
//! record slice, so running the aggregator twice over the same records gives
//! identical results.
//!
//! # Architecture
//!
//! - [`grouping`] - Insertion-ordered accumulation with first-seen tie-breaks
//! - [`queries`] - The four aggregate queries
//! - [`audit`] - Counts of records failing each derived validation
//! - [`report`] - Combined result structure
//!
//! # Queries
//!
//! 1. **Heaviest manufacturer**: highest mean body weight per manufacturer
//! 2. **Release mismatches**: records announced and released in different years
//! 3. **Single sensor count**: records whose sensor list has exactly one entry
//! 4. **Peak launch year**: announcement year with the most launches after 1999
//!
//! # Example Usage
//!
//! ```rust
//! use cell_processor::app::services::aggregator::Aggregator;
//! use cell_processor::config::ProcessingConfig;
//!
//! let aggregator = Aggregator::new(&ProcessingConfig::default());
//! let report = aggregator.aggregate(&[]);
//!
//! assert!(report.heaviest_manufacturer.is_none());
//! assert_eq!(report.single_sensor_count, 0);
//! assert!(report.peak_launch_year.is_none());
//! ```

pub mod audit;
pub mod grouping;
pub mod queries;
pub mod report;

#[cfg(test)]
pub mod tests;

use tracing::info;

use crate::app::models::PhoneRecord;
use crate::config::ProcessingConfig;

// Re-export main types for easy access
pub use audit::ValidationSummary;
pub use grouping::{MeanAccumulator, OrderedGroups};
pub use queries::{
    LaunchYearCount, ManufacturerWeight, highest_average_weight, peak_launch_year,
    release_year_mismatches, single_sensor_count,
};
pub use report::AggregateReport;

/// Runs every aggregate query over a record set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregator {
    peak_year_after: i32,
    min_release_year: i32,
}

impl Aggregator {
    /// Create an aggregator using the thresholds from the processing configuration
    pub fn new(config: &ProcessingConfig) -> Self {
        Self {
            peak_year_after: config.peak_year_after,
            min_release_year: config.min_release_year,
        }
    }

    /// Compute all aggregate results for `records`
    pub fn aggregate<'a>(&self, records: &'a [PhoneRecord]) -> AggregateReport<'a> {
        let report = AggregateReport {
            heaviest_manufacturer: highest_average_weight(records),
            release_mismatches: release_year_mismatches(records),
            single_sensor_count: single_sensor_count(records),
            peak_launch_year: peak_launch_year(records, self.peak_year_after),
            validation: ValidationSummary::from_records_with_min_year(
                records,
                self.min_release_year,
            ),
        };

        info!("{}", report.summary());
        report
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(&ProcessingConfig::default())
    }
}
