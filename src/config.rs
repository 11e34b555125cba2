//! Configuration management and validation.
//!
//! Provides the processing configuration assembled from command-line
//! arguments: where the dataset lives, which thresholds the derived
//! validations and queries use, and what the report should include.

use crate::constants::{DEFAULT_INPUT_FILE, MIN_VALID_RELEASE_YEAR, PEAK_YEAR_THRESHOLD};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Global configuration for a processing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// CSV dataset to load
    pub input_path: PathBuf,

    /// Earliest year a launch status may carry and still be valid
    pub min_release_year: i32,

    /// Announced years must exceed this to count toward the peak launch year
    pub peak_year_after: i32,

    /// Print every loaded record before the aggregate report
    pub list_records: bool,

    /// Colourise console output
    pub color: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            min_release_year: MIN_VALID_RELEASE_YEAR,
            peak_year_after: PEAK_YEAR_THRESHOLD,
            list_records: false,
            color: true,
        }
    }
}

impl ProcessingConfig {
    /// Create configuration reading from a custom input path
    pub fn with_input_path(mut self, input_path: impl Into<PathBuf>) -> Self {
        self.input_path = input_path.into();
        self
    }

    /// Set the earliest valid release year
    pub fn with_min_release_year(mut self, year: i32) -> Self {
        self.min_release_year = year;
        self
    }

    /// Set the peak launch year threshold
    pub fn with_peak_year_after(mut self, year: i32) -> Self {
        self.peak_year_after = year;
        self
    }

    /// Enable the per-record listing
    pub fn with_record_listing(mut self) -> Self {
        self.list_records = true;
        self
    }

    /// Disable coloured output
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    /// Check the configuration for values that cannot produce a sensible report
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(Error::configuration("Input path cannot be empty"));
        }

        if !(0..=9999).contains(&self.min_release_year) {
            return Err(Error::configuration(format!(
                "Minimum release year must be a four digit year, got {}",
                self.min_release_year
            )));
        }

        if !(0..=9999).contains(&self.peak_year_after) {
            return Err(Error::configuration(format!(
                "Peak year threshold must be a four digit year, got {}",
                self.peak_year_after
            )));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
