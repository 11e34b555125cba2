//! Command-line argument definitions for the cell processor
//!
//! This module defines the CLI interface using the clap derive API and maps
//! parsed arguments onto a [`ProcessingConfig`].

use crate::Result;
use crate::config::ProcessingConfig;
use crate::constants::{DEFAULT_INPUT_FILE, MIN_VALID_RELEASE_YEAR, PEAK_YEAR_THRESHOLD};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the phone specification reporter
///
/// Loads a CSV dataset of mobile phone specifications and reports aggregate
/// statistics over the normalised records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cell-processor",
    version,
    about = "Report aggregate statistics over a mobile phone specification CSV",
    long_about = "Loads a CSV dataset of mobile phone specifications, extracts typed values \
                  from free-text weight, display size and launch fields, and reports the \
                  heaviest manufacturer on average, devices released in a different year \
                  than announced, devices listing a single sensor, and the busiest launch year."
)]
pub struct Args {
    /// Path to the phone specification CSV file
    #[arg(value_name = "CSV_PATH", default_value = DEFAULT_INPUT_FILE)]
    pub input_path: PathBuf,

    /// Print every loaded record before the aggregate report
    #[arg(
        short = 'l',
        long = "list-records",
        help = "Print manufacturer, model, announced year and status of every record"
    )]
    pub list_records: bool,

    /// Earliest release year a launch status may carry and still be valid
    #[arg(
        long = "min-release-year",
        value_name = "YEAR",
        default_value_t = MIN_VALID_RELEASE_YEAR,
        help = "Earliest release year accepted as a valid launch status"
    )]
    pub min_release_year: i32,

    /// Only announced years strictly after this count toward the peak launch year
    #[arg(
        long = "peak-year-after",
        value_name = "YEAR",
        default_value_t = PEAK_YEAR_THRESHOLD,
        help = "Count only announced years after this toward the peak launch year"
    )]
    pub peak_year_after: i32,

    /// Disable coloured console output
    #[arg(long = "no-color", help = "Disable coloured output")]
    pub no_color: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress logging except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build and validate the processing configuration
    pub fn to_config(&self) -> Result<ProcessingConfig> {
        let mut config = ProcessingConfig::default()
            .with_input_path(&self.input_path)
            .with_min_release_year(self.min_release_year)
            .with_peak_year_after(self.peak_year_after);

        if self.list_records {
            config = config.with_record_listing();
        }
        if self.no_color {
            config = config.without_color();
        }

        config.validate()?;
        Ok(config)
    }
}
