//! Command implementation for the cell processor CLI
//!
//! This module contains the main execution flow: logging setup, dataset
//! loading with source-unavailable recovery, aggregation and reporting.

use crate::app::services::aggregator::Aggregator;
use crate::app::services::cell_csv_parser::{CellCsvParser, ParseResult, ParseStats};
use crate::cli::args::Args;
use crate::cli::display::{format_load_summary, format_record_listing, format_report};
use crate::config::ProcessingConfig;
use crate::{Error, Result};
use colored::*;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Outcome of one processing run for exit status reporting
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    /// Load statistics (all zero when the source was unavailable)
    pub stats: ParseStats,
    /// Whether the dataset could be read
    pub source_available: bool,
    /// Total processing time
    pub processing_time: Duration,
}

/// Main command runner for the cell processor
///
/// 1. Set up logging and configuration
/// 2. Load the dataset, falling back to an empty record set if unreadable
/// 3. Aggregate and print the report
pub fn run(args: Args) -> Result<RunOutcome> {
    setup_logging(&args)?;

    info!("Starting cell processor");
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config()?;
    execute(&config)
}

/// Load, aggregate and report for an already validated configuration
pub fn execute(config: &ProcessingConfig) -> Result<RunOutcome> {
    let start_time = Instant::now();

    if !config.color {
        colored::control::set_override(false);
    }

    let (result, source_available) = load_records(config);

    println!("{}", format_load_summary(&result.stats, &result.missing_columns));
    println!();

    if config.list_records {
        println!("{}", format_record_listing(&result.records));
        println!();
    }

    let aggregator = Aggregator::new(config);
    let report = aggregator.aggregate(&result.records);
    println!("{}", format_report(&report));

    let processing_time = start_time.elapsed();
    info!("Finished in {:?}", processing_time);

    Ok(RunOutcome {
        stats: result.stats,
        source_available,
        processing_time,
    })
}

/// Load the dataset, reporting an unreadable source once and continuing empty
pub fn load_records(config: &ProcessingConfig) -> (ParseResult, bool) {
    let parser = CellCsvParser::new();

    match parser.parse_file(&config.input_path) {
        Ok(result) => (result, true),
        Err(e) => {
            error!("Dataset unavailable, continuing with no records: {}", e);
            eprintln!("{} {}", "Error reading dataset:".bright_red().bold(), e);
            (ParseResult::empty(), false)
        }
    }
}

/// Set up structured logging
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cell_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
