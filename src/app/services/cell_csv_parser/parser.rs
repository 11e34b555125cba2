//! Core phone specification CSV parser implementation
//!
//! This module provides the main parser orchestration, handling file opening,
//! header analysis and coordination between the column mapping and the
//! record parser.

use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::record_parser::parse_phone_record;
use super::stats::{ParseResult, ParseStats};
use crate::{Error, Result};

/// CSV parser for phone specification datasets
///
/// This parser focuses on essential functionality:
/// - Case-insensitive column resolution with tolerance for missing/extra columns
/// - Tolerant per-field extraction (never fails on cell content)
/// - Row-level error isolation: an unreadable row is skipped and counted
#[derive(Debug, Default)]
pub struct CellCsvParser;

impl CellCsvParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a CSV file and return phone records with statistics
    ///
    /// Fails only when the source cannot be opened or its header cannot be
    /// read. The underlying file handle is released on every return path.
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing phone dataset: {}", file_path.display());

        let csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(file_path)
            .map_err(|e| {
                Error::source_unavailable(
                    file_path.display().to_string(),
                    format!("Failed to open file: {}", e),
                    Some(e),
                )
            })?;

        self.parse_csv(csv_reader, &file_path.display().to_string())
    }

    /// Parse CSV content from any reader, e.g. an in-memory buffer
    pub fn parse_reader<R: Read>(&self, reader: R, source_name: &str) -> Result<ParseResult> {
        let csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        self.parse_csv(csv_reader, source_name)
    }

    fn parse_csv<R: Read>(&self, mut csv_reader: csv::Reader<R>, source_name: &str) -> Result<ParseResult> {
        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        // Get column headers and create mapping
        let headers = csv_reader.headers().map_err(|e| {
            Error::source_unavailable(
                source_name,
                format!("Failed to read CSV headers: {}", e),
                Some(e),
            )
        })?;

        let column_mapping = ColumnMapping::analyze(headers);
        let (total_cols, missing_cols, extra_cols) = column_mapping.stats();
        debug!(
            "Column mapping: {} total, {} missing, {} extra",
            total_cols, missing_cols, extra_cols
        );
        if !column_mapping.is_complete() {
            warn!(
                "Missing expected columns in {}: {} (values will be treated as absent)",
                source_name,
                column_mapping.missing_columns.join(", ")
            );
        }

        for result in csv_reader.records() {
            stats.total_records += 1;

            match result {
                Ok(record) => {
                    records.push(parse_phone_record(&record, &column_mapping));
                    stats.records_parsed += 1;
                }
                Err(e) => {
                    stats.records_skipped += 1;
                    let error = Error::csv_parsing(
                        source_name,
                        format!("unreadable row at record {}", stats.total_records),
                        Some(e),
                    );
                    debug!("Skipped record {}: {:?}", stats.total_records, error);
                    stats.errors.push(error.to_string());
                }
            }
        }

        info!(
            "Parsed {} records from {} rows in {}",
            stats.records_parsed, stats.total_records, source_name
        );
        if stats.total_records > 0 && !stats.is_successful() {
            warn!(
                "Only {:.1}% of rows in {} could be read",
                stats.success_rate(),
                source_name
            );
        }

        Ok(ParseResult {
            records,
            stats,
            missing_columns: column_mapping.missing_columns,
        })
    }
}
