//! CSV parser for mobile phone specification datasets
//!
//! This module turns raw CSV rows into typed [`PhoneRecord`] values. Cell
//! content is parsed tolerantly: a weight without digits or a launch text
//! without a year becomes absent instead of failing the row.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and file handling
//! - [`column_mapping`] - Case-insensitive header resolution
//! - [`record_parser`] - Individual CSV record processing
//! - [`field_parsers`] - Pure text-to-value extraction functions
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cell_processor::app::services::cell_csv_parser::CellCsvParser;
//!
//! # fn example() -> cell_processor::Result<()> {
//! let parser = CellCsvParser::new();
//! let result = parser.parse_file(std::path::Path::new("cells.csv"))?;
//!
//! println!("Parsed {} records from {} rows",
//!          result.stats.records_parsed,
//!          result.stats.total_records);
//! # Ok(())
//! # }
//! ```
//!
//! [`PhoneRecord`]: crate::app::models::PhoneRecord

pub mod column_mapping;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use parser::CellCsvParser;
pub use stats::{ParseResult, ParseStats};
