//! Cell Processor Library
//!
//! A Rust library for loading CSV datasets of mobile phone specifications,
//! normalising their messy free-text fields into typed values and answering
//! a fixed set of aggregate queries over the result.
//!
//! This library provides tools for:
//! - Reading phone specification CSV files with case-insensitive column lookup
//! - Tolerant extraction of weights, display sizes and launch years from text
//! - Derived per-record validations (launch status, sensors, resolution)
//! - Insertion-ordered grouping with explicit tie-break rules
//! - Aggregate reporting (heaviest manufacturer, release mismatches, single
//!   sensor devices, peak launch year)

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod cell_csv_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod display;
}

// Re-export commonly used types
pub use app::models::PhoneRecord;
pub use config::ProcessingConfig;

/// Result type alias for the cell processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cell dataset processing
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The CSV source could not be opened or read
    #[error("Source unavailable '{path}': {message}")]
    SourceUnavailable {
        path: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a source unavailable error
    pub fn source_unavailable(
        path: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error means the dataset could not be read at all
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. } | Self::Io { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
