//! Data models for cell dataset processing
//!
//! This module contains the core record structure for a single mobile phone
//! specification row, together with the derived validations callers use to
//! judge field quality. Derived values are computed on demand and never
//! stored alongside the raw fields.

use crate::app::services::cell_csv_parser::field_parsers::extract_release_year;
use crate::constants::{MIN_VALID_RELEASE_YEAR, SENSOR_SEPARATOR, launch_status};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static RESOLUTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+x\d+$").expect("Invalid regex pattern"));

// =============================================================================
// Phone Record Structure
// =============================================================================

/// One mobile phone specification parsed from a CSV data row
///
/// Numeric fields hold either a parsed non-negative value or `None`; a
/// malformed source cell never surfaces as an error. Records are immutable
/// once parsed.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct PhoneRecord {
    /// Manufacturer (OEM) name, required for a record to be valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    /// Model name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// First four digit year found in the launch announcement text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announced_year: Option<i32>,

    /// Raw launch status, may embed the release year
    pub launch_status: String,

    /// Body dimensions, unparsed
    pub body_dimensions: String,

    /// First number found in the body weight text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_weight_grams: Option<f64>,

    /// SIM description
    pub sim: String,

    /// Display technology description
    pub display_type: String,

    /// First number found in the display size text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_size_inches: Option<f64>,

    /// Display resolution, expected as `<width>x<height>`
    pub display_resolution: String,

    /// Comma-separated sensor names
    pub features_sensors: String,

    /// Platform operating system
    pub platform_os: String,
}

impl PhoneRecord {
    /// Year the device shipped, taken from the launch status text
    pub fn release_year(&self) -> Option<i32> {
        extract_release_year(&self.launch_status)
    }

    /// A record is valid when manufacturer, model and announced year are present
    pub fn is_valid(&self) -> bool {
        self.manufacturer.is_some() && self.model.is_some() && self.announced_year.is_some()
    }

    pub fn has_valid_weight(&self) -> bool {
        self.body_weight_grams.is_some_and(|weight| weight > 0.0)
    }

    pub fn has_valid_display_size(&self) -> bool {
        self.display_size_inches.is_some_and(|size| size > 0.0)
    }

    /// Launch status is valid when discontinued, cancelled or released in 1999 or later
    pub fn has_valid_launch_status(&self) -> bool {
        self.has_valid_launch_status_since(MIN_VALID_RELEASE_YEAR)
    }

    /// Launch status validity against a custom earliest release year
    ///
    /// The year checked is the derived [`release_year`](Self::release_year),
    /// so in `"Released 1998, re-released 2005"` only 1998 counts.
    pub fn has_valid_launch_status_since(&self, min_year: i32) -> bool {
        match self.launch_status.as_str() {
            launch_status::DISCONTINUED | launch_status::CANCELLED => true,
            _ => self.release_year().is_some_and(|year| year >= min_year),
        }
    }

    /// Sensor list is valid when non-empty and no entry is blank
    pub fn has_valid_sensors(&self) -> bool {
        !self.features_sensors.is_empty()
            && self
                .features_sensors
                .split(SENSOR_SEPARATOR)
                .all(|sensor| !sensor.trim().is_empty())
    }

    pub fn has_valid_resolution(&self) -> bool {
        RESOLUTION_PATTERN.is_match(&self.display_resolution)
    }

    /// Number of entries the raw sensor field splits into
    ///
    /// Blank entries are counted, so an empty field yields one.
    pub fn sensor_entry_count(&self) -> usize {
        self.features_sensors.split(SENSOR_SEPARATOR).count()
    }

    /// Whether announced and release years are both known and disagree
    pub fn has_release_year_mismatch(&self) -> bool {
        match (self.announced_year, self.release_year()) {
            (Some(announced), Some(released)) => announced != released,
            _ => false,
        }
    }

    /// Display label combining manufacturer and model
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.manufacturer.as_deref().unwrap_or("<unknown>"),
            self.model.as_deref().unwrap_or("<unknown>")
        )
    }
}
