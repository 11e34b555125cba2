//! Application constants for the cell processor
//!
//! This module contains the expected column names, launch status tokens and
//! default thresholds used throughout the cell processor application.

// =============================================================================
// Input Defaults
// =============================================================================

/// Dataset file read when no path is given on the command line
pub const DEFAULT_INPUT_FILE: &str = "cells.csv";

// =============================================================================
// Column Names
// =============================================================================

/// Expected CSV column names (matched case-insensitively)
pub mod columns {
    pub const OEM: &str = "oem";
    pub const MODEL: &str = "model";
    pub const LAUNCH_ANNOUNCED: &str = "launch_announced";
    pub const LAUNCH_STATUS: &str = "launch_status";
    pub const BODY_DIMENSIONS: &str = "body_dimensions";
    pub const BODY_WEIGHT: &str = "body_weight";
    pub const BODY_SIM: &str = "body_sim";
    pub const DISPLAY_TYPE: &str = "display_type";
    pub const DISPLAY_SIZE: &str = "display_size";
    pub const DISPLAY_RESOLUTION: &str = "display_resolution";
    pub const FEATURES_SENSORS: &str = "features_sensors";
    pub const PLATFORM_OS: &str = "platform_os";

    /// All columns the record parser reads
    pub const EXPECTED: &[&str] = &[
        OEM,
        MODEL,
        LAUNCH_ANNOUNCED,
        LAUNCH_STATUS,
        BODY_DIMENSIONS,
        BODY_WEIGHT,
        BODY_SIM,
        DISPLAY_TYPE,
        DISPLAY_SIZE,
        DISPLAY_RESOLUTION,
        FEATURES_SENSORS,
        PLATFORM_OS,
    ];
}

// =============================================================================
// Launch Status
// =============================================================================

/// Literal launch status values that are valid without an embedded year
pub mod launch_status {
    pub const DISCONTINUED: &str = "Discontinued";
    pub const CANCELLED: &str = "Cancelled";
}

/// Earliest release year accepted as a valid launch status
pub const MIN_VALID_RELEASE_YEAR: i32 = 1999;

/// Announced years must be strictly greater than this to count toward the peak year
pub const PEAK_YEAR_THRESHOLD: i32 = 1999;

// =============================================================================
// Field Separators
// =============================================================================

/// Separator between entries of the feature sensor list
pub const SENSOR_SEPARATOR: char = ',';

/// Load success rate (percent) above which a load is considered healthy
pub const SUCCESS_RATE_THRESHOLD: f64 = 90.0;
