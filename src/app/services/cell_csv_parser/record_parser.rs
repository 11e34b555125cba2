//! Individual CSV record parsing for phone specification files
//!
//! Binds each expected column to its extraction rule and assembles a
//! [`PhoneRecord`]. Parsing a row cannot fail: cells that do not yield a
//! value become `None` or empty text.

use csv::StringRecord;
use tracing::trace;

use super::column_mapping::ColumnMapping;
use super::field_parsers::{
    extract_number, extract_year, get_field, passthrough, passthrough_optional,
};
use crate::app::models::PhoneRecord;
use crate::constants::columns;

/// Parse a single phone record from CSV data
pub fn parse_phone_record(record: &StringRecord, mapping: &ColumnMapping) -> PhoneRecord {
    let field = |name: &str| get_field(record, mapping, name);

    PhoneRecord {
        manufacturer: passthrough_optional(field(columns::OEM)),
        model: passthrough_optional(field(columns::MODEL)),
        announced_year: parse_year_field(field(columns::LAUNCH_ANNOUNCED), columns::LAUNCH_ANNOUNCED),
        launch_status: passthrough(field(columns::LAUNCH_STATUS)),
        body_dimensions: passthrough(field(columns::BODY_DIMENSIONS)),
        body_weight_grams: parse_number_field(field(columns::BODY_WEIGHT), columns::BODY_WEIGHT),
        sim: passthrough(field(columns::BODY_SIM)),
        display_type: passthrough(field(columns::DISPLAY_TYPE)),
        display_size_inches: parse_number_field(field(columns::DISPLAY_SIZE), columns::DISPLAY_SIZE),
        display_resolution: passthrough(field(columns::DISPLAY_RESOLUTION)),
        features_sensors: passthrough(field(columns::FEATURES_SENSORS)),
        platform_os: passthrough(field(columns::PLATFORM_OS)),
    }
}

/// Numeric-from-text with a trace line when non-blank text yields nothing
fn parse_number_field(raw: &str, column_name: &str) -> Option<f64> {
    let value = extract_number(raw);
    if value.is_none() && !raw.is_empty() {
        trace!("No number in '{}' = '{}', treating as absent", column_name, raw);
    }
    value
}

/// Year-from-text with a trace line when non-blank text yields nothing
fn parse_year_field(raw: &str, column_name: &str) -> Option<i32> {
    let value = extract_year(raw);
    if value.is_none() && !raw.is_empty() {
        trace!("No year in '{}' = '{}', treating as absent", column_name, raw);
    }
    value
}
