//! Aggregate queries over parsed phone records
//!
//! Each query is a pure function of an immutable record slice. None of them
//! fail: an empty input produces `None` or zero.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::grouping::{MeanAccumulator, OrderedGroups};
use crate::app::models::PhoneRecord;

/// Manufacturer with the highest mean body weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturerWeight {
    pub manufacturer: String,
    /// Mean of the present weights, in grams
    pub average_weight: f64,
    /// Number of records that contributed a weight
    pub sample_count: usize,
}

/// Announced year with the most device launches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchYearCount {
    pub year: i32,
    pub count: usize,
}

/// Manufacturer with the highest average body weight
///
/// Only records with both a manufacturer and a weight take part. When several
/// manufacturers share the maximum mean, the one first seen in input order is
/// returned.
pub fn highest_average_weight(records: &[PhoneRecord]) -> Option<ManufacturerWeight> {
    let mut groups: OrderedGroups<&str, MeanAccumulator> = OrderedGroups::new();

    for record in records {
        if let (Some(manufacturer), Some(weight)) =
            (record.manufacturer.as_deref(), record.body_weight_grams)
        {
            groups
                .entry_or_insert_with(manufacturer, MeanAccumulator::default)
                .add(weight);
        }
    }

    debug!("Weight averages computed for {} manufacturers", groups.len());

    groups
        .max_by_score(MeanAccumulator::mean)
        .map(|(manufacturer, acc)| ManufacturerWeight {
            manufacturer: manufacturer.to_string(),
            average_weight: acc.mean(),
            sample_count: acc.count,
        })
}

/// Records whose announced and release years are both known and differ
///
/// Input order is preserved.
pub fn release_year_mismatches(records: &[PhoneRecord]) -> Vec<&PhoneRecord> {
    records
        .iter()
        .filter(|record| record.has_release_year_mismatch())
        .collect()
}

/// Number of records whose sensor field splits into exactly one entry
///
/// An empty sensor field splits into a single empty entry and is counted.
pub fn single_sensor_count(records: &[PhoneRecord]) -> usize {
    records
        .iter()
        .filter(|record| record.sensor_entry_count() == 1)
        .count()
}

/// Announced year with the most launches among years after `after_year`
///
/// Ties go to the year first seen in input order.
pub fn peak_launch_year(records: &[PhoneRecord], after_year: i32) -> Option<LaunchYearCount> {
    let mut groups: OrderedGroups<i32, usize> = OrderedGroups::new();

    for year in records
        .iter()
        .filter_map(|record| record.announced_year)
        .filter(|&year| year > after_year)
    {
        *groups.entry_or_insert_with(year, || 0) += 1;
    }

    groups
        .max_by_score(|&count| count)
        .map(|(&year, &count)| LaunchYearCount { year, count })
}
