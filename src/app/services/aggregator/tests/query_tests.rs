//! Tests for the aggregate queries

use super::*;
use crate::app::services::aggregator::queries::*;

#[test]
fn test_highest_average_weight() {
    let records = sample_records();

    let heaviest = highest_average_weight(&records).unwrap();

    assert_eq!(heaviest.manufacturer, "Motorola");
    assert_eq!(heaviest.average_weight, 210.0);
    assert_eq!(heaviest.sample_count, 1);
}

#[test]
fn test_highest_average_weight_averages_groups() {
    let records = vec![
        RecordBuilder::new("Apple", "A").weight(100.0).build(),
        RecordBuilder::new("Sony", "S").weight(170.0).build(),
        RecordBuilder::new("Apple", "B").weight(300.0).build(),
        RecordBuilder::new("Sony", "T").build(),
    ];

    let heaviest = highest_average_weight(&records).unwrap();

    assert_eq!(heaviest.manufacturer, "Apple");
    assert_eq!(heaviest.average_weight, 200.0);
    assert_eq!(heaviest.sample_count, 2);
}

#[test]
fn test_highest_average_weight_tie_goes_to_first_seen() {
    let records = vec![
        RecordBuilder::new("LG", "G1").weight(150.0).build(),
        RecordBuilder::new("HTC", "One").weight(150.0).build(),
        RecordBuilder::new("LG", "G2").weight(150.0).build(),
    ];

    let heaviest = highest_average_weight(&records).unwrap();
    assert_eq!(heaviest.manufacturer, "LG");

    let reversed: Vec<_> = records.into_iter().rev().collect();
    let heaviest = highest_average_weight(&reversed).unwrap();
    assert_eq!(heaviest.manufacturer, "LG");

    let records = vec![
        RecordBuilder::new("HTC", "One").weight(150.0).build(),
        RecordBuilder::new("LG", "G1").weight(150.0).build(),
    ];
    assert_eq!(highest_average_weight(&records).unwrap().manufacturer, "HTC");
}

#[test]
fn test_highest_average_weight_skips_unknowns() {
    let records = vec![
        RecordBuilder::anonymous().weight(900.0).build(),
        RecordBuilder::new("Nokia", "1100").build(),
    ];

    assert!(highest_average_weight(&records).is_none());
}

#[test]
fn test_release_year_mismatches_in_input_order() {
    let records = sample_records();

    let mismatches = release_year_mismatches(&records);

    let names: Vec<_> = mismatches.iter().map(|r| r.display_name()).collect();
    assert_eq!(names, vec!["Motorola One Hyper", "Google Pixel 4"]);
}

#[test]
fn test_release_year_mismatch_requires_both_years() {
    let records = vec![
        RecordBuilder::new("Nokia", "3310").announced(2000).status("Discontinued").build(),
        RecordBuilder::new("Sony", "X").status("Released 2020").build(),
        RecordBuilder::new("LG", "V").announced(2018).status("Released 2018").build(),
    ];

    assert!(release_year_mismatches(&records).is_empty());
}

#[test]
fn test_single_sensor_count_includes_empty_field() {
    let records = sample_records();

    // Nokia (empty field) and Motorola (one sensor)
    assert_eq!(single_sensor_count(&records), 2);
}

#[test]
fn test_single_sensor_count_edge_cases() {
    let records = vec![
        RecordBuilder::new("A", "1").sensors("").build(),
        RecordBuilder::new("B", "2").sensors("   ").build(),
        RecordBuilder::new("C", "3").sensors(",").build(),
        RecordBuilder::new("D", "4").sensors("Accelerometer").build(),
    ];

    assert_eq!(single_sensor_count(&records), 3);
}

#[test]
fn test_peak_launch_year() {
    let records = sample_records();

    let peak = peak_launch_year(&records, 1999).unwrap();

    assert_eq!(peak, LaunchYearCount { year: 2019, count: 3 });
}

#[test]
fn test_peak_launch_year_excludes_threshold_year() {
    let records = vec![
        RecordBuilder::new("A", "1").announced(1999).build(),
        RecordBuilder::new("B", "2").announced(1999).build(),
        RecordBuilder::new("C", "3").announced(2001).build(),
        RecordBuilder::new("D", "4").build(),
    ];

    let peak = peak_launch_year(&records, 1999).unwrap();
    assert_eq!(peak, LaunchYearCount { year: 2001, count: 1 });

    let only_old = &records[..2];
    assert!(peak_launch_year(only_old, 1999).is_none());
}

#[test]
fn test_peak_launch_year_tie_goes_to_first_seen() {
    let records = vec![
        RecordBuilder::new("A", "1").announced(2010).build(),
        RecordBuilder::new("B", "2").announced(2005).build(),
        RecordBuilder::new("C", "3").announced(2005).build(),
        RecordBuilder::new("D", "4").announced(2010).build(),
    ];

    let peak = peak_launch_year(&records, 1999).unwrap();
    assert_eq!(peak.year, 2010);
    assert_eq!(peak.count, 2);
}

#[test]
fn test_queries_on_empty_input() {
    let records: Vec<crate::app::models::PhoneRecord> = Vec::new();

    assert!(highest_average_weight(&records).is_none());
    assert!(release_year_mismatches(&records).is_empty());
    assert_eq!(single_sensor_count(&records), 0);
    assert!(peak_launch_year(&records, 1999).is_none());
}
