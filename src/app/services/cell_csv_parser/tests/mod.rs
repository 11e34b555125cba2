//! Test utilities for phone dataset parser testing
//!
//! This module provides common fixtures and helper functions used across
//! the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

use super::column_mapping::ColumnMapping;
use csv::StringRecord;


/// Header row carrying every expected column
pub const FULL_HEADER: &str = "oem,model,launch_announced,launch_status,body_dimensions,body_weight,body_sim,display_type,display_size,display_resolution,features_sensors,platform_os";

/// Helper to create a complete test dataset
pub fn create_test_cells_csv() -> String {
    format!(
        r#"{FULL_HEADER}
Google,Pixel 4,"2019, October 15","Available. Released 2019, October 24",147.1 x 68.8 x 8.2 mm (5.79 x 2.71 x 0.32 in),162 g (5.71 oz),Nano-SIM and eSIM,"P-OLED capacitive touchscreen, 16M colors","5.7 inches, 81.3 cm2 (~81.0% screen-to-body ratio)",1080x2280,"Face ID, accelerometer, gyro, proximity, compass, barometer","Android 10, upgradable to Android 13"
Nokia,3310,2000,Discontinued,113 x 48 x 22 mm,133 g,Mini-SIM,Monochrome graphic,1.5 inches,84 x 48 pixels,,
Samsung,Galaxy S20,"2020, February 11","Available. Released 2020, March 06",151.7 x 69.1 x 7.9 mm,163 g (5.75 oz),Nano-SIM,Dynamic AMOLED 2X,6.2 inches,1440x3200,"Fingerprint (under display, ultrasonic), accelerometer",Android 10
Motorola,One Hyper,"2019, December 03","Available. Released 2020, January 01",161.9 x 76.6 x 9 mm,210 g,Nano-SIM,IPS LCD,6.5 inches,1080x2340,Fingerprint (rear-mounted),Android 10"#
    )
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}

/// Mapping built from the full expected header
pub fn full_mapping() -> ColumnMapping {
    ColumnMapping::analyze(&StringRecord::from(FULL_HEADER.split(',').collect::<Vec<_>>()))
}
