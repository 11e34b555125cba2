//! Test utilities for aggregate query testing
//!
//! Provides a small builder for phone records so each test states only the
//! fields its query reads.

use crate::app::models::PhoneRecord;

mod query_tests;

/// Builder for test phone records
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    record: PhoneRecord,
}

impl RecordBuilder {
    pub fn new(manufacturer: &str, model: &str) -> Self {
        Self {
            record: PhoneRecord {
                manufacturer: Some(manufacturer.to_string()),
                model: Some(model.to_string()),
                ..Default::default()
            },
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn weight(mut self, grams: f64) -> Self {
        self.record.body_weight_grams = Some(grams);
        self
    }

    pub fn announced(mut self, year: i32) -> Self {
        self.record.announced_year = Some(year);
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.record.launch_status = status.to_string();
        self
    }

    pub fn sensors(mut self, sensors: &str) -> Self {
        self.record.features_sensors = sensors.to_string();
        self
    }

    pub fn display(mut self, inches: f64, resolution: &str) -> Self {
        self.record.display_size_inches = Some(inches);
        self.record.display_resolution = resolution.to_string();
        self
    }

    pub fn build(self) -> PhoneRecord {
        self.record
    }
}

/// Mixed dataset exercising every query
pub fn sample_records() -> Vec<PhoneRecord> {
    vec![
        RecordBuilder::new("Nokia", "3310")
            .weight(133.0)
            .announced(2000)
            .status("Discontinued")
            .sensors("")
            .build(),
        RecordBuilder::new("Samsung", "Galaxy S20")
            .weight(163.0)
            .announced(2020)
            .status("Available. Released 2020, March")
            .sensors("Fingerprint, accelerometer, gyro")
            .display(6.2, "1440x3200")
            .build(),
        RecordBuilder::new("Motorola", "One Hyper")
            .weight(210.0)
            .announced(2019)
            .status("Available. Released 2020, January")
            .sensors("Fingerprint")
            .display(6.5, "1080x2340")
            .build(),
        RecordBuilder::new("Samsung", "Galaxy A10")
            .weight(168.0)
            .announced(2019)
            .status("Available. Released 2019, March")
            .sensors("Accelerometer, proximity")
            .display(6.2, "720x1520")
            .build(),
        RecordBuilder::new("Google", "Pixel 4")
            .announced(2019)
            .status("Announced 2019, Released 2020")
            .sensors("Face ID, accelerometer")
            .build(),
    ]
}
