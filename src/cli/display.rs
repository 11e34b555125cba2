//! Console presentation of load statistics and aggregate results

use colored::*;

use crate::app::models::PhoneRecord;
use crate::app::services::aggregator::{AggregateReport, ValidationSummary};
use crate::app::services::cell_csv_parser::ParseStats;

/// Format the load statistics block
pub fn format_load_summary(stats: &ParseStats, missing_columns: &[String]) -> String {
    let mut lines = vec![format!("{}", "Dataset Summary".bright_green().bold())];

    lines.push(format!(
        "  {} {}",
        "Rows read:".bright_cyan(),
        stats.total_records.to_string().bright_white()
    ));
    lines.push(format!(
        "  {} {}",
        "Records parsed:".bright_cyan(),
        stats.records_parsed.to_string().bright_white().bold()
    ));
    if stats.records_skipped > 0 {
        lines.push(format!(
            "  {} {}",
            "Rows skipped:".bright_red(),
            stats.records_skipped.to_string().bright_red().bold()
        ));
    }
    if !missing_columns.is_empty() {
        lines.push(format!(
            "  {} {}",
            "Missing columns:".bright_yellow(),
            missing_columns.join(", ")
        ));
    }

    lines.join("\n")
}

/// Format one line per record: manufacturer, model, announced year, status
pub fn format_record_listing(records: &[PhoneRecord]) -> String {
    let mut lines = vec![format!("{}", "Records".bright_green().bold())];

    for record in records {
        lines.push(format!(
            "  {} {} | {} {} | {} {}",
            "Brand/Model:".bright_cyan(),
            record.display_name(),
            "Announced:".bright_cyan(),
            record
                .announced_year
                .map(|year| year.to_string())
                .unwrap_or_else(|| "-".to_string()),
            "Status:".bright_cyan(),
            if record.launch_status.is_empty() {
                "-"
            } else {
                record.launch_status.as_str()
            }
        ));
    }

    lines.join("\n")
}

/// Format the four aggregate answers followed by the validation audit
pub fn format_report(report: &AggregateReport<'_>) -> String {
    let mut lines = vec![format!("{}", "Aggregate Report".bright_green().bold())];

    match &report.heaviest_manufacturer {
        Some(heaviest) => lines.push(format!(
            "  {} {} ({} g average over {} devices)",
            "Highest average weight:".bright_cyan(),
            heaviest.manufacturer.bright_white().bold(),
            format!("{:.2}", heaviest.average_weight).bright_white(),
            heaviest.sample_count
        )),
        None => lines.push(format!(
            "  {} {}",
            "Highest average weight:".bright_cyan(),
            "no result".bright_yellow()
        )),
    }

    lines.push(format!(
        "  {} {}",
        "Announced/released in different years:".bright_cyan(),
        report.mismatch_count().to_string().bright_white().bold()
    ));
    for record in &report.release_mismatches {
        lines.push(format!(
            "    - {} (announced {}, released {})",
            record.display_name(),
            record
                .announced_year
                .map(|year| year.to_string())
                .unwrap_or_default(),
            record
                .release_year()
                .map(|year| year.to_string())
                .unwrap_or_default()
        ));
    }

    lines.push(format!(
        "  {} {}",
        "Phones with a single sensor:".bright_cyan(),
        report.single_sensor_count.to_string().bright_white().bold()
    ));

    match report.peak_launch_year {
        Some(peak) => lines.push(format!(
            "  {} {} ({} launches)",
            "Peak launch year:".bright_cyan(),
            peak.year.to_string().bright_white().bold(),
            peak.count
        )),
        None => lines.push(format!(
            "  {} {}",
            "Peak launch year:".bright_cyan(),
            "no result".bright_yellow()
        )),
    }

    lines.push(String::new());
    lines.push(format_validation(&report.validation));
    lines.join("\n")
}

fn format_validation(summary: &ValidationSummary) -> String {
    let rows = [
        ("Valid records:", summary.valid_records),
        ("Invalid weight:", summary.invalid_weight),
        ("Invalid display size:", summary.invalid_display_size),
        ("Invalid launch status:", summary.invalid_launch_status),
        ("Invalid sensor list:", summary.invalid_sensors),
        ("Invalid resolution:", summary.invalid_resolution),
    ];

    let mut lines = vec![format!(
        "{} ({:.1}% valid)",
        "Field Quality".bright_green().bold(),
        summary.validity_rate()
    )];
    for (label, count) in rows {
        lines.push(format!(
            "  {} {}/{}",
            label.bright_cyan(),
            count,
            summary.total_records
        ));
    }

    lines.join("\n")
}
