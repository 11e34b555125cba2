//! Performance benchmarks for dataset loading and aggregation
//!
//! Measures CSV parsing with tolerant field extraction and the full
//! aggregate report over synthetic datasets of increasing size.

use cell_processor::app::services::aggregator::Aggregator;
use cell_processor::app::services::cell_csv_parser::CellCsvParser;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const HEADER: &str = "oem,model,launch_announced,launch_status,body_dimensions,body_weight,body_sim,display_type,display_size,display_resolution,features_sensors,platform_os";

const MANUFACTURERS: [&str; 5] = ["Nokia", "Samsung", "Motorola", "Google", "Sony"];

/// Build a synthetic dataset with `rows` data rows
fn synthetic_dataset(rows: usize) -> String {
    let mut content = String::from(HEADER);
    content.push('\n');

    for i in 0..rows {
        let announced = 1998 + (i % 25);
        let released = announced + (i % 3 == 0) as usize;
        let sensors = if i % 4 == 0 {
            "Accelerometer"
        } else {
            "Fingerprint, accelerometer, gyro"
        };
        content.push_str(&format!(
            "{},Model {},\"{}, March\",\"Available. Released {}, May\",150 x 70 x 8 mm,{} g (6 oz),Nano-SIM,IPS LCD,\"{}.{} inches, 90 cm2\",1080x{},\"{}\",Android\n",
            MANUFACTURERS[i % MANUFACTURERS.len()],
            i,
            announced,
            released,
            120 + (i % 90),
            5 + (i % 2),
            i % 10,
            1920 + (i % 400),
            sensors
        ));
    }

    content
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for size in &[100, 1000, 10000] {
        let content = synthetic_dataset(*size);
        group.bench_with_input(BenchmarkId::new("parse_reader", size), &content, |b, content| {
            let parser = CellCsvParser::new();
            b.iter(|| {
                let result = parser
                    .parse_reader(black_box(content.as_bytes()), "bench")
                    .unwrap();
                black_box(result);
            });
        });
    }

    group.finish();
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");
    let parser = CellCsvParser::new();

    for size in &[100, 1000, 10000] {
        let content = synthetic_dataset(*size);
        let records = parser.parse_reader(content.as_bytes(), "bench").unwrap().records;

        group.bench_with_input(BenchmarkId::new("aggregate", size), &records, |b, records| {
            let aggregator = Aggregator::default();
            b.iter(|| {
                let report = aggregator.aggregate(black_box(records));
                black_box(report.summary());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_aggregation);
criterion_main!(benches);
