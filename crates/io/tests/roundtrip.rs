//! Integration test: write a series, read the file back as plain text,
//! and load a written pattern table through the reader.

use aether_catalog::Weekday;
use aether_io::{read_pattern_csv, write_series_csv};
use aether_series::{PatternTable, SAMPLES_PER_DAY, TrafficSeries, weekly_column_name};
use std::io::Write;

#[test]
fn pattern_table_roundtrip_through_csv() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("patterns.csv");

    // Two weekday columns of a weekly pattern with ramping samples.
    let names = [
        weekly_column_name(Weekday::Mon, "xu17"),
        weekly_column_name(Weekday::Tue, "xu17"),
    ];
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{},{}", names[0], names[1]).unwrap();
    for i in 0..SAMPLES_PER_DAY {
        writeln!(file, "{},{}", i as f64 * 0.01, 1.0 - i as f64 * 0.001).unwrap();
    }
    drop(file);

    let table: PatternTable = read_pattern_csv(&path).unwrap();
    assert_eq!(table.n_columns(), 2);
    let mon = table.weekly_shape(Weekday::Mon, "xu17").unwrap();
    assert_eq!(mon.len(), SAMPLES_PER_DAY);
    assert!((mon[100] - 1.0).abs() < 1e-12);
    let tue = table.weekly_shape(Weekday::Tue, "xu17").unwrap();
    assert!((tue[0] - 1.0).abs() < 1e-12);
}

#[test]
fn written_series_row_count_matches() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("series.csv");

    let n = 2 * SAMPLES_PER_DAY;
    let t: Vec<f64> = (0..n).map(|i| i as f64 / SAMPLES_PER_DAY as f64).collect();
    let thp: Vec<f64> = (0..n).map(|i| 80.0 + (i % 144) as f64 * 0.1).collect();
    let series = TrafficSeries::new(t, thp).unwrap();

    write_series_csv(&path, &series).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    // Header plus one line per sample.
    assert_eq!(content.lines().count(), n + 1);
}
