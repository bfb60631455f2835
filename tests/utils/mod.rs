#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::StringRecord;

/// Fresh, empty directory for a single test
#[must_use]
pub fn test_output_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("esg-fixtures-{name}-{}", std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Read a generated file back as its header and data records
pub fn read_csv(path: &Path) -> (StringRecord, Vec<StringRecord>) {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .unwrap();
    let header = reader.headers().unwrap().clone();
    let rows = reader.records().map(|r| r.unwrap()).collect();
    (header, rows)
}

/// Assert that a field is a metric in [0, 100] with at most two decimals
pub fn assert_metric(field: &str) {
    let value: f64 = field
        .parse()
        .unwrap_or_else(|_| panic!("not a number: {field:?}"));
    assert!((0.0..=100.0).contains(&value), "metric out of range: {field}");
    if let Some((_, fraction)) = field.split_once('.') {
        assert!(fraction.len() <= 2, "too many decimals: {field}");
    }
}

/// Assert that a field is a company id in [1000, 1100]
pub fn assert_company_id(field: &str) {
    let id: u32 = field.parse().unwrap();
    assert!((1000..=1100).contains(&id), "company id out of range: {id}");
}

/// Assert that a field is a `YYYY-MM-DD` date in the reporting period
pub fn assert_reporting_date(field: &str) {
    let date = NaiveDate::parse_from_str(field, "%Y-%m-%d").unwrap();
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
    assert!(date >= start && date <= end, "date out of range: {date}");
    assert_eq!(date.format("%Y-%m-%d").to_string(), field);
}
