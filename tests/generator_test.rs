mod utils;

use std::fs;

use esg_fixtures::{
    GeneratorError, generate_disclosure_csv, generate_emissions_csv, generate_waste_csv,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use utils::{assert_company_id, assert_metric, assert_reporting_date, read_csv, test_output_dir};

#[test]
fn test_disclosure_ten_rows_with_seed() {
    let dir = test_output_dir("disclosure-ten");
    let path = dir.join("disclosure_10k.csv");
    let mut rng = StdRng::seed_from_u64(42);

    let report = generate_disclosure_csv(&path, 10, &mut rng).unwrap();
    assert_eq!(report.rows, 10);
    assert_eq!(report.blank_values, 0);
    assert_eq!(report.path, path);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 11);
    assert_eq!(
        content.lines().next(),
        Some("company_id,date,dis_1,dis_2,dis_3,dis_4")
    );
    // Every record ends with CRLF by default
    assert_eq!(content.matches("\r\n").count(), 11);
    assert!(content.ends_with("\r\n"));
}

#[test]
fn test_disclosure_invariants() {
    let dir = test_output_dir("disclosure-invariants");
    let path = dir.join("disclosure.csv");
    let mut rng = StdRng::seed_from_u64(7);

    generate_disclosure_csv(&path, 2_000, &mut rng).unwrap();
    let (header, rows) = read_csv(&path);

    assert_eq!(header.len(), 6);
    assert_eq!(rows.len(), 2_000);
    for row in &rows {
        assert_eq!(row.len(), 6);
        assert_company_id(&row[0]);
        assert!(["2023", "2024", "2025"].contains(&&row[1]), "year: {}", &row[1]);
        for field in row.iter().skip(2) {
            assert_metric(field);
        }
    }
}

#[test]
fn test_emissions_invariants_and_blank_rate() {
    let dir = test_output_dir("emissions-blank-rate");
    let path = dir.join("emissions.csv");
    let mut rng = StdRng::seed_from_u64(2024);
    let n = 100_000;

    let report = generate_emissions_csv(&path, n, &mut rng).unwrap();
    let (header, rows) = read_csv(&path);

    assert_eq!(
        header.iter().collect::<Vec<_>>(),
        ["company_id", "date", "emi_1", "emi_2", "emi_3", "emi_4"]
    );
    assert_eq!(rows.len(), n);

    let mut blanks = 0;
    for row in &rows {
        assert_company_id(&row[0]);
        assert_reporting_date(&row[1]);
        if row[2].is_empty() {
            blanks += 1;
        } else {
            assert_metric(&row[2]);
        }
        for field in row.iter().skip(3) {
            assert!(!field.is_empty());
            assert_metric(field);
        }
    }

    assert_eq!(blanks, report.blank_values);
    let rate = blanks as f64 / n as f64;
    assert!((0.04..=0.06).contains(&rate), "blank rate {rate}");
}

#[test]
fn test_blank_emissions_value_is_empty_field() {
    let dir = test_output_dir("emissions-empty-field");
    let path = dir.join("emissions.csv");
    let mut rng = StdRng::seed_from_u64(1);

    let report = generate_emissions_csv(&path, 1_000, &mut rng).unwrap();
    assert!(report.blank_values > 0);

    let content = fs::read_to_string(&path).unwrap();
    let blank_lines = content
        .lines()
        .skip(1)
        .filter(|line| line.split(',').nth(2) == Some(""))
        .count();
    assert_eq!(blank_lines, report.blank_values);
    // Blank values are written unquoted
    assert!(!content.contains('"'));
}

#[test]
fn test_waste_invariants() {
    let dir = test_output_dir("waste-invariants");
    let path = dir.join("waste.csv");
    let mut rng = StdRng::seed_from_u64(99);

    let report = generate_waste_csv(&path, 5_000, &mut rng).unwrap();
    assert_eq!(report.blank_values, 0);

    let (header, rows) = read_csv(&path);
    assert_eq!(&header[2], "was_1");
    assert_eq!(rows.len(), 5_000);
    for row in &rows {
        assert_company_id(&row[0]);
        assert_reporting_date(&row[1]);
        for field in row.iter().skip(2) {
            assert_metric(field);
        }
    }
}

#[test]
fn test_existing_file_is_overwritten() {
    let dir = test_output_dir("overwrite");
    let path = dir.join("waste.csv");
    fs::write(&path, "stale contents\nmore stale contents\n".repeat(100)).unwrap();

    let mut rng = StdRng::seed_from_u64(3);
    generate_waste_csv(&path, 3, &mut rng).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 4);
    assert!(!content.contains("stale"));
}

#[test]
fn test_zero_rows_rejected() {
    let dir = test_output_dir("zero-rows");
    let path = dir.join("disclosure.csv");
    let mut rng = StdRng::seed_from_u64(0);

    let err = generate_disclosure_csv(&path, 0, &mut rng).unwrap_err();
    assert!(matches!(err, GeneratorError::InvalidConfig(_)));
    assert!(!path.exists());
}

#[test]
fn test_missing_parent_directory_reports_path() {
    let dir = test_output_dir("missing-parent");
    let path = dir.join("nested").join("emissions.csv");
    let mut rng = StdRng::seed_from_u64(0);

    let err = generate_emissions_csv(&path, 5, &mut rng).unwrap_err();
    assert_eq!(err.path(), Some(path.as_path()));
}
