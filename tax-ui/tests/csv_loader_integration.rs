//! Exercises the batch path against an on-disk fixture file.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tax_ui::{app, csv_loader};

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_couples.csv")
}

#[test]
fn test_load_fixture_file_succeeds() {
    let records =
        csv_loader::load_from_file(&fixture_path()).expect("fixture file should load without error");

    assert_eq!(records.len(), 3);
}

#[test]
fn test_load_fixture_rows() {
    let records = csv_loader::load_from_file(&fixture_path()).unwrap();

    assert_eq!(records[0].display_label(), "Default couple");
    assert_eq!(records[0].incomes.income_1, dec!(50000));
    assert_eq!(records[0].incomes.income_2, dec!(40000));

    assert_eq!(records[2].display_label(), "Row 3");
    assert_eq!(records[2].incomes.income_1, dec!(120000.50));
}

#[test]
fn test_batch_reports_compare_every_row() {
    let reports = app::batch_reports(&fixture_path()).unwrap();

    assert_eq!(reports.len(), 3);

    let (_, default_couple) = &reports[0];
    assert_eq!(default_couple.best_option, "B (4/4)");
    assert_eq!(default_couple.options[0].total, "€16,510.08");

    // Person 2 has no taxable income: the 1.2 factor only hurts, B and C tie.
    let (_, single_earner) = &reports[1];
    assert_eq!(single_earner.best_option, "B (4/4)");
    assert_eq!(single_earner.options[0].person_2_tax, "€0.00");
}

#[test]
fn test_batch_reports_missing_file_fails() {
    let result = app::batch_reports(Path::new("/nonexistent/couples.csv"));

    assert!(result.is_err());
}
