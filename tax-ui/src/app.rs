//! Command implementations shared by the binary and tests.

use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tax_core::{TaxClass, calculate_tax_2024, compare_couple};
use tracing::debug;

use crate::{
    csv_loader::{self, CoupleRecord},
    models::{ComparisonForm, ComparisonReport, FormError},
    utils::{format_euro, parse_decimal},
};

/// Parses two raw incomes and builds the comparison report.
pub fn compare_report(
    income_1: &str,
    income_2: &str,
) -> Result<ComparisonReport, Vec<FormError>> {
    let form = ComparisonForm {
        income_1: income_1.to_string(),
        income_2: income_2.to_string(),
    };
    let incomes = form.to_incomes()?;
    let comparison = compare_couple(incomes.income_1, incomes.income_2);
    Ok(ComparisonReport::from(&comparison))
}

/// Folds rejected fields into one error that names each of them.
pub fn invalid_input_error(errors: &[FormError]) -> anyhow::Error {
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    anyhow::anyhow!("invalid input: {}", messages.join("; "))
}

/// One-line result of a single formula call, e.g.
/// `Tax for €50,000.00 (Class 3): €11,058.05`.
pub fn single_tax_line(
    income: &str,
    tax_class: u8,
    is_single: bool,
) -> Result<String> {
    let income: Decimal = parse_decimal(income)?;
    let tax = calculate_tax_2024(income, tax_class, is_single);
    debug!(%income, tax_class, is_single, %tax, "evaluated formula");

    let class_label = match (is_single, TaxClass::from_code(tax_class)) {
        (true, _) => "single".to_string(),
        (false, Some(class)) => class.label().to_string(),
        (false, None) => format!("Class {tax_class}, multiplier 1.0"),
    };

    Ok(format!(
        "Tax for {} ({}): {}",
        format_euro(income),
        class_label,
        format_euro(tax)
    ))
}

/// Loads a batch file and compares every couple in it.
pub fn batch_reports(path: &Path) -> Result<Vec<(CoupleRecord, ComparisonReport)>> {
    let records = csv_loader::load_from_file(path)
        .with_context(|| format!("failed to load couples from {}", path.display()))?;

    Ok(records
        .into_iter()
        .map(|record| {
            let comparison = compare_couple(record.incomes.income_1, record.incomes.income_2);
            let report = ComparisonReport::from(&comparison);
            (record, report)
        })
        .collect())
}
