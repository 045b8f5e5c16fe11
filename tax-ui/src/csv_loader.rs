//! CSV loader for batch comparisons.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Values are
//! trimmed before parsing. Incomes go through the same parser as the web
//! form, so `"50,000"` is accepted and digits are kept exactly; an empty
//! income cell counts as 0.
//!
//! | Column     | Required | Type    | Notes                                 |
//! |------------|----------|---------|---------------------------------------|
//! | `label`    | no       | string  | Shown above the report; may be empty  |
//! | `income_1` | yes      | decimal | Yearly income of person 1, `>= 0`     |
//! | `income_2` | yes      | decimal | Yearly income of person 2, `>= 0`     |
//!
//! ### Example
//!
//! ```csv
//! label,income_1,income_2
//! Default couple,50000,40000
//! One earner,80000,0
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    models::CoupleIncomes,
    utils::{ParseDecimalError, parse_decimal},
};

// Incomes stay text here: csv routes decimal points through f64.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    label: Option<String>,
    income_1: String,
    income_2: String,
}

/// One couple read from the batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoupleRecord {
    /// 1-based data row number.
    pub row: usize,
    pub label: Option<String>,
    pub incomes: CoupleIncomes,
}

impl CoupleRecord {
    /// The label, or `"Row N"` when the cell was empty.
    pub fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("Row {}", self.row))
    }
}

/// Errors that can occur while loading batch data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// Bad structure or a missing required column.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// An income that is not a number. `row` is 1-based (header excluded).
    #[error("invalid {column} on row {row}: {source}")]
    InvalidIncome {
        column: &'static str,
        row: usize,
        #[source]
        source: ParseDecimalError,
    },

    /// An income below zero. `row` is 1-based (header excluded).
    #[error("negative {column} '{value}' on row {row}")]
    NegativeIncome {
        column: &'static str,
        value: Decimal,
        row: usize,
    },

    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<CoupleRecord, CsvLoadError> {
    let income_1 = parse_income("income_1", &row.income_1, row_number)?;
    let income_2 = parse_income("income_2", &row.income_2, row_number)?;

    Ok(CoupleRecord {
        row: row_number,
        label: row.label.filter(|label| !label.is_empty()),
        incomes: CoupleIncomes { income_1, income_2 },
    })
}

fn parse_income(
    column: &'static str,
    raw: &str,
    row: usize,
) -> Result<Decimal, CsvLoadError> {
    let value = parse_decimal(raw).map_err(|source| CsvLoadError::InvalidIncome {
        column,
        row,
        source,
    })?;
    if value < Decimal::ZERO {
        return Err(CsvLoadError::NegativeIncome { column, value, row });
    }
    Ok(value)
}

/// Parses CSV text into couples, in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid.
/// * [`CsvLoadError::InvalidIncome`] if an income is not a number.
/// * [`CsvLoadError::NegativeIncome`] if any income is below zero.
pub fn load_from_str(input: &str) -> Result<Vec<CoupleRecord>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Reads a file from disk and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<CoupleRecord>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}
