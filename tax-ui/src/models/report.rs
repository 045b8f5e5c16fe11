use std::fmt;

use serde::Serialize;
use tax_core::{CoupleComparison, FilingOption};

use crate::utils::format_euro;

pub const DISCLAIMER: &str = "Please note: This is a simplified calculation and does not include \
all factors that might affect your tax liability. Consult with a tax professional for accurate \
calculations and advice.";

/// One option column of the result page, with amounts already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionReport {
    pub label: &'static str,
    pub title: &'static str,
    pub person_1_label: &'static str,
    pub person_2_label: &'static str,
    pub person_1_tax: String,
    pub person_2_tax: String,
    pub total: String,
    pub is_best: bool,
}

/// Everything the result view shows, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonReport {
    pub tax_year: i32,
    pub income_1: String,
    pub income_2: String,
    pub options: Vec<OptionReport>,
    pub best_option: &'static str,
    pub savings_a: String,
    pub savings_b: String,
    pub difference_a_b: String,
    pub disclaimer: &'static str,
}

impl From<&CoupleComparison> for ComparisonReport {
    fn from(comparison: &CoupleComparison) -> Self {
        let options = comparison
            .outcomes
            .iter()
            .map(|outcome| {
                let (person_1_label, person_2_label) = outcome.option.person_labels();
                OptionReport {
                    label: outcome.option.label(),
                    title: outcome.option.title(),
                    person_1_label,
                    person_2_label,
                    person_1_tax: format_euro(outcome.person_1_tax),
                    person_2_tax: format_euro(outcome.person_2_tax),
                    total: format_euro(outcome.total),
                    is_best: outcome.option == comparison.best_option,
                }
            })
            .collect();

        Self {
            tax_year: comparison.tax_year,
            income_1: format_euro(comparison.income_1),
            income_2: format_euro(comparison.income_2),
            options,
            best_option: comparison.best_option.label(),
            savings_a: format_euro(comparison.savings_a),
            savings_b: format_euro(comparison.savings_b),
            difference_a_b: format_euro(comparison.difference_a_b),
            disclaimer: DISCLAIMER,
        }
    }
}

impl ComparisonReport {
    pub fn option(
        &self,
        option: FilingOption,
    ) -> Option<&OptionReport> {
        self.options.iter().find(|o| o.label == option.label())
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Tax Comparison {}", self.tax_year)?;
        writeln!(f, "Person 1 income: {}", self.income_1)?;
        writeln!(f, "Person 2 income: {}", self.income_2)?;

        for option in &self.options {
            writeln!(f)?;
            writeln!(f, "{}", option.title)?;
            writeln!(
                f,
                "  Person 1 ({}) Tax: {}",
                option.person_1_label, option.person_1_tax
            )?;
            writeln!(
                f,
                "  Person 2 ({}) Tax: {}",
                option.person_2_label, option.person_2_tax
            )?;
            writeln!(f, "  Total Tax: {}", option.total)?;
        }

        writeln!(f)?;
        writeln!(f, "Summary")?;
        writeln!(
            f,
            "  Option {} results in lower total tax",
            self.best_option
        )?;
        writeln!(f, "  Savings of option A over single: {}", self.savings_a)?;
        writeln!(f, "  Savings of option B over single: {}", self.savings_b)?;
        writeln!(
            f,
            "  The difference between options A and B is {}",
            self.difference_a_b
        )?;
        writeln!(f)?;
        write!(f, "{}", self.disclaimer)
    }
}
