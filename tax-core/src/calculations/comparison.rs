//! Compares the three ways a married couple can be taxed.
//!
//! | Option | Person 1          | Person 2          |
//! |--------|-------------------|-------------------|
//! | A      | class 3           | class 5           |
//! | B      | class 4           | class 4           |
//! | C      | single (class 1)  | single (class 1)  |
//!
//! The option with the smallest total wins. Equal totals are resolved by
//! taking the first of A, B, C in that order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::income_tax::IncomeTaxCalculator;
use crate::models::{TaxClass, TaxQuery, TaxYearConfig};

/// Filing strategy, listed in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilingOption {
    ClassThreeFive,
    ClassFourFour,
    Single,
}

impl FilingOption {
    pub const ALL: [FilingOption; 3] = [Self::ClassThreeFive, Self::ClassFourFour, Self::Single];

    /// Short label, e.g. `"A (3/5)"`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ClassThreeFive => "A (3/5)",
            Self::ClassFourFour => "B (4/4)",
            Self::Single => "C (single)",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::ClassThreeFive => "Option A: Class 3/5",
            Self::ClassFourFour => "Option B: Both Class 4",
            Self::Single => "Option C: Both Single",
        }
    }

    /// Queries for person 1 and person 2 under this option.
    pub fn queries(
        &self,
        income_1: Decimal,
        income_2: Decimal,
    ) -> (TaxQuery, TaxQuery) {
        match self {
            Self::ClassThreeFive => (
                TaxQuery::new(income_1, TaxClass::III),
                TaxQuery::new(income_2, TaxClass::V),
            ),
            Self::ClassFourFour => (
                TaxQuery::new(income_1, TaxClass::IV),
                TaxQuery::new(income_2, TaxClass::IV),
            ),
            Self::Single => (TaxQuery::single(income_1), TaxQuery::single(income_2)),
        }
    }

    /// Per-person labels such as `"Class 3"` or `"Single"`.
    pub fn person_labels(&self) -> (&'static str, &'static str) {
        match self {
            Self::ClassThreeFive => (TaxClass::III.label(), TaxClass::V.label()),
            Self::ClassFourFour => (TaxClass::IV.label(), TaxClass::IV.label()),
            Self::Single => ("Single", "Single"),
        }
    }
}

/// Taxes of both partners under one option. Amounts are unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionOutcome {
    pub option: FilingOption,
    pub person_1_tax: Decimal,
    pub person_2_tax: Decimal,
    pub total: Decimal,
}

/// Result of comparing options A, B and C for one couple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoupleComparison {
    pub tax_year: i32,
    pub income_1: Decimal,
    pub income_2: Decimal,
    /// Always in A, B, C order.
    pub outcomes: [OptionOutcome; 3],
    pub best_option: FilingOption,
    /// C − A; positive when 3/5 is cheaper than filing single.
    pub savings_a: Decimal,
    /// C − B; positive when 4/4 is cheaper than filing single.
    pub savings_b: Decimal,
    /// |A − B|.
    pub difference_a_b: Decimal,
}

impl CoupleComparison {
    pub fn outcome(
        &self,
        option: FilingOption,
    ) -> &OptionOutcome {
        match option {
            FilingOption::ClassThreeFive => &self.outcomes[0],
            FilingOption::ClassFourFour => &self.outcomes[1],
            FilingOption::Single => &self.outcomes[2],
        }
    }
}

/// Compares the couple under the 2024 table.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::{compare_couple, FilingOption};
///
/// let comparison = compare_couple(dec!(50000), dec!(40000));
///
/// assert_eq!(comparison.outcome(FilingOption::ClassThreeFive).total, dec!(16510.080));
/// assert_eq!(comparison.best_option, FilingOption::ClassFourFour);
/// ```
pub fn compare_couple(
    income_1: Decimal,
    income_2: Decimal,
) -> CoupleComparison {
    let config = TaxYearConfig::year_2024();
    CoupleComparator::new(&config).compare(income_1, income_2)
}

/// Runs the comparison against a given year's table.
#[derive(Debug, Clone)]
pub struct CoupleComparator<'a> {
    calculator: IncomeTaxCalculator<'a>,
}

impl<'a> CoupleComparator<'a> {
    pub fn new(config: &'a TaxYearConfig) -> Self {
        Self {
            calculator: IncomeTaxCalculator::new(config),
        }
    }

    pub fn compare(
        &self,
        income_1: Decimal,
        income_2: Decimal,
    ) -> CoupleComparison {
        let outcomes = FilingOption::ALL.map(|option| self.outcome(option, income_1, income_2));

        let best_option = Self::best_option(&outcomes);
        let [a, b, c] = [outcomes[0].total, outcomes[1].total, outcomes[2].total];

        debug!(
            %income_1,
            %income_2,
            option_a = %a,
            option_b = %b,
            option_c = %c,
            best = best_option.label(),
            "compared filing options"
        );

        CoupleComparison {
            tax_year: self.calculator.tax_year(),
            income_1,
            income_2,
            outcomes,
            best_option,
            savings_a: c - a,
            savings_b: c - b,
            difference_a_b: (a - b).abs(),
        }
    }

    fn outcome(
        &self,
        option: FilingOption,
        income_1: Decimal,
        income_2: Decimal,
    ) -> OptionOutcome {
        let (query_1, query_2) = option.queries(income_1, income_2);
        let person_1_tax = self.calculator.tax(&query_1);
        let person_2_tax = self.calculator.tax(&query_2);

        OptionOutcome {
            option,
            person_1_tax,
            person_2_tax,
            total: person_1_tax + person_2_tax,
        }
    }

    /// First option holding the minimum total.
    fn best_option(outcomes: &[OptionOutcome; 3]) -> FilingOption {
        let mut best = &outcomes[0];
        for outcome in &outcomes[1..] {
            if outcome.total < best.total {
                best = outcome;
            }
        }
        best.option
    }
}
