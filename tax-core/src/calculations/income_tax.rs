//! Simplified 2024 German income tax.
//!
//! The allowance is subtracted from the yearly income, the bracket containing
//! the remaining taxable income picks a single rate, and that rate is applied
//! to the *whole* taxable income. The result is then scaled by the
//! tax-class multiplier.
//!
//! | Taxable income      | Rate |
//! |---------------------|------|
//! | ≤ 0                 | 0    |
//! | 0 – 15,999          | 14 % |
//! | 15,999 – 62,809     | 24 % |
//! | 62,809 – 277,825    | 42 % |
//! | above 277,825       | 45 % |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::calculate_tax_2024;
//!
//! // 50,000 - 11,604 = 38,396 taxable, 24 %, class 3 multiplier 1.2
//! assert_eq!(calculate_tax_2024(dec!(50000), 3, false), dec!(11058.048));
//! ```

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::max;
use crate::models::{TaxClass, TaxQuery, TaxYearConfig};

/// Tax for one person under the 2024 table.
///
/// Unknown `tax_class` values use a multiplier of 1.0 and `is_single` forces
/// the class-1 multiplier. The returned amount is not rounded.
pub fn calculate_tax_2024(
    yearly_income: Decimal,
    tax_class: u8,
    is_single: bool,
) -> Decimal {
    let config = TaxYearConfig::year_2024();
    IncomeTaxCalculator::new(&config).tax(&TaxQuery {
        yearly_income,
        tax_class,
        is_single,
    })
}

/// Evaluates [`TaxQuery`] values against one year's table.
#[derive(Debug, Clone)]
pub struct IncomeTaxCalculator<'a> {
    config: &'a TaxYearConfig,
}

impl<'a> IncomeTaxCalculator<'a> {
    pub fn new(config: &'a TaxYearConfig) -> Self {
        Self { config }
    }

    pub fn tax_year(&self) -> i32 {
        self.config.tax_year
    }

    /// Computes the tax for a query. Never fails.
    pub fn tax(
        &self,
        query: &TaxQuery,
    ) -> Decimal {
        let taxable_income = self.taxable_income(query.yearly_income);
        if taxable_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let rate = self.marginal_rate(taxable_income);
        let multiplier = self.multiplier(query.tax_class, query.is_single);

        taxable_income * rate * multiplier
    }

    /// Yearly income minus the basic allowance, floored at zero.
    pub fn taxable_income(
        &self,
        yearly_income: Decimal,
    ) -> Decimal {
        max(yearly_income - self.config.basic_tax_free, Decimal::ZERO)
    }

    /// Rate of the bracket containing `taxable_income`, or zero when no
    /// bracket matches.
    pub fn marginal_rate(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        if taxable_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        match self
            .config
            .brackets
            .iter()
            .find(|b| b.contains(taxable_income))
        {
            Some(bracket) => bracket.rate,
            None => {
                warn!(
                    %taxable_income,
                    tax_year = self.config.tax_year,
                    "no tax bracket covers taxable income"
                );
                Decimal::ZERO
            }
        }
    }

    pub fn multiplier(
        &self,
        tax_class: u8,
        is_single: bool,
    ) -> Decimal {
        if is_single {
            TaxClass::I.multiplier()
        } else {
            TaxClass::multiplier_for_code(tax_class)
        }
    }
}
