use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TaxBracket;

/// Allowance and rate table for one tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConfig {
    pub tax_year: i32,
    /// Grundfreibetrag subtracted from yearly income before bracket lookup.
    pub basic_tax_free: Decimal,
    /// Sorted ascending by `lower_exclusive`; the last bracket is unbounded.
    pub brackets: Vec<TaxBracket>,
}

impl TaxYearConfig {
    /// The simplified 2024 table.
    pub fn year_2024() -> Self {
        Self {
            tax_year: 2024,
            basic_tax_free: Decimal::new(11604, 0),
            brackets: vec![
                TaxBracket {
                    lower_exclusive: Decimal::ZERO,
                    upper_inclusive: Some(Decimal::new(15999, 0)),
                    rate: Decimal::new(14, 2),
                },
                TaxBracket {
                    lower_exclusive: Decimal::new(15999, 0),
                    upper_inclusive: Some(Decimal::new(62809, 0)),
                    rate: Decimal::new(24, 2),
                },
                TaxBracket {
                    lower_exclusive: Decimal::new(62809, 0),
                    upper_inclusive: Some(Decimal::new(277825, 0)),
                    rate: Decimal::new(42, 2),
                },
                TaxBracket {
                    lower_exclusive: Decimal::new(277825, 0),
                    upper_inclusive: None,
                    rate: Decimal::new(45, 2),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn year_2024_has_four_contiguous_brackets() {
        let config = TaxYearConfig::year_2024();

        assert_eq!(config.brackets.len(), 4);
        for pair in config.brackets.windows(2) {
            assert_eq!(pair[0].upper_inclusive, Some(pair[1].lower_exclusive));
        }
        assert_eq!(config.brackets.last().map(|b| b.upper_inclusive), Some(None));
    }

    #[test]
    fn year_2024_allowance() {
        assert_eq!(TaxYearConfig::year_2024().basic_tax_free, dec!(11604));
    }

    #[test]
    fn bracket_bounds_are_exclusive_below_and_inclusive_above() {
        let config = TaxYearConfig::year_2024();
        let first = &config.brackets[0];

        assert!(!first.contains(dec!(0)));
        assert!(first.contains(dec!(0.01)));
        assert!(first.contains(dec!(15999)));
        assert!(!first.contains(dec!(15999.01)));
        assert!(config.brackets[3].contains(dec!(10000000)));
    }
}
