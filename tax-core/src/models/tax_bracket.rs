use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the rate table.
///
/// A bracket matches taxable income `t` when `lower_exclusive < t` and
/// `t <= upper_inclusive` (or there is no upper bound). The rate applies to
/// the whole taxable income, not only the part inside the bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower_exclusive: Decimal,
    pub upper_inclusive: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn contains(
        &self,
        taxable_income: Decimal,
    ) -> bool {
        taxable_income > self.lower_exclusive
            && self
                .upper_inclusive
                .is_none_or(|upper| taxable_income <= upper)
    }
}
