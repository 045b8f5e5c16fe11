use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TaxClass;

/// A single formula invocation: one person's income under one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxQuery {
    pub yearly_income: Decimal,
    /// Raw class number; classes outside 1/3/4/5 are allowed.
    pub tax_class: u8,
    /// Forces the class-1 multiplier regardless of `tax_class`.
    pub is_single: bool,
}

impl TaxQuery {
    pub fn new(
        yearly_income: Decimal,
        tax_class: TaxClass,
    ) -> Self {
        Self {
            yearly_income,
            tax_class: tax_class.code(),
            is_single: false,
        }
    }

    pub fn single(yearly_income: Decimal) -> Self {
        Self {
            yearly_income,
            tax_class: TaxClass::I.code(),
            is_single: true,
        }
    }
}
