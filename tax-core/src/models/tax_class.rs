use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// German payroll tax class (Steuerklasse) as used by the comparison.
///
/// Only the classes relevant to couples and singles are modelled. Any other
/// numeric class is still accepted by the formula and falls back to a
/// multiplier of 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxClass {
    /// Class 1: single.
    I,
    /// Class 3: the favourable spouse class.
    III,
    /// Class 4: standard spouse class.
    IV,
    /// Class 5: the unfavourable spouse class.
    V,
}

impl TaxClass {
    pub fn code(&self) -> u8 {
        match self {
            Self::I => 1,
            Self::III => 3,
            Self::IV => 4,
            Self::V => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::I),
            3 => Some(Self::III),
            4 => Some(Self::IV),
            5 => Some(Self::V),
            _ => None,
        }
    }

    /// Factor applied to the bracket tax for this class.
    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::I | Self::IV => Decimal::ONE,
            Self::III => Decimal::new(12, 1),
            Self::V => Decimal::new(8, 1),
        }
    }

    /// Multiplier for a raw class number; unknown classes use 1.0.
    pub fn multiplier_for_code(code: u8) -> Decimal {
        Self::from_code(code).map_or(Decimal::ONE, |class| class.multiplier())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::I => "Class 1",
            Self::III => "Class 3",
            Self::IV => "Class 4",
            Self::V => "Class 5",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn codes_round_trip_for_known_classes() {
        for class in [TaxClass::I, TaxClass::III, TaxClass::IV, TaxClass::V] {
            assert_eq!(TaxClass::from_code(class.code()), Some(class));
        }
    }

    #[test]
    fn from_code_rejects_unmodelled_classes() {
        assert_eq!(TaxClass::from_code(0), None);
        assert_eq!(TaxClass::from_code(2), None);
        assert_eq!(TaxClass::from_code(6), None);
    }

    #[test]
    fn multipliers_match_class_table() {
        assert_eq!(TaxClass::I.multiplier(), dec!(1.0));
        assert_eq!(TaxClass::III.multiplier(), dec!(1.2));
        assert_eq!(TaxClass::IV.multiplier(), dec!(1.0));
        assert_eq!(TaxClass::V.multiplier(), dec!(0.8));
    }

    #[test]
    fn unknown_code_multiplier_defaults_to_one() {
        assert_eq!(TaxClass::multiplier_for_code(2), Decimal::ONE);
        assert_eq!(TaxClass::multiplier_for_code(6), Decimal::ONE);
        assert_eq!(TaxClass::multiplier_for_code(3), dec!(1.2));
    }
}
