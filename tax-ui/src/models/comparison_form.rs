use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::{ParseDecimalError, parse_decimal};

/// A rejected form field.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("{field}: {source}")]
    Invalid {
        field: &'static str,
        #[source]
        source: ParseDecimalError,
    },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: Decimal },
}

/// Validated yearly incomes of both partners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoupleIncomes {
    pub income_1: Decimal,
    pub income_2: Decimal,
}

impl CoupleIncomes {
    /// Enforces the form's minimum of zero for both incomes.
    pub fn validate(&self) -> Result<(), Vec<FormError>> {
        let errors: Vec<FormError> = [
            (PERSON_1_FIELD, self.income_1),
            (PERSON_2_FIELD, self.income_2),
        ]
        .into_iter()
        .filter(|(_, value)| *value < Decimal::ZERO)
        .map(|(field, value)| FormError::Negative { field, value })
        .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

const PERSON_1_FIELD: &str = "Yearly Income (€) - Person 1";
const PERSON_2_FIELD: &str = "Yearly Income (€) - Person 2";

/// Raw values as submitted by the web form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonForm {
    pub income_1: String,
    pub income_2: String,
}

impl ComparisonForm {
    pub fn prefilled(incomes: CoupleIncomes) -> Self {
        Self {
            income_1: incomes.income_1.normalize().to_string(),
            income_2: incomes.income_2.normalize().to_string(),
        }
    }

    /// Parses and validates both fields, collecting every error.
    pub fn to_incomes(&self) -> Result<CoupleIncomes, Vec<FormError>> {
        let mut errors = Vec::new();

        let income_1 = parse_field(PERSON_1_FIELD, &self.income_1, &mut errors);
        let income_2 = parse_field(PERSON_2_FIELD, &self.income_2, &mut errors);

        match (income_1, income_2) {
            (Some(income_1), Some(income_2)) if errors.is_empty() => {
                let incomes = CoupleIncomes { income_1, income_2 };
                incomes.validate()?;
                Ok(incomes)
            }
            _ => Err(errors),
        }
    }
}

fn parse_field(
    field: &'static str,
    value: &str,
    errors: &mut Vec<FormError>,
) -> Option<Decimal> {
    match parse_decimal(value) {
        Ok(amount) if amount < Decimal::ZERO => {
            errors.push(FormError::Negative {
                field,
                value: amount,
            });
            None
        }
        Ok(amount) => Some(amount),
        Err(source) => {
            errors.push(FormError::Invalid { field, source });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn form(
        income_1: &str,
        income_2: &str,
    ) -> ComparisonForm {
        ComparisonForm {
            income_1: income_1.to_string(),
            income_2: income_2.to_string(),
        }
    }

    #[test]
    fn parses_plain_and_grouped_numbers() {
        let incomes = form("50000", "40,000.00").to_incomes().unwrap();

        assert_eq!(incomes.income_1, dec!(50000));
        assert_eq!(incomes.income_2, dec!(40000));
    }

    #[test]
    fn empty_fields_are_zero() {
        let incomes = form("", "  ").to_incomes().unwrap();

        assert_eq!(incomes.income_1, Decimal::ZERO);
        assert_eq!(incomes.income_2, Decimal::ZERO);
    }

    #[test]
    fn collects_errors_for_both_fields() {
        let errors = form("abc", "-1").to_incomes().unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], FormError::Invalid { .. }));
        assert!(matches!(errors[1], FormError::Negative { .. }));
    }

    #[test]
    fn misplaced_comma_is_rejected_not_joined() {
        let errors = form("50,5", "1,2,3").to_incomes().unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(
            errors[0]
                .to_string()
                .ends_with("misplaced thousands separator")
        );
    }

    #[test]
    fn negative_error_names_the_field() {
        let errors = form("-5000", "1").to_incomes().unwrap_err();

        assert_eq!(
            errors[0].to_string(),
            "Yearly Income (€) - Person 1 must not be negative (got -5000)"
        );
    }

    #[test]
    fn json_incomes_validate_sign() {
        let incomes = CoupleIncomes {
            income_1: dec!(10),
            income_2: dec!(-10),
        };

        let errors = incomes.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn prefilled_drops_trailing_zeros() {
        let prefilled = ComparisonForm::prefilled(CoupleIncomes {
            income_1: dec!(50000.00),
            income_2: dec!(40000),
        });

        assert_eq!(prefilled, form("50000", "40000"));
    }
}
