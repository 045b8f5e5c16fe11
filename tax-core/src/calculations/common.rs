//! Shared helpers for the tax calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a euro amount to whole cents, midpoints away from zero.
///
/// Calculations keep full precision; this is applied only when a value is
/// shown to the user.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(11058.048)), dec!(11058.05));
/// assert_eq!(round_half_up(dec!(5452.032)), dec!(5452.03));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_formula_results_to_cents() {
        assert_eq!(round_half_up(dec!(11058.048)), dec!(11058.05));
        assert_eq!(round_half_up(dec!(5452.032)), dec!(5452.03));
    }

    #[test]
    fn round_half_up_rounds_midpoint_away_from_zero() {
        assert_eq!(round_half_up(dec!(0.125)), dec!(0.13));
        assert_eq!(round_half_up(dec!(-2480.005)), dec!(-2480.01));
    }

    #[test]
    fn round_half_up_keeps_whole_amounts() {
        assert_eq!(round_half_up(dec!(14030.08)), dec!(14030.08));
        assert_eq!(round_half_up(Decimal::ZERO), dec!(0));
    }

    #[test]
    fn max_clamps_negative_taxable_income_to_zero() {
        assert_eq!(max(dec!(-11604), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(max(dec!(38396), Decimal::ZERO), dec!(38396));
    }
}
