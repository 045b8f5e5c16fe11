//! Income tax formula and the couple comparison built on top of it.

pub mod common;
pub mod comparison;
pub mod income_tax;

pub use comparison::{
    CoupleComparator, CoupleComparison, FilingOption, OptionOutcome, compare_couple,
};
pub use income_tax::{IncomeTaxCalculator, calculate_tax_2024};
