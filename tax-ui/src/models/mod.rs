mod comparison_form;
mod report;

pub use comparison_form::{ComparisonForm, CoupleIncomes, FormError};
pub use report::{ComparisonReport, DISCLAIMER, OptionReport};
