pub mod calculations;
pub mod models;

pub use calculations::{CoupleComparison, FilingOption, calculate_tax_2024, compare_couple};
pub use models::*;
