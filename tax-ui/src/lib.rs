pub mod app;
pub mod config;
pub mod csv_loader;
pub mod logging;
pub mod models;
pub mod utils;
pub mod web;

pub use config::UiConfig;
pub use models::{ComparisonForm, ComparisonReport, CoupleIncomes};
