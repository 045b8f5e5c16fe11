mod tax_bracket;
mod tax_class;
mod tax_query;
mod tax_year_config;

pub use tax_bracket::TaxBracket;
pub use tax_class::TaxClass;
pub use tax_query::TaxQuery;
pub use tax_year_config::TaxYearConfig;
