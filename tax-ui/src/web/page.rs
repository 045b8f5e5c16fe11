use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use crate::models::ComparisonReport;

const TEMPLATE_NAME: &str = "calculator.html";
const TEMPLATE: &str = include_str!("../../templates/calculator.html");

pub const PAGE_TITLE: &str = "German Marriage ♥️ Tax Calculator 2024";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

/// Values substituted into the calculator page.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub title: &'static str,
    pub income_1: String,
    pub income_2: String,
    pub step: String,
    pub errors: Vec<String>,
    pub report: Option<ComparisonReport>,
}

/// Compiled page template. Output is HTML-escaped.
#[derive(Debug)]
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render(
        &self,
        view: &PageView,
    ) -> Result<String, RenderError> {
        let context = Context::from_serialize(view)?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tax_core::compare_couple;

    fn view(report: Option<ComparisonReport>) -> PageView {
        PageView {
            title: PAGE_TITLE,
            income_1: "50000".to_string(),
            income_2: "40000".to_string(),
            step: "1000".to_string(),
            errors: Vec::new(),
            report,
        }
    }

    #[test]
    fn empty_form_has_inputs_but_no_results() {
        let html = PageRenderer::new().unwrap().render(&view(None)).unwrap();

        assert!(html.contains(r#"name="income_1""#));
        assert!(html.contains(r#"value="50000""#));
        assert!(html.contains(r#"step="1000""#));
        assert!(!html.contains("Tax Comparison"));
    }

    #[test]
    fn results_render_amounts_and_disclaimer() {
        let report = ComparisonReport::from(&compare_couple(dec!(50000), dec!(40000)));
        let html = PageRenderer::new().unwrap().render(&view(Some(report))).unwrap();

        assert!(html.contains("Tax Comparison"));
        assert!(html.contains("€11,058.05"));
        assert!(html.contains("€16,510.08"));
        assert!(html.contains("€-480.00"));
        assert!(html.contains("Consult with a tax professional"));
    }

    #[test]
    fn errors_are_escaped() {
        let mut page = view(None);
        page.errors.push("<script>".to_string());

        let html = PageRenderer::new().unwrap().render(&page).unwrap();

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<li><script>"));
    }
}
