use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use tax_core::{CoupleComparison, compare_couple};
use tracing::{error, info, warn};

use super::{
    AppState,
    page::{PAGE_TITLE, PageView, RenderError},
};
use crate::models::{ComparisonForm, ComparisonReport, CoupleIncomes, FormError};

/// Failure inside a handler; rendered as a 500.
#[derive(Debug)]
pub struct AppError(RenderError);

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "failed to render page");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to render page".to_string(),
        )
            .into_response()
    }
}

fn page_view(
    state: &AppState,
    form: ComparisonForm,
    errors: Vec<String>,
    report: Option<ComparisonReport>,
) -> PageView {
    PageView {
        title: PAGE_TITLE,
        income_1: form.income_1,
        income_2: form.income_2,
        step: state.config.income_step.normalize().to_string(),
        errors,
        report,
    }
}

fn error_messages(errors: &[FormError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

/// `GET /`: the form with default incomes and no results.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let form = ComparisonForm::prefilled(CoupleIncomes {
        income_1: state.config.default_income_1,
        income_2: state.config.default_income_2,
    });
    let html = state.pages.render(&page_view(&state, form, Vec::new(), None))?;
    Ok(Html(html))
}

/// `POST /calculate`: the form again, followed by the comparison.
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ComparisonForm>,
) -> Result<Response, AppError> {
    match form.to_incomes() {
        Ok(incomes) => {
            let comparison = compare_couple(incomes.income_1, incomes.income_2);
            info!(
                best = comparison.best_option.label(),
                "calculated comparison for form submission"
            );
            let report = ComparisonReport::from(&comparison);
            let html = state
                .pages
                .render(&page_view(&state, form, Vec::new(), Some(report)))?;
            Ok(Html(html).into_response())
        }
        Err(errors) => {
            warn!(count = errors.len(), "rejected form submission");
            let messages = error_messages(&errors);
            let html = state.pages.render(&page_view(&state, form, messages, None))?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub comparison: CoupleComparison,
    pub report: ComparisonReport,
}

fn unprocessable(messages: Vec<String>) -> Response {
    let body = json!({ "errors": messages });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
}

/// `POST /api/compare`: the comparison as JSON.
///
/// Bodies that fail to deserialize get the same 422 `{"errors": [...]}`
/// shape as negative incomes.
pub async fn api_compare(payload: Result<Json<CoupleIncomes>, JsonRejection>) -> Response {
    let incomes = match payload {
        Ok(Json(incomes)) => incomes,
        Err(rejection) => {
            warn!(status = %rejection.status(), "rejected JSON body: {}", rejection.body_text());
            return unprocessable(vec![rejection.body_text()]);
        }
    };
    if let Err(errors) = incomes.validate() {
        warn!(count = errors.len(), "rejected JSON incomes");
        return unprocessable(error_messages(&errors));
    }

    let comparison = compare_couple(incomes.income_1, incomes.income_2);
    let report = ComparisonReport::from(&comparison);
    Json(CompareResponse { comparison, report }).into_response()
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
