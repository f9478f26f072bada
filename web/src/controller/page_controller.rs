//! Renders the fixed-template pages and the 404 fallback.

use crate::{AppState, Error};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use domain::error::{DomainErrorKind, Error as DomainError, InternalErrorKind};

/// Renders a fixed template with no computed context.
pub(crate) fn render(app_state: &AppState, template: &str) -> Result<Html<String>, Error> {
    match app_state.templates_ref().get(template) {
        Some(body) => Ok(Html(body.to_string())),
        None => Err(missing_template(template)),
    }
}

/// Renders a template with `{{key}}` placeholders substituted.
pub(crate) fn render_with_context(
    app_state: &AppState,
    template: &str,
    context: &[(&str, &str)],
) -> Result<Html<String>, Error> {
    match app_state.templates_ref().render(template, context) {
        Some(body) => Ok(Html(body)),
        None => Err(missing_template(template)),
    }
}

fn missing_template(template: &str) -> Error {
    DomainError {
        source: None,
        error_kind: DomainErrorKind::Internal(InternalErrorKind::MissingTemplate(
            template.to_string(),
        )),
    }
    .into()
}

/// Fallback for paths outside the route table.
pub(crate) async fn not_found(State(app_state): State<AppState>) -> impl IntoResponse {
    match app_state.templates_ref().get("404.html") {
        Some(body) => (StatusCode::NOT_FOUND, Html(body.to_string())).into_response(),
        None => (StatusCode::NOT_FOUND, "NOT FOUND").into_response(),
    }
}
