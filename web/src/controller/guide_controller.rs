//! Controller for the bid-writing guide request flow.

use crate::controller::page_controller;
use crate::params::signup::GuideRequestParams;
use crate::{routes, AppState, Error};
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use domain::signup;

/// GET /guide/
pub(crate) async fn show(State(app_state): State<AppState>) -> Result<Html<String>, Error> {
    page_controller::render(&app_state, "guide.html")
}

/// POST /guide/
///
/// Emails the guide to the prospect and sends them on to the thank-you
/// page.
pub(crate) async fn request_guide(
    State(app_state): State<AppState>,
    Form(params): Form<GuideRequestParams>,
) -> Result<Redirect, Error> {
    signup::send_guide(&app_state.config, &params.email, params.name.as_deref()).await?;
    Ok(Redirect::to(routes::reverse("thankyou").unwrap_or("/thankyou")))
}
