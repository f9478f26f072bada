//! Controllers for the campaign trial-signup landing pages.
//!
//! Two campaigns share one signup flow; each keeps its own path, name
//! and template so campaign links can be measured independently.

use crate::controller::page_controller;
use crate::params::signup::TrialSignupParams;
use crate::{routes, AppState, Error};
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use domain::signup::{self, Campaign};

/// GET /bidstats
pub(crate) async fn bidstats(State(app_state): State<AppState>) -> Result<Html<String>, Error> {
    page_controller::render(&app_state, "bidstats.html")
}

/// POST /bidstats
pub(crate) async fn bidstats_signup(
    State(app_state): State<AppState>,
    Form(params): Form<TrialSignupParams>,
) -> Result<Redirect, Error> {
    record(&app_state, Campaign::BidStats, params).await
}

/// GET /oxygen-finance
pub(crate) async fn oxygen_finance(
    State(app_state): State<AppState>,
) -> Result<Html<String>, Error> {
    page_controller::render(&app_state, "oxygen_finance.html")
}

/// POST /oxygen-finance
pub(crate) async fn oxygen_finance_signup(
    State(app_state): State<AppState>,
    Form(params): Form<TrialSignupParams>,
) -> Result<Redirect, Error> {
    record(&app_state, Campaign::OxygenFinance, params).await
}

async fn record(
    app_state: &AppState,
    campaign: Campaign,
    params: TrialSignupParams,
) -> Result<Redirect, Error> {
    signup::record_trial_signup(&app_state.config, campaign, &params.into_signup()).await?;
    Ok(Redirect::to(routes::reverse("thankyou").unwrap_or("/thankyou")))
}
