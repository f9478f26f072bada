//! Controllers for the checkout flow: session creation plus the pages
//! the payment provider redirects back to.

use crate::controller::page_controller;
use crate::params::checkout::{CreateSessionParams, SuccessParams};
use crate::{routes, AppState, Error};
use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use domain::checkout::{self, Plan};
use log::*;
use service::config::Config;

/// POST /create-checkout-session/
///
/// Creates a checkout session for the picked plan and redirects the
/// visitor to the hosted payment page.
pub(crate) async fn create_checkout_session(
    State(app_state): State<AppState>,
    Form(params): Form<CreateSessionParams>,
) -> Result<Redirect, Error> {
    let plan = Plan::from_form_value(&params.plan)?;
    let success_url = absolute_url(
        &app_state.config,
        routes::reverse("success").unwrap_or("/success/"),
    );
    let cancel_url = absolute_url(
        &app_state.config,
        routes::reverse("cancel").unwrap_or("/cancel/"),
    );

    let url = checkout::create_session(
        &app_state.config,
        plan,
        &success_url,
        &cancel_url,
        params.email,
    )
    .await?;

    Ok(Redirect::to(&url))
}

/// GET /success/
///
/// Rendering never depends on the session lookup succeeding; the lookup
/// only logs the payment outcome.
pub(crate) async fn success(
    State(app_state): State<AppState>,
    Query(params): Query<SuccessParams>,
) -> Result<Html<String>, Error> {
    if let Some(session_id) = &params.session_id {
        match checkout::retrieve_session(&app_state.config, session_id).await {
            Ok(session) => info!(
                "Checkout session {} returned with payment status {}",
                session.id,
                session.payment_status.as_deref().unwrap_or("unknown")
            ),
            Err(err) => warn!("Could not retrieve checkout session {session_id}: {err}"),
        }
    }
    page_controller::render(&app_state, "success.html")
}

/// GET /cancel/
pub(crate) async fn cancel(State(app_state): State<AppState>) -> Result<Html<String>, Error> {
    page_controller::render(&app_state, "cancel.html")
}

fn absolute_url(config: &Config, path: &str) -> String {
    format!("{}{}", config.site_base_url(), path)
}
