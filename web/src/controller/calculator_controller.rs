//! Controller for the bid-writing savings calculator.

use crate::controller::page_controller;
use crate::params::calculator::EstimateParams;
use crate::{AppState, Error};
use axum::extract::{Query, State};
use axum::response::Html;
use domain::pricing;

/// GET /calculator/
///
/// Without query parameters the page renders with the default workload;
/// with them it shows the visitor's own savings estimate.
pub(crate) async fn show(
    State(app_state): State<AppState>,
    Query(params): Query<EstimateParams>,
) -> Result<Html<String>, Error> {
    let workload = params.into_workload();
    let estimate = pricing::estimate(&workload);

    let bids_per_month = workload.bids_per_month.to_string();
    let hours_per_bid = format!("{:.0}", workload.hours_per_bid);
    let hourly_rate = format!("{:.2}", workload.hourly_rate);
    let hours_spent = format!("{:.0}", estimate.hours_spent);
    let hours_saved = format!("{:.0}", estimate.hours_saved);
    let cost_saved = format!("{:.2}", estimate.cost_saved);

    page_controller::render_with_context(
        &app_state,
        "calculator.html",
        &[
            ("bids_per_month", bids_per_month.as_str()),
            ("hours_per_bid", hours_per_bid.as_str()),
            ("hourly_rate", hourly_rate.as_str()),
            ("hours_spent", hours_spent.as_str()),
            ("hours_saved", hours_saved.as_str()),
            ("cost_saved", cost_saved.as_str()),
        ],
    )
}
