//! Controller for the campaign entry point at the site root.

use crate::controller::page_controller;
use crate::params::home::AttributionParams;
use crate::{AppState, Error};
use axum::extract::{Query, State};
use axum::response::Html;
use log::*;

/// GET /
///
/// Campaign links carry UTM attribution in the query string; log it so
/// traffic sources show up in the server logs without any analytics
/// dependency.
pub(crate) async fn home(
    State(app_state): State<AppState>,
    Query(params): Query<AttributionParams>,
) -> Result<Html<String>, Error> {
    if let Some(tag) = params.campaign_tag() {
        debug!("Home page hit with attribution: {tag}");
    }
    page_controller::render(&app_state, "index.html")
}
