//! The site's web surface: the route table, the axum router built from
//! it, the page controllers, and the HTTP error mapping.

use axum::http::{HeaderValue, Method};
use log::*;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub use error::{Error, Result};
pub use service::AppState;

pub(crate) mod controller;
mod error;
pub(crate) mod params;
pub mod router;
pub mod routes;

/// Binds the configured interface/port and serves the site until the
/// process is stopped.
pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let interface = app_state
        .config
        .interface
        .clone()
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let listen_addr = format!("{}:{}", interface, app_state.config.port);

    info!("Server starting... listening for requests on http://{listen_addr}");

    let cors = cors_layer(&app_state.config.allowed_origins);
    let router = router::define_routes(app_state).layer(cors);

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    axum::serve(listener, router).await
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|err| warn!("Skipping unparsable CORS origin '{origin}': {err}"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(AllowOrigin::list(origins))
}
