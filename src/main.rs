use log::{error, info};
use service::{config::Config, logging::Logger};
use std::sync::Arc;
use web::AppState;

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config as &Config);

    info!(
        "Starting mytender.io marketing site [{}]...",
        config.runtime_env()
    );

    let templates = match service::init_templates(&config) {
        Ok(templates) => Arc::new(templates),
        Err(e) => {
            error!("Failed to load page templates: {e}");
            std::process::exit(1);
        }
    };

    let app_state = AppState::new(config, &templates);

    if let Err(e) = web::init_server(app_state).await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}
