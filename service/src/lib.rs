use config::Config;
use log::info;
use std::io;
use std::path::Path;
use std::sync::Arc;
use templates::TemplateStore;

pub mod config;
pub mod logging;
pub mod templates;

pub fn init_templates(config: &Config) -> io::Result<TemplateStore> {
    let dir = Path::new(config.templates_dir());
    info!("Loading page templates from {}", dir.display());
    TemplateStore::load(dir)
}

// Service-level state containing only infrastructure concerns
// Needs to implement Clone to be able to be passed into Router as State
#[derive(Clone)]
pub struct AppState {
    pub templates: Arc<TemplateStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(app_config: Config, templates: &Arc<TemplateStore>) -> Self {
        Self {
            templates: Arc::clone(templates),
            config: app_config,
        }
    }

    pub fn templates_ref(&self) -> &TemplateStore {
        self.templates.as_ref()
    }
}
