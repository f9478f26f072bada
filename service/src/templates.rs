use log::*;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// In-memory store of page templates, loaded once at startup.
///
/// Templates are plain HTML files keyed by file name (e.g. "about.html").
/// The store is immutable after construction; controllers that inject
/// dynamic values do so through `render`, which substitutes `{{key}}`
/// placeholders. Fixed pages are served verbatim via `get`.
pub struct TemplateStore {
    templates: HashMap<String, String>,
}

impl TemplateStore {
    /// Loads every `*.html` file directly under `dir` into the store.
    ///
    /// Fails when the directory cannot be read; an unreadable individual
    /// file is also treated as fatal since the set of templates is part of
    /// the deployed configuration.
    pub fn load(dir: &Path) -> io::Result<Self> {
        let mut templates = HashMap::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("html") {
                continue;
            }
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            let body = fs::read_to_string(&path)?;
            templates.insert(name.to_string(), body);
        }

        if templates.is_empty() {
            warn!("No page templates found in {}", dir.display());
        } else {
            let mut names: Vec<&str> = templates.keys().map(String::as_str).collect();
            names.sort_unstable();
            info!(
                "Loaded {} page templates from {}",
                templates.len(),
                dir.display()
            );
            debug!("Page templates: {}", names.join(", "));
        }

        Ok(Self { templates })
    }

    /// Builds a store from in-memory entries. Used by tests and by any
    /// caller that does not load templates from disk.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            templates: entries
                .into_iter()
                .map(|(name, body)| (name.into(), body.into()))
                .collect(),
        }
    }

    /// Returns the raw template body, if the name is known.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(String::as_str)
    }

    /// Returns true when the named template was loaded.
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Renders the named template with `{{key}}` placeholders replaced by
    /// the supplied context values. Placeholders without a context entry
    /// are left untouched.
    pub fn render(&self, name: &str, context: &[(&str, &str)]) -> Option<String> {
        let template = self.templates.get(name)?;
        let mut rendered = template.clone();
        for (key, value) in context {
            rendered = rendered.replace(&format!("{{{{{key}}}}}"), value);
        }
        Some(rendered)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
