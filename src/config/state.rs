// Shared application state
// Built once at startup and passed by Arc to every connection task.
// Nothing in here is mutable at runtime.

use std::path::Path;

use crate::config::Config;
use crate::routing::RouteTable;
use crate::view::TemplateStore;

pub struct AppState {
    pub config: Config,
    pub templates: TemplateStore,
    pub routes: RouteTable,
}

/// Templates every route depends on; missing ones fail startup, not requests
const REQUIRED_TEMPLATES: &[&str] = &[
    "index.html",
    "services.html",
    "service-area.html",
    "quote.html",
    "404.html",
    "partials/service-area-map.html",
    "partials/dispatch-status.html",
    "partials/quote-success.html",
    "partials/quote-error.html",
];

impl AppState {
    /// Load templates and build the routing table for the given config
    pub fn new(config: Config) -> std::io::Result<Self> {
        let templates = TemplateStore::load(Path::new(&config.resources.template_dir))?;
        for name in REQUIRED_TEMPLATES {
            if !templates.contains(name) {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!(
                        "missing template '{name}' under '{}'",
                        config.resources.template_dir
                    ),
                ));
            }
        }
        Ok(Self {
            config,
            templates,
            routes: RouteTable::site_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_loads_repo_templates() {
        let cfg = Config::load().unwrap();
        let state = AppState::new(cfg).expect("templates directory must load");
        assert!(state.templates.contains("index.html"));
        assert!(state.templates.contains("partials/dispatch-status.html"));
    }
}
