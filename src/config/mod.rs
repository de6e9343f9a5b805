// Configuration module entry point
// Loads immutable settings once at startup; nothing here mutates afterwards.

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, DatabaseConfig, DesignConfig, HttpConfig, LoggingConfig, PerformanceConfig,
    ResourceConfig, ServerConfig, SiteConfig, SmtpConfig, TargetConfig,
};

impl Config {
    /// Load configuration: defaults, then an optional `site.toml`, then
    /// `SITE_`-prefixed environment variables (nested keys joined with `__`).
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("site")
    }

    /// Load configuration from the named file (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SITE").separator("__"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("http.server_name", "monaco-site/0.1")?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("resources.static_dir", "static")?
            .set_default("resources.template_dir", "templates")?
            .set_default("site.name", "Monaco Electric Construction Services")?
            .set_default("site.phone", "(239) 237-2899")?
            .set_default("site.email", "info@monacoelectric.com")?
            .set_default("site.license", "EC13009733")?
            .set_default("site.address", "Fort Myers, FL 33912")?
            .set_default(
                "site.service_areas",
                vec!["Fort Myers", "Cape Coral", "Bonita Springs", "Estero"],
            )?
            .set_default("targets.lighthouse_score", 98)?
            .set_default("targets.max_js_kb", 12)?
            .set_default("targets.cls", 0.0)?
            .set_default("targets.lcp_ms", 2500)?
            .set_default("design.emergency_red", "oklch(0.45 0.19 25)")?
            .set_default("design.emergency_red_hover", "oklch(0.38 0.21 25)")?
            .set_default("design.neutral_50", "oklch(0.98 0.01 90)")?
            .set_default("design.neutral_900", "oklch(0.15 0.01 90)")?
            .set_default("design.min_touch_target_mobile", 64)?
            .set_default("design.min_touch_target_desktop", 88)?
            .set_default("database.url", "sqlite://./monaco_site.db")?
            .set_default("smtp.host", "smtp.gmail.com")?
            .set_default("smtp.port", 587)?
            .set_default("smtp.user", "")?
            .set_default("smtp.password", "")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_section() {
        let cfg = Config::load().expect("defaults must deserialize");
        assert_eq!(cfg.site.service_areas.len(), 4);
        assert!(cfg.site.phone.contains("239"));
        assert_eq!(cfg.targets.lighthouse_score, 98);
        assert_eq!(cfg.resources.template_dir, "templates");
        // Placeholders stay inert until the integrations exist
        assert!(cfg.smtp.user.is_empty());
    }

    #[test]
    fn test_socket_addr_parses() {
        let cfg = Config::load().unwrap();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), cfg.server.port);
    }
}
