// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
    pub performance: PerformanceConfig,
    pub resources: ResourceConfig,
    pub site: SiteConfig,
    pub targets: TargetConfig,
    // Placeholder sections: parsed and validated, not yet read at runtime
    #[allow(dead_code)]
    pub design: DesignConfig,
    #[allow(dead_code)]
    pub database: DatabaseConfig,
    #[allow(dead_code)]
    pub smtp: SmtpConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    pub show_headers: bool,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub enable_cors: bool,
    pub max_body_size: u64,
}

/// Connection handling configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// On-disk resource locations
#[derive(Debug, Deserialize, Clone)]
pub struct ResourceConfig {
    pub static_dir: String,
    pub template_dir: String,
}

/// Business identity injected into every rendered page
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub license: String,
    pub address: String,
    pub service_areas: Vec<String>,
}

/// Performance targets the site is built against, echoed by /health
#[derive(Debug, Deserialize, Clone)]
pub struct TargetConfig {
    pub lighthouse_score: u32,
    pub max_js_kb: u32,
    pub cls: f64,
    pub lcp_ms: u32,
}

/// Design tokens for the Emergency Modernism system.
/// The stylesheet carries the same values; these stay here so tooling
/// and templates agree on one source when the theme changes.
#[allow(dead_code)]
#[derive(Debug, Deserialize, Clone)]
pub struct DesignConfig {
    pub emergency_red: String,
    pub emergency_red_hover: String,
    pub neutral_50: String,
    pub neutral_900: String,
    pub min_touch_target_mobile: u32,
    pub min_touch_target_desktop: u32,
}

/// Database settings. Placeholder until persistence lands.
#[allow(dead_code)]
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

/// SMTP settings. Placeholder until quote notifications land.
#[allow(dead_code)]
#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
}
