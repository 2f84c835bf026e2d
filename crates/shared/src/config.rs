//! Application configuration management.

use serde::Deserialize;

use crate::types::TenantId;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Xero API configuration.
    pub xero: XeroConfig,
    /// Registered childcare centres.
    #[serde(default)]
    pub centres: Vec<CentreConfig>,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Xero API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct XeroConfig {
    /// Base URL of the Xero API.
    #[serde(default = "default_xero_base_url")]
    pub base_url: String,
    /// OAuth2 bearer token for Xero API calls.
    pub access_token: String,
    /// Overall request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_xero_base_url() -> String {
    "https://api.xero.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// One registered childcare centre and its Xero tenant.
#[derive(Debug, Clone, Deserialize)]
pub struct CentreConfig {
    /// Short centre code (e.g. "WEST").
    pub code: String,
    /// Display name of the centre.
    pub name: String,
    /// Xero tenant (organisation) ID for this centre.
    pub tenant_id: TenantId,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("NIDO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
