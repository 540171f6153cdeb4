//! API configuration

use std::path::PathBuf;

use serde::Deserialize;

use core_kernel::CoreError;

/// API configuration, loaded from `API_`-prefixed environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base URL of the billing provider API
    #[serde(default)]
    pub provider_base_url: String,
    /// Static credential attached to every provider call
    #[serde(default)]
    pub provider_api_key: String,
    /// Path of the expense file; expenses stay in memory when unset
    #[serde(default)]
    pub expense_file: Option<PathBuf>,
    /// Concurrent per-customer payment fetches within one request
    #[serde(default = "default_fetch_concurrency")]
    pub fetch_concurrency: usize,
    /// Page size for provider listings
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_fetch_concurrency() -> usize {
    5
}

fn default_page_limit() -> u32 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            provider_base_url: String::new(),
            provider_api_key: String::new(),
            expense_file: None,
            fetch_concurrency: default_fetch_concurrency(),
            page_limit: default_page_limit(),
            log_level: default_log_level(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Rejects a configuration that cannot reach the provider. The process
    /// must not start serving without the credential.
    pub fn ensure_provider_config(&self) -> Result<(), CoreError> {
        if self.provider_api_key.trim().is_empty() {
            return Err(CoreError::configuration(
                "provider credential missing: set API_PROVIDER_API_KEY",
            ));
        }
        if self.provider_base_url.trim().is_empty() {
            return Err(CoreError::configuration(
                "provider base URL missing: set API_PROVIDER_BASE_URL",
            ));
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
