//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `YTMUSIC_SKILL` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ytmusic_skill::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Skill listening on {}", config.server.socket_addr());
//! ```

mod catalog;
mod error;
mod server;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Environment variable read by earlier deployments for the catalog base URL.
pub const LEGACY_CATALOG_ENDPOINT_VAR: &str = "YTMUSIC_API_ENDPOINT";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// configuration pointing at a catalog service on `localhost:8080`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Music catalog service configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Seeds `catalog.base_url` from `YTMUSIC_API_ENDPOINT` when set
    /// 3. Reads environment variables with `YTMUSIC_SKILL` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `YTMUSIC_SKILL__SERVER__PORT=3000` -> `server.port = 3000`
    /// - `YTMUSIC_SKILL__CATALOG__BASE_URL=...` -> `catalog.base_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let catalog_base_url = std::env::var(LEGACY_CATALOG_ENDPOINT_VAR)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(catalog::default_base_url);

        let config = config::Config::builder()
            .set_default("catalog.base_url", catalog_base_url)?
            .add_source(
                config::Environment::default()
                    .prefix("YTMUSIC_SKILL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.catalog.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
