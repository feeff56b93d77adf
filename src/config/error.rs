//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid catalog timeout")]
    InvalidCatalogTimeout,

    #[error("Invalid catalog base URL: {0}")]
    InvalidCatalogUrl(String),

    #[error("Catalog user agent cannot be empty")]
    EmptyUserAgent,
}
