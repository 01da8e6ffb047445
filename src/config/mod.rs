//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the
//! `STUDIO_PORTAL` prefix and `__` (double underscore) separating
//! nested keys.
//!
//! # Example
//!
//! ```no_run
//! use studio_portal::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod backend;
mod error;

pub use backend::BackendConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Backend collaborator (base URL, timeout, API token).
    pub backend: BackendConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads `.env` first if present (development), then reads variables
    /// such as `STUDIO_PORTAL__BACKEND__BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or a
    /// value cannot be parsed into its typed field.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STUDIO_PORTAL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values semantically.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.backend.validate()?;
        Ok(())
    }
}
