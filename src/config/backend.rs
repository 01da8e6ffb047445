//! Backend collaborator configuration.

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::ValidationError;

fn default_timeout_secs() -> u64 {
    30
}

/// Connection settings for the relational backend's HTTP API.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend, e.g. `https://api.studio.example`.
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Bearer token attached to every request, if the deployment
    /// requires one.
    #[serde(default)]
    pub api_key: Option<Secret<String>>,
}

impl BackendConfig {
    /// Creates a config with defaults for everything but the URL.
    /// Used by tests and local tools; production loads from env.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
        }
    }

    /// The timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validates the settings semantically.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::invalid(
                "backend.base_url",
                "must start with http:// or https://",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::invalid(
                "backend.timeout_secs",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
