//! Centralized front-end configuration.
//!
//! The serving shell loads this via the `config` crate from environment
//! variables. Hydrated code runs in the browser where no environment
//! exists, so it falls back to the compiled defaults — the same way the
//! original deployment pins its API origin.

use serde::Deserialize;

/// Front-end configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Origin of the upstream REST API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
        }
    }
}

impl WebConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if present configuration is invalid.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_local_api() {
        let config = WebConfig::default();
        assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
    }
}
