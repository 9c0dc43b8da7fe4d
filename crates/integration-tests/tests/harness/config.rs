//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use blinkshot_config::{Config, HealthConfig, ImageGenConfig, ServerConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
///
/// Builds `Config` directly, bypassing file loading and the
/// `TOGETHER_API_KEY` environment fallback, so tests are deterministic
/// regardless of the test environment.
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                },
                imagegen: ImageGenConfig::default(),
            },
        }
    }

    /// Point the provider at a mock backend with a test API key
    pub fn with_together_provider(mut self, base_url: &str) -> Self {
        self.config.imagegen.api_key = Some(SecretString::from("test-key"));
        self.config.imagegen.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Point the provider at a mock backend without configuring a key
    pub fn with_unkeyed_provider(mut self, base_url: &str) -> Self {
        self.config.imagegen.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Override the default model
    pub fn with_default_model(mut self, model: &str) -> Self {
        self.config.imagegen.default_model = Some(model.to_owned());
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
