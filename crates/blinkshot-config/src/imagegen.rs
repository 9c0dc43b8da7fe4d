use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Environment variable consulted when no API key is configured
pub const API_KEY_ENV_VAR: &str = "TOGETHER_API_KEY";

/// Together AI image generation provider configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageGenConfig {
    /// API key for the provider
    ///
    /// Falls back to the `TOGETHER_API_KEY` environment variable when
    /// unset. A missing key is not a startup failure; requests answer
    /// 500 until one is provided.
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override, mainly for pointing tests at a mock backend
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model used when a request does not name one
    #[serde(default)]
    pub default_model: Option<String>,
}

impl ImageGenConfig {
    /// Substitute the `TOGETHER_API_KEY` environment variable for an
    /// unset `api_key`
    pub fn with_env_fallback(mut self) -> Self {
        if self.api_key.is_none()
            && let Ok(value) = std::env::var(API_KEY_ENV_VAR)
            && !value.is_empty()
        {
            self.api_key = Some(SecretString::from(value));
        }
        self
    }
}
