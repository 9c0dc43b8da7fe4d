use std::path::Path;

use crate::Config;

/// Template written by `Config::write_template`
const CONFIG_TEMPLATE: &str = r#"# BlinkShot gateway configuration
#
# Get a Together AI API key from https://api.together.xyz/settings/api-keys
# and either uncomment the line below or export TOGETHER_API_KEY.

[server]
listen_address = "0.0.0.0:3000"

[server.health]
enabled = true
path = "/health"

[imagegen]
# api_key = "{{ env.TOGETHER_API_KEY }}"
# base_url = "https://api.together.xyz/v1"
# default_model = "black-forest-labs/FLUX.1-schnell"
"#;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes the result. The API key falls back to the
    /// `TOGETHER_API_KEY` environment variable when the file leaves it
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, or TOML parsing fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded = crate::env::expand_env(&raw)
            .map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let mut config: Self =
            toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.imagegen = config.imagegen.with_env_fallback();

        Ok(config)
    }

    /// Build a default configuration from the environment alone
    ///
    /// Used when no config file exists so the binary runs with zero
    /// setup beyond exporting `TOGETHER_API_KEY`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.imagegen = config.imagegen.with_env_fallback();
        config
    }

    /// Load configuration from `path` if it exists, otherwise fall back
    /// to environment-only defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::from_env())
        }
    }

    /// Write a commented template config file at `path` if none exists
    ///
    /// Returns `true` if the template was written and `false` if a file
    /// was already present. Never overwrites.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the file fails
    pub fn write_template(path: &Path) -> anyhow::Result<bool> {
        if path.exists() {
            return Ok(false);
        }

        std::fs::write(path, CONFIG_TEMPLATE)
            .map_err(|e| anyhow::anyhow!("failed to write config template {}: {e}", path.display()))?;

        Ok(true)
    }
}
