use blinkshot_config::ImageGenConfig;

use crate::{
    error::Result,
    params::{DEFAULT_MODEL, GenerationParams},
    provider::TogetherClient,
    types::{ImageData, ImageRequest},
};

/// Image generation server: validation plus a single provider client
pub struct Server {
    client: TogetherClient,
    default_model: String,
}

impl Server {
    /// Build the server from configuration
    pub fn from_config(config: &ImageGenConfig) -> Self {
        let client = TogetherClient::new(config.api_key.clone(), config.base_url.as_ref());

        if !client.has_api_key() {
            tracing::warn!(
                "no Together AI API key configured; image requests will fail until \
                 TOGETHER_API_KEY is set"
            );
        }

        Self {
            client,
            default_model: config
                .default_model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
        }
    }

    /// Validate, normalize, and forward one generation request
    ///
    /// The credential check runs first, before validation and before any
    /// network I/O: a missing key answers 500 even for requests that
    /// would otherwise be rejected as invalid.
    pub async fn generate(&self, request: &ImageRequest) -> Result<ImageData> {
        self.client.require_api_key()?;

        let params = GenerationParams::from_request(request, &self.default_model)?;

        self.client.generate(&params).await
    }
}
