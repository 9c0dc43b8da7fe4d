use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    error::{ImageGenError, Result},
    params::GenerationParams,
    types::ImageData,
};

/// Default Together AI API base URL
const DEFAULT_BASE_URL: &str = "https://api.together.xyz/v1";

/// Together AI image generation client
///
/// Constructed once at startup and shared across requests; the only
/// state is the HTTP connection pool and the configured credential.
pub(crate) struct TogetherClient {
    client: Client,
    api_key: Option<SecretString>,
    base_url: String,
}

impl TogetherClient {
    pub fn new(api_key: Option<SecretString>, base_url: Option<&Url>) -> Self {
        let base_url = base_url.map_or_else(
            || DEFAULT_BASE_URL.to_string(),
            |url| url.as_str().trim_end_matches('/').to_string(),
        );

        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Whether a credential is configured
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fail with operator guidance when no credential is configured
    pub fn require_api_key(&self) -> Result<&SecretString> {
        self.api_key.as_ref().ok_or_else(|| {
            ImageGenError::ConfigError(
                "Together AI API key not configured. Set the TOGETHER_API_KEY environment \
                 variable or add imagegen.api_key to the config file"
                    .to_owned(),
            )
        })
    }

    /// Issue exactly one image generation call to Together AI
    ///
    /// Returns the first artifact of the provider's `data` array. No
    /// retries, no explicit timeout beyond the transport default.
    pub async fn generate(&self, params: &GenerationParams) -> Result<ImageData> {
        let api_key = self.require_api_key()?;
        let url = format!("{}/images/generations", self.base_url);

        let wire_request = TogetherImageRequest {
            prompt: &params.prompt,
            model: &params.model,
            width: params.width,
            height: params.height,
            steps: params.steps,
            n: 1,
            response_format: "base64",
            seed: params.seed,
        };

        tracing::debug!(
            model = %params.model,
            width = params.width,
            height = params.height,
            steps = params.steps,
            "sending image generation request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key.expose_secret())
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "image generation request failed to send");
                ImageGenError::ProviderError(Some(e.to_string()))
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body)
                .unwrap_or_else(|| format!("provider returned status {status}"));

            tracing::error!(status = %status, "Together AI API error");

            return Err(ImageGenError::ProviderError(Some(message)));
        }

        let wire_response: TogetherImageResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "failed to parse Together AI response");
            ImageGenError::ProviderError(Some(format!("invalid provider response: {e}")))
        })?;

        wire_response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| ImageGenError::ProviderError(Some("provider returned no images".to_owned())))
    }
}

/// Wire format for the Together AI image generation request
#[derive(Serialize)]
struct TogetherImageRequest<'a> {
    prompt: &'a str,
    model: &'a str,
    width: i64,
    height: i64,
    steps: i64,
    n: i64,
    response_format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<i64>,
}

/// Wire format for the Together AI image generation response
///
/// The provider also returns `id` and `model` fields; only the artifact
/// array is relayed.
#[derive(Deserialize)]
struct TogetherImageResponse {
    data: Vec<ImageData>,
}

/// Pull a human-readable message out of a provider error body
///
/// Together AI errors look like `{"error": {"message": "...", ...}}`;
/// a flat `{"error": "..."}` and a bare non-empty body are accepted too.
fn extract_error_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value["error"]["message"].as_str() {
            return Some(message.to_owned());
        }
        if let Some(message) = value["error"].as_str() {
            return Some(message.to_owned());
        }
    }

    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
