use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Image generation request as received from the browser client
///
/// `prompt`, `steps`, `width`, and `height` deserialize as raw JSON
/// values so validation can distinguish "missing" from "wrong type" and
/// substitute defaults explicitly instead of rejecting the whole body.
#[derive(Debug, Default, Deserialize)]
pub struct ImageRequest {
    /// Text description of the desired image; must be a non-empty string
    #[serde(default)]
    pub prompt: Option<Value>,
    /// Reproducibility seed, forwarded unmodified when present
    #[serde(default)]
    pub seed: Option<i64>,
    /// Diffusion step count, clamped to [1, 8]
    #[serde(default)]
    pub steps: Option<Value>,
    /// Image width in pixels, clamped to [512, 1344] and rounded to a
    /// multiple of 64
    #[serde(default)]
    pub width: Option<Value>,
    /// Image height in pixels, same rule as width
    #[serde(default)]
    pub height: Option<Value>,
    /// Model identifier, defaults to the FLUX schnell model
    #[serde(default)]
    pub model: Option<String>,
}

/// Single image artifact relayed from the provider response
///
/// The handler returns the first entry of the provider's `data` array
/// verbatim; fields the provider leaves out are omitted rather than
/// serialized as null.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageData {
    /// Base64-encoded image bytes (requested via `response_format`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b64_json: Option<String>,
    /// Hosted image URL, if the provider returned one instead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Index of the artifact within the provider's batch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}
