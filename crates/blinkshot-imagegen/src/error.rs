use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImageGenError>;

/// Image generation errors with appropriate HTTP status codes
#[derive(Debug, Error)]
pub enum ImageGenError {
    /// Request body could not be parsed or failed validation
    #[error("{0}")]
    InvalidRequest(String),

    /// Provider credential missing from configuration
    #[error("{0}")]
    ConfigError(String),

    /// The outbound provider call failed
    /// If Some(message), the underlying failure carried a message
    /// If None, only the generic failure message is surfaced
    #[error("Failed to generate image")]
    ProviderError(Option<String>),
}

impl ImageGenError {
    /// Get the appropriate HTTP status code for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::ConfigError(_) | Self::ProviderError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message surfaced to API consumers
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidRequest(message) | Self::ConfigError(message) => message.clone(),
            Self::ProviderError(Some(message)) => format!("Failed to generate image: {message}"),
            Self::ProviderError(None) => "Failed to generate image".to_string(),
        }
    }
}

/// Error body format: `{ "error": "..." }`
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ImageGenError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.client_message();

        // Single choke point: every failure is logged before the
        // response is built
        tracing::error!(status = status.as_u16(), error = %message, "image generation failed");

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
