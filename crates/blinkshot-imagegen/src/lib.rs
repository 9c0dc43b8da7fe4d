#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod params;
mod provider;
mod server;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, extract::rejection::JsonRejection, routing::post};

pub use error::{ImageGenError, Result};
pub use params::{DEFAULT_MODEL, GenerationParams};
pub use server::Server;
pub use types::{ImageData, ImageRequest};

/// Build the image generation server from configuration
pub fn build_server(config: &blinkshot_config::Config) -> Arc<Server> {
    Arc::new(Server::from_config(&config.imagegen))
}

/// Create the endpoint router for image generation
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/api/generateImage", post(generate))
}

/// Handle image generation requests
///
/// A body that fails JSON extraction is converted into the structured
/// 400 error shape instead of axum's default rejection.
async fn generate(
    State(server): State<Arc<Server>>,
    payload: std::result::Result<Json<ImageRequest>, JsonRejection>,
) -> Result<Json<ImageData>> {
    let Json(request) = payload.map_err(|rejection| {
        ImageGenError::InvalidRequest(format!("Failed to parse request body: {rejection}"))
    })?;

    tracing::debug!("image generation handler called");

    let image = server.generate(&request).await?;

    tracing::debug!("image generation complete");

    Ok(Json(image))
}
