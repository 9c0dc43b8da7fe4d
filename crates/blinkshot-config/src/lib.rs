#![allow(clippy::must_use_candidate)]

mod env;
pub mod health;
pub mod imagegen;
mod loader;
pub mod server;

use serde::Deserialize;

pub use health::HealthConfig;
pub use imagegen::ImageGenConfig;
pub use server::ServerConfig;

/// Top-level `BlinkShot` configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Image generation provider configuration
    #[serde(default)]
    pub imagegen: ImageGenConfig,
}
