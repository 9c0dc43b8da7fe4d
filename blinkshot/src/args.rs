use std::path::PathBuf;

use clap::Parser;

/// `BlinkShot` image generation gateway
#[derive(Debug, Parser)]
#[command(name = "blinkshot", about = "Prompt-to-image gateway for Together AI's FLUX models")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "blinkshot.toml", env = "BLINKSHOT_CONFIG")]
    pub config: PathBuf,

    /// Write a template config file if none exists, then exit
    #[arg(long)]
    pub init: bool,
}
