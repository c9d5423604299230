//! Binary entry point for the sphere viewer.

mod scene;
mod textures;
mod window;

use std::path::PathBuf;

use clap::Parser;
use helios_config::{CliArgs, Config};
use tracing::{info, warn};

fn main() {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(|| dirs::config_dir().map(|dir| dir.join("helios")));

    let mut config = match &config_dir {
        Some(dir) => Config::load_or_create(dir).unwrap_or_else(|e| {
            eprintln!("Failed to load config ({e}), using defaults");
            Config::default()
        }),
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    helios_log::init_logging(Some(&config));
    match &config_dir {
        Some(dir) => info!("Config directory: {}", dir.display()),
        None => warn!("No config directory available, using defaults"),
    }

    // Surface maps live next to the executable.
    let texture_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    window::run(config, texture_dir);
}
