//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Sphere viewer command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "helios", about = "Textured lit sphere viewer")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Longitudinal sphere segments.
    #[arg(long)]
    pub slices: Option<u32>,

    /// Latitudinal sphere segments.
    #[arg(long)]
    pub stacks: Option<u32>,

    /// Lookup table width.
    #[arg(long)]
    pub lut_width: Option<u32>,

    /// Lookup table height.
    #[arg(long)]
    pub lut_height: Option<u32>,

    /// Specular exponent.
    #[arg(long)]
    pub shininess: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(slices) = args.slices {
            self.sphere.slices = slices;
        }
        if let Some(stacks) = args.stacks {
            self.sphere.stacks = stacks;
        }
        if let Some(w) = args.lut_width {
            self.lut.width = w;
        }
        if let Some(h) = args.lut_height {
            self.lut.height = h;
        }
        if let Some(shininess) = args.shininess {
            self.lighting.shininess = shininess;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
