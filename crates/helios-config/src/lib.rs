//! Configuration for the sphere viewer.
//!
//! Settings persist to disk as RON, with CLI overrides via clap and
//! forward-compatible deserialization (missing sections fall back to
//! defaults).

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CameraConfig, Config, DebugConfig, LightingConfig, LutConfig, SphereConfig, WindowConfig,
};
pub use error::ConfigError;
