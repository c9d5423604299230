//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Sphere tessellation settings.
    pub sphere: SphereConfig,
    /// Lighting lookup-table dimensions.
    pub lut: LutConfig,
    /// Light and material parameters.
    pub lighting: LightingConfig,
    /// Camera motion settings.
    pub camera: CameraConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
}

/// Sphere tessellation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SphereConfig {
    /// Unit sphere radius before model scaling.
    pub radius: f32,
    /// Longitudinal segments (minimum 3).
    pub slices: u32,
    /// Latitudinal segments (minimum 2).
    pub stacks: u32,
}

/// Lighting lookup-table dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LutConfig {
    /// Diffuse table width; also the specular table length.
    pub width: u32,
    /// Diffuse table height.
    pub height: u32,
}

/// Light and material parameters, linear RGBA.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightingConfig {
    /// Point light color.
    pub light_color: [f32; 4],
    /// Global ambient term.
    pub ambient: [f32; 4],
    /// Material diffuse reflectance.
    pub material_diffuse: [f32; 4],
    /// Material specular reflectance. May exceed 1 for an overdriven
    /// highlight.
    pub material_specular: [f32; 4],
    /// Specular exponent.
    pub shininess: f32,
}

/// Camera motion configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Base movement speed in world units per second.
    pub speed: f32,
    /// Speed multiplier while shift is held.
    pub boost: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Helios".to_string(),
        }
    }
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            slices: 32,
            stacks: 32,
        }
    }
}

impl Default for LutConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
        }
    }
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            light_color: [1.0, 1.0, 1.0, 1.0],
            ambient: [0.1, 0.1, 0.1, 1.0],
            material_diffuse: [1.0, 1.0, 1.0, 1.0],
            material_specular: [2.0, 2.0, 2.0, 1.0],
            shininess: 50.0,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            boost: 5.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}
