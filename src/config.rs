use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::error::ConfigError;
use crate::export::{export_side, MAX_EXPORT_SIDE};
use crate::grid::PixelGrid;
use crate::tool::ToolType;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "PIXEL_PAINT_CONFIG";

/// Canvas and export settings, loaded from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults
pub struct CanvasConfig {
    /// Grid side length in cells
    pub resolution: usize,
    /// On-screen canvas side length in points
    pub display_size: f32,
    /// Export upscale factor per cell
    pub export_scale: u32,
    pub export_path: PathBuf,
    /// `#rrggbb` color selected at startup
    pub initial_color: String,
    pub initial_tool: ToolType,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            resolution: 32,
            display_size: 512.0,
            export_scale: 16,
            export_path: PathBuf::from("my_pixel_art.png"),
            initial_color: "#000000".to_owned(),
            initial_tool: ToolType::Pencil,
        }
    }
}

impl CanvasConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from the file named by `PIXEL_PAINT_CONFIG`, or use defaults
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Using default canvas config: {}", err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution == 0 {
            return Err(ConfigError::Invalid("resolution must be at least 1".to_owned()));
        }
        if self.resolution > PixelGrid::MAX_SIZE {
            return Err(ConfigError::Invalid(format!(
                "resolution {} exceeds the maximum of {}",
                self.resolution,
                PixelGrid::MAX_SIZE
            )));
        }
        if self.export_scale == 0 {
            return Err(ConfigError::Invalid("export_scale must be at least 1".to_owned()));
        }
        if export_side(self.resolution, self.export_scale).is_none() {
            return Err(ConfigError::Invalid(format!(
                "resolution {} at export_scale {} exceeds the {} px export limit",
                self.resolution, self.export_scale, MAX_EXPORT_SIDE
            )));
        }
        if !(self.display_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "display_size must be positive, got {}",
                self.display_size
            )));
        }
        Color::from_hex(&self.initial_color)
            .map_err(|err| ConfigError::Invalid(format!("initial_color: {}", err)))?;
        Ok(())
    }

    /// The startup color; black if `initial_color` does not parse
    pub fn initial_color(&self) -> Color {
        Color::from_hex(&self.initial_color).unwrap_or(Color::rgb(0, 0, 0))
    }
}
