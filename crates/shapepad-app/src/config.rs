//! Application configuration.

use serde::{Deserialize, Serialize};
use shapepad_core::shapes::ShapeColor;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    /// Viewport width; also the horizontal bound for toolbar placement.
    pub width: u32,
    /// Viewport height; also the vertical bound for toolbar placement.
    pub height: u32,
    pub background_color: ShapeColor,
    pub selection_color: ShapeColor,
    /// Seed for placement and color randomness. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "ShapePad".to_string(),
            width: 1280,
            height: 800,
            background_color: ShapeColor::rgb(0.98, 0.98, 0.98),
            selection_color: ShapeColor::rgb(0.12, 0.47, 1.0),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Parse and validate a config from JSON. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::info!("Loading config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize the config to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "viewport must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
