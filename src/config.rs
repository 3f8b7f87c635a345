//! Configuration loading for Marga

use crate::error::{MargaError, Result};
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Clone, Debug, Deserialize)]
pub struct MargaConfig {
    /// ASCII renderer settings
    #[serde(default)]
    pub render: RenderConfig,
}

/// ASCII renderer settings
#[derive(Clone, Debug, Deserialize)]
pub struct RenderConfig {
    /// Grid width in characters (default: 40)
    #[serde(default = "default_grid_width")]
    pub grid_width: usize,

    /// Grid height in characters (default: 20)
    #[serde(default = "default_grid_height")]
    pub grid_height: usize,
}

fn default_grid_width() -> usize {
    40
}

fn default_grid_height() -> usize {
    20
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            grid_width: default_grid_width(),
            grid_height: default_grid_height(),
        }
    }
}

impl Default for MargaConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
        }
    }
}

impl MargaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MargaError::Config(format!("Failed to read config file: {}", e)))?;
        let config: MargaConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
