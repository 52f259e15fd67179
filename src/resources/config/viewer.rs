use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::{CameraConfig, DataConfig, PlaybackConfig, RenderConfig};
use crate::resources::GraphicsInitError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid viewer configuration: {0}")]
    ValidationError(String),
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub data: DataConfig,
    pub playback: PlaybackConfig,
    pub render: RenderConfig,
    pub camera: CameraConfig,
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.check()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// `<config dir>/monocopter/viewer.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("monocopter").join("viewer.yaml"))
    }

    /// Load from the default location if a file exists there, defaults otherwise.
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Render settings that would make the graphics pipeline unusable.
    pub fn validate(&self) -> Result<(), GraphicsInitError> {
        self.render.validate()
    }

    fn check(&self) -> Result<(), ConfigError> {
        if !(self.playback.frame_rate > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "frame_rate must be positive, got {}",
                self.playback.frame_rate
            )));
        }
        if !(self.playback.scrub_step > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "scrub_step must be positive, got {}",
                self.playback.scrub_step
            )));
        }
        Ok(())
    }
}
