//! Loader for the movement configuration RON file.

use bevy::prelude::*;
use ron::Options;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Location of the movement config relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "assets/data/movement.ron";

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ConfigLoadError {}

/// Movement tuning authored ahead of runtime.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
pub struct MovementConfig {
    /// Velocity magnitude written to the rigid body while any input is held.
    pub speed: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self { speed: 240.0 }
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

impl MovementConfig {
    /// Parse and validate a config from RON source. `file` is only used for
    /// error reporting.
    pub fn from_ron(file: &str, contents: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = ron_options()
            .from_str(contents)
            .map_err(|e| ConfigLoadError {
                file: file.to_string(),
                message: format!("Parse error: {}", e),
            })?;

        config.validate().map_err(|message| ConfigLoadError {
            file: file.to_string(),
            message,
        })?;

        Ok(config)
    }

    /// Load a config file, failing on IO, parse, or validation errors.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let file_name = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
            file: file_name.clone(),
            message: format!("IO error: {}", e),
        })?;

        Self::from_ron(&file_name, &contents)
    }

    /// Load from file, falling back to defaults when the file is absent or
    /// invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if let Err(e) = fs::metadata(path) {
            if e.kind() == ErrorKind::NotFound {
                info!(
                    "No movement config at {}, using defaults",
                    path.display()
                );
                return Self::default();
            }
        }

        match Self::load(path) {
            Ok(config) => {
                info!("Loaded movement config from {}: speed={}", path.display(), config.speed);
                config
            }
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// A negative or non-finite speed would flip or poison the written velocity.
    pub fn validate(&self) -> Result<(), String> {
        if !self.speed.is_finite() {
            return Err(format!("speed must be finite, got {}", self.speed));
        }
        if self.speed < 0.0 {
            return Err(format!("speed must be non-negative, got {}", self.speed));
        }
        Ok(())
    }
}
