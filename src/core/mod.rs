//! Core domain: camera setup and startup configuration.

mod config;
mod systems;


pub use config::{DEFAULT_CONFIG_PATH, MovementConfig};

use bevy::prelude::*;
use std::path::PathBuf;

use crate::core::systems::setup_camera;

pub struct CorePlugin {
    /// RON file the movement config is read from.
    pub config_path: PathBuf,
}

impl Default for CorePlugin {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        // Requires LogPlugin to be added first for the load messages to show
        let config = MovementConfig::load_or_default(&self.config_path);

        app.insert_resource(config)
            .add_systems(Startup, setup_camera);
    }
}
