mod core;
mod movement;

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::PathBuf;

fn main() {
    // Optional first argument overrides the movement config location
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(core::DEFAULT_CONFIG_PATH));

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Echoing Songs".to_string(),
                resolution: (1280u32, 720u32).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((core::CorePlugin { config_path }, movement::MovementPlugin))
        .run();
}
