//! Movement domain: input-driven velocity for the player character.

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod error;
mod resources;
mod systems;


pub use components::{GameLayer, MovementController, Player};
pub use error::MovementError;
pub use resources::{AxisInput, InputProvider};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{apply_movement, check_velocity_sinks, read_input};

/// Ordering for the per-frame movement pipeline.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSet {
    /// Refresh [`AxisInput`] from devices.
    Input,
    /// Check new controllers, then write velocities.
    Apply,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AxisInput>()
            .configure_sets(Update, (MovementSet::Input, MovementSet::Apply).chain())
            .add_systems(Startup, spawn_player)
            .add_systems(Update, read_input.in_set(MovementSet::Input))
            .add_systems(
                Update,
                (check_velocity_sinks, apply_movement)
                    .chain()
                    .in_set(MovementSet::Apply),
            );

        #[cfg(feature = "dev-tools")]
        app.add_plugins(dev::MovementDevPlugin);
    }
}
