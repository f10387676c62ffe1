//! Movement domain: player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::MovementConfig;
use crate::movement::{GameLayer, MovementController, Player};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Top-down physics body for a controlled character. Gravity is disabled since
/// the controller owns the full velocity vector.
pub(crate) fn controlled_body() -> impl Bundle {
    (
        RigidBody::Dynamic,
        Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
        LockedAxes::ROTATION_LOCKED,
        LinearVelocity::default(),
        GravityScale(0.0),
        Friction::new(0.0),
        CollisionLayers::new(GameLayer::Player, [GameLayer::Wall]),
    )
}

pub(crate) fn spawn_player(mut commands: Commands, config: Res<MovementConfig>) {
    let controller = MovementController::new(&config);

    info!("Spawning player: speed={}", controller.speed());

    commands.spawn((
        Player,
        controller,
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        // Physics
        controlled_body(),
    ));
}
