//! Movement domain: dev-only test arena and velocity visualization.

use avian2d::prelude::*;
use bevy::ecs::entity::EntityHashMap;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementSet, Player};

/// Gizmo arrow length per unit of speed.
const VELOCITY_ARROW_SCALE: f32 = 0.25;

pub(crate) struct MovementDevPlugin;

impl Plugin for MovementDevPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VelocityTrace>()
            .add_systems(Startup, spawn_test_arena)
            .add_systems(
                Update,
                (draw_velocity_gizmos, trace_velocity_changes).after(MovementSet::Apply),
            );
    }
}

/// Wall segment as (center, size).
pub(crate) fn arena_walls(half_extents: Vec2, thickness: f32) -> [(Vec2, Vec2); 4] {
    let horizontal = Vec2::new(half_extents.x * 2.0 + thickness, thickness);
    let vertical = Vec2::new(thickness, half_extents.y * 2.0 + thickness);
    [
        (Vec2::new(0.0, half_extents.y), horizontal),
        (Vec2::new(0.0, -half_extents.y), horizontal),
        (Vec2::new(-half_extents.x, 0.0), vertical),
        (Vec2::new(half_extents.x, 0.0), vertical),
    ]
}

pub(crate) fn spawn_test_arena(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    for (center, size) in arena_walls(Vec2::new(560.0, 320.0), 40.0) {
        commands.spawn((
            Sprite {
                color: wall_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
        ));
    }
}

fn draw_velocity_gizmos(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &LinearVelocity), With<Player>>,
) {
    for (transform, velocity) in &query {
        if velocity.0 == Vec2::ZERO {
            continue;
        }
        let start = transform.translation.truncate();
        let end = start + velocity.0 * VELOCITY_ARROW_SCALE;
        gizmos.arrow_2d(start, end, Color::srgb(0.9, 0.8, 0.2));
    }
}

/// Last logged velocity per live player.
#[derive(Resource, Debug, Default)]
pub(crate) struct VelocityTrace(pub EntityHashMap<Vec2>);

/// The solver touches `LinearVelocity` every step, so compare values instead of
/// relying on change detection.
pub(crate) fn trace_velocity_changes(
    mut trace: ResMut<VelocityTrace>,
    query: Query<(Entity, &LinearVelocity), With<Player>>,
) {
    trace.0.retain(|entity, _| query.contains(*entity));

    for (entity, velocity) in &query {
        if trace.0.insert(entity, velocity.0) != Some(velocity.0) {
            debug!(
                "Player {} velocity: ({:.3}, {:.3})",
                entity, velocity.x, velocity.y
            );
        }
    }
}
