//! Movement domain: controller checks and velocity writes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{AxisInput, MovementController, MovementError};

/// Runs once for each newly added controller. A controller spawned without a
/// `LinearVelocity` is a setup error and fails the schedule once every new
/// controller has been checked.
pub(crate) fn check_velocity_sinks(
    controllers: Query<
        (Entity, &MovementController, Option<&LinearVelocity>),
        Added<MovementController>,
    >,
) -> Result {
    let mut first_error: Option<MovementError> = None;

    for (entity, controller, velocity) in &controllers {
        match controller.init(velocity) {
            Ok(()) => debug!(
                "Movement controller ready on {}: speed={}",
                entity,
                controller.speed()
            ),
            Err(e) => {
                error!("Entity {}: {}", entity, e);
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

/// Writes every controller that has a sink, then reports the first one that
/// did not.
pub(crate) fn apply_movement(
    input: Res<AxisInput>,
    mut query: Query<(Entity, &MovementController, Option<&mut LinearVelocity>)>,
) -> Result {
    let mut first_error: Option<MovementError> = None;

    for (entity, controller, mut velocity) in &mut query {
        if let Err(e) = controller.on_tick(&*input, velocity.as_mut()) {
            error!("Entity {}: {}", entity, e);
            first_error.get_or_insert(e);
        }
    }

    match first_error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
