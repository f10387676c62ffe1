//! Movement domain: the movement controller and its velocity sink.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::MovementConfig;
use crate::movement::{InputProvider, MovementError};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Player character
    Player,
    /// Static level geometry
    Wall,
}

#[derive(Component, Debug)]
pub struct Player;

/// Anything whose linear velocity can be overwritten once per tick.
pub trait VelocitySink {
    fn set_velocity(&mut self, velocity: Vec2);
}

impl VelocitySink for LinearVelocity {
    fn set_velocity(&mut self, velocity: Vec2) {
        self.0 = velocity;
    }
}

/// Only marks the component changed when the value actually differs.
impl VelocitySink for Mut<'_, LinearVelocity> {
    fn set_velocity(&mut self, velocity: Vec2) {
        self.set_if_neq(LinearVelocity(velocity));
    }
}

/// Drives the entity's rigid body from the two movement axes.
///
/// The controller holds no per-tick state: every tick recomputes the velocity
/// from the current input alone, so the same input always produces the same
/// write.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct MovementController {
    /// Magnitude of the written velocity. Fixed after construction.
    speed: f32,
}

impl MovementController {
    pub fn new(config: &MovementConfig) -> Self {
        Self {
            speed: config.speed,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Initialization-time check that a velocity sink is attached.
    pub fn init<S: VelocitySink>(&self, sink: Option<&S>) -> Result<(), MovementError> {
        match sink {
            Some(_) => Ok(()),
            None => Err(MovementError::MissingDependency),
        }
    }

    /// Velocity for a raw axis pair: unit direction scaled by speed.
    ///
    /// A zero (or non-finite) input yields `Vec2::ZERO` rather than NaN.
    pub fn steer(&self, raw: Vec2) -> Vec2 {
        raw.normalize_or_zero() * self.speed
    }

    /// Sample `input` and overwrite the sink's velocity. Nothing is written
    /// when the sink is missing.
    pub fn on_tick<I, S>(&self, input: &I, sink: Option<&mut S>) -> Result<(), MovementError>
    where
        I: InputProvider + ?Sized,
        S: VelocitySink + ?Sized,
    {
        let sink = sink.ok_or(MovementError::MissingDependency)?;
        sink.set_velocity(self.steer(input.axes()));
        Ok(())
    }
}
