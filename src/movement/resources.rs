//! Movement domain: axis input provider.

use bevy::prelude::*;

/// Axis name for left/right input.
pub const HORIZONTAL: &str = "Horizontal";
/// Axis name for down/up input.
pub const VERTICAL: &str = "Vertical";

/// Source of per-tick axis values in [-1, 1].
///
/// Sampling is total: an axis with no input, or a name the provider does not
/// know, reads as `0.0`.
pub trait InputProvider {
    fn get_axis(&self, name: &str) -> f32;

    /// Both movement axes as `(Horizontal, Vertical)`.
    fn axes(&self) -> Vec2 {
        Vec2::new(self.get_axis(HORIZONTAL), self.get_axis(VERTICAL))
    }
}

/// Live axis state, refreshed once per frame from keyboard and gamepad.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct AxisInput {
    pub horizontal: f32,
    pub vertical: f32,
}

impl AxisInput {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal: horizontal.clamp(-1.0, 1.0),
            vertical: vertical.clamp(-1.0, 1.0),
        }
    }
}

impl InputProvider for AxisInput {
    fn get_axis(&self, name: &str) -> f32 {
        match name {
            HORIZONTAL => self.horizontal,
            VERTICAL => self.vertical,
            _ => 0.0,
        }
    }
}
