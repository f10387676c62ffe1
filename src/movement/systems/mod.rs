//! Movement domain: system modules for input sampling and velocity writes.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use movement::{apply_movement, check_velocity_sinks};
