//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::AxisInput;

/// Digital axis from a negative/positive key pair. Opposing keys cancel.
fn key_axis(
    keyboard: &ButtonInput<KeyCode>,
    negative: [KeyCode; 2],
    positive: [KeyCode; 2],
) -> f32 {
    let mut value = 0.0;
    if keyboard.any_pressed(negative) {
        value -= 1.0;
    }
    if keyboard.any_pressed(positive) {
        value += 1.0;
    }
    value
}

/// Per axis, the source pushed furthest from rest wins.
pub(crate) fn combine_axis(keys: f32, stick: f32) -> f32 {
    if stick.abs() > keys.abs() { stick } else { keys }
}

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut input: ResMut<AxisInput>,
) {
    let keys = Vec2::new(
        key_axis(
            &keyboard,
            [KeyCode::KeyA, KeyCode::ArrowLeft],
            [KeyCode::KeyD, KeyCode::ArrowRight],
        ),
        key_axis(
            &keyboard,
            [KeyCode::KeyS, KeyCode::ArrowDown],
            [KeyCode::KeyW, KeyCode::ArrowUp],
        ),
    );

    // Strongest left stick across connected gamepads
    let stick = gamepads
        .iter()
        .map(|gamepad| gamepad.left_stick())
        .fold(Vec2::ZERO, |best, s| {
            Vec2::new(combine_axis(best.x, s.x), combine_axis(best.y, s.y))
        });

    *input = AxisInput::new(
        combine_axis(keys.x, stick.x),
        combine_axis(keys.y, stick.y),
    );
}
