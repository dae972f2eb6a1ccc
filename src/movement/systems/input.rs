//! Movement domain: input sources that fill the per-frame snapshot.

use bevy::prelude::*;

use crate::movement::{ControllerInput, InputScheme};

pub(crate) fn read_keyboard_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&InputScheme, &mut ControllerInput)>,
) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let snapshot = ControllerInput {
        axis: x,
        jump_pressed: keyboard.just_pressed(KeyCode::Space)
            || keyboard.just_pressed(KeyCode::KeyK),
        attack_pressed: keyboard.just_pressed(KeyCode::KeyJ)
            || keyboard.just_pressed(KeyCode::KeyX),
        debug_pressed: keyboard.just_pressed(KeyCode::F3),
    };

    for (scheme, mut input) in &mut query {
        if *scheme == InputScheme::Keyboard {
            *input = snapshot;
        }
    }
}

pub(crate) fn read_gamepad_input(
    gamepads: Query<&Gamepad>,
    mut query: Query<(&InputScheme, &mut ControllerInput)>,
) {
    // Neutral snapshot when nothing is connected.
    let snapshot = gamepads
        .iter()
        .next()
        .map(|gamepad| ControllerInput {
            axis: gamepad.left_stick().x,
            jump_pressed: gamepad.just_pressed(GamepadButton::South),
            attack_pressed: gamepad.just_pressed(GamepadButton::West),
            debug_pressed: gamepad.just_pressed(GamepadButton::Select),
        })
        .unwrap_or_default();

    for (scheme, mut input) in &mut query {
        if *scheme == InputScheme::Gamepad {
            *input = snapshot;
        }
    }
}
