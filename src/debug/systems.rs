//! Debug domain: probe gizmo and snapshot logging.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::animation::{AnimationSignals, AnimationStateChanged};
use crate::debug::state::DebugState;
use crate::movement::{ControllerInput, MotionState, MotionTuning};

/// Toggle the probe gizmo with F1
pub(crate) fn toggle_probe_gizmo(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        let visible = debug_state.toggle_probe();
        info!("Ground probe gizmo: {}", if visible { "on" } else { "off" });
    }
}

/// Draw the ground probe circle while the probe is armed.
pub(crate) fn draw_ground_probe(
    mut gizmos: Gizmos,
    debug_state: Res<DebugState>,
    tuning: Res<MotionTuning>,
    query: Query<(&Transform, &MotionState)>,
) {
    if !debug_state.show_probe {
        return;
    }

    for (transform, state) in &query {
        if state.is_ground_probe_suppressed() {
            continue;
        }
        let center = transform.translation.truncate() + tuning.ground_offset;
        gizmos.circle_2d(center, tuning.collision_radius, Color::srgb(1.0, 0.0, 0.0));
    }
}

/// Log the full motion snapshot when the debug button is pressed.
pub(crate) fn log_debug_snapshot(
    query: Query<(Entity, &ControllerInput, &MotionState, &AnimationSignals)>,
) {
    for (entity, input, state, signals) in &query {
        if !input.debug_pressed {
            continue;
        }
        info!(
            "Debug {:?}: direction_x={}, attacking={}, grounded={}, facing_left={}, probe_suppressed={}, jump_requested={} | {}",
            entity,
            state.direction_x(),
            state.is_attacking(),
            state.is_grounded(),
            state.is_facing_left(),
            state.is_ground_probe_suppressed(),
            state.is_jump_requested(),
            signals
        );
    }
}

pub(crate) fn log_animation_changes(mut events: MessageReader<AnimationStateChanged>) {
    for event in events.read() {
        debug!(
            "Animation {:?}: {:?} -> {:?}",
            event.entity, event.from, event.to
        );
    }
}
