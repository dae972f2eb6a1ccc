//! Movement domain: logical and physics step systems.

use std::f32::consts::PI;

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::animation::{AnimationSignals, SlashFinished};
use crate::movement::systems::collisions::probe_ground;
use crate::movement::{
    CharacterVisual, ControllerInput, FacingFlipped, FrameInput, GroundProbeRearm, MotionState,
    MotionTuning,
};

/// Logical step: consumes the frame's input snapshot and publishes the
/// animation signals.
pub(crate) fn step_motion(
    mut commands: Commands,
    tuning: Res<MotionTuning>,
    mut query: Query<(
        Entity,
        &ControllerInput,
        &mut MotionState,
        &LinearVelocity,
        &mut AnimationSignals,
    )>,
    mut flips: MessageWriter<FacingFlipped>,
) {
    for (entity, input, mut state, velocity, mut signals) in &mut query {
        let frame = FrameInput::new(input.axis, input.attack_pressed, input.jump_pressed);
        let outcome = state.step(frame);

        if outcome.flipped {
            flips.write(FacingFlipped { entity });
        }

        if outcome.slash_started {
            signals.fire_slash();
            debug!("Slash started: entity={:?}", entity);
        }

        if outcome.jump_started {
            commands
                .entity(entity)
                .insert(GroundProbeRearm::new(tuning.ground_probe_suppression));
            signals.fire_jump();
            debug!(
                "Jump started: entity={:?}, probe suppressed for {:?}",
                entity, tuning.ground_probe_suppression
            );
        }

        signals.is_slashing = state.is_attacking();
        signals.is_on_ground = state.is_grounded();
        signals.speed = velocity.x.abs();
        signals.velocity_y = velocity.y;
    }
}

/// Physics step: recomputes the body's velocity and probes for ground.
pub(crate) fn physics_step(
    time: Res<Time>,
    tuning: Res<MotionTuning>,
    spatial_query: SpatialQuery,
    mut query: Query<(Entity, &Transform, &mut MotionState, &mut LinearVelocity)>,
) {
    let dt = time.delta_secs();

    for (entity, transform, mut state, mut velocity) in &mut query {
        let was_grounded = state.is_grounded();
        let origin = transform.translation.truncate();

        let next = state.physics_step(velocity.0, &tuning, dt, || {
            probe_ground(&spatial_query, origin, &tuning)
        });
        velocity.0 = next;

        if state.is_grounded() && !was_grounded {
            debug!("Landed: entity={:?}, velocity={:?}", entity, next);
        }
    }
}

/// Ticks pending re-arm timers on the wall clock and re-enables the
/// ground probe when they expire.
pub(crate) fn tick_ground_probe_rearm(
    mut commands: Commands,
    time: Res<Time<Real>>,
    mut query: Query<(Entity, &mut GroundProbeRearm, &mut MotionState)>,
) {
    for (entity, mut rearm, mut state) in &mut query {
        rearm.tick(time.delta());

        if rearm.is_expired() {
            state.rearm_ground_probe();
            commands.entity(entity).remove::<GroundProbeRearm>();
        }
    }
}

/// Attack-end hook: clears the slash once its animation has finished.
pub(crate) fn end_slashing(
    mut finished: MessageReader<SlashFinished>,
    mut query: Query<&mut MotionState>,
) {
    for event in finished.read() {
        if let Ok(mut state) = query.get_mut(event.entity) {
            state.end_attack();
            debug!("Slash ended: entity={:?}", event.entity);
        }
    }
}

/// Turns the character's visual 180° about Y for every facing change.
pub(crate) fn apply_facing_flip(
    mut flips: MessageReader<FacingFlipped>,
    characters: Query<&Children>,
    mut visuals: Query<&mut Transform, With<CharacterVisual>>,
) {
    for event in flips.read() {
        let Ok(children) = characters.get(event.entity) else {
            continue;
        };
        for child in children.iter() {
            if let Ok(mut transform) = visuals.get_mut(child) {
                transform.rotate_y(PI);
            }
        }
    }
}
