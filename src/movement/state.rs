//! Movement domain: the character motion state machine.
//!
//! `MotionState` owns the facing, grounded, jumping and slashing flags of a
//! character. It is driven by two entry points that the host calls in a
//! fixed order every engine tick:
//!
//! - [`MotionState::step`] once per logical (variable-rate) frame with the
//!   frame's input snapshot.
//! - [`MotionState::physics_step`] once per fixed physics tick, producing the
//!   velocity written to the physics body.
//!
//! Two further hooks mutate the state from outside the tick stream:
//! [`MotionState::end_attack`] (raised by the animation timeline) and
//! [`MotionState::rearm_ground_probe`] (raised by the re-arm timer).

use bevy::prelude::*;

use crate::movement::MotionTuning;

/// Input snapshot for one logical frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Horizontal axis, clamped to [-1, 1].
    pub axis: f32,
    /// True only on the frame the slash button went down.
    pub attack_pressed: bool,
    /// True only on the frame the jump button went down.
    pub jump_pressed: bool,
}

impl FrameInput {
    pub fn new(axis: f32, attack_pressed: bool, jump_pressed: bool) -> Self {
        let axis = if axis.is_finite() {
            axis.clamp(-1.0, 1.0)
        } else {
            0.0
        };
        Self {
            axis,
            attack_pressed,
            jump_pressed,
        }
    }
}

/// Side effects requested by a logical step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Facing changed this frame; the visual must be turned 180° about Y.
    pub flipped: bool,
    /// A jump started this frame: fire the jump trigger and start the re-arm timer.
    pub jump_started: bool,
    /// A slash started this frame.
    pub slash_started: bool,
}

/// Per-character motion state. Created with every flag cleared when a
/// controller attaches and dropped with it.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct MotionState {
    direction_x: f32,
    is_attacking: bool,
    is_grounded: bool,
    is_facing_left: bool,
    ground_probe_suppressed: bool,
    jump_requested: bool,
}

impl MotionState {
    pub fn direction_x(&self) -> f32 {
        self.direction_x
    }

    pub fn is_attacking(&self) -> bool {
        self.is_attacking
    }

    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    pub fn is_facing_left(&self) -> bool {
        self.is_facing_left
    }

    pub fn is_ground_probe_suppressed(&self) -> bool {
        self.ground_probe_suppressed
    }

    pub fn is_jump_requested(&self) -> bool {
        self.jump_requested
    }

    /// Logical-frame step.
    ///
    /// A slash can only start on the ground and, once started, locks the
    /// horizontal axis to zero and swallows jump edges until
    /// [`end_attack`](Self::end_attack). Slash is evaluated before jump, so a
    /// frame carrying both edges only slashes.
    pub fn step(&mut self, input: FrameInput) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        let mut axis = input.axis;
        let mut jump_pressed = input.jump_pressed;

        if input.attack_pressed && self.is_grounded && !self.is_attacking {
            self.is_attacking = true;
            outcome.slash_started = true;
        }

        if self.is_attacking {
            axis = 0.0;
            jump_pressed = false;
        }

        self.direction_x = axis;

        if (axis > 0.0 && self.is_facing_left) || (axis < 0.0 && !self.is_facing_left) {
            self.is_facing_left = !self.is_facing_left;
            outcome.flipped = true;
        }

        if self.is_grounded && jump_pressed {
            self.is_grounded = false;
            // Sticky until the next physics tick consumes it.
            self.jump_requested = true;
            self.ground_probe_suppressed = true;
            outcome.jump_started = true;
        }

        outcome
    }

    /// Fixed-rate physics step. Returns the velocity to write to the body.
    ///
    /// `current_velocity` is the body's velocity as left by the physics
    /// integrator (gravity already applied). `probe` is only evaluated while
    /// airborne with the suppression window closed.
    pub fn physics_step(
        &mut self,
        current_velocity: Vec2,
        tuning: &MotionTuning,
        dt: f32,
        probe: impl FnOnce() -> bool,
    ) -> Vec2 {
        let velocity_x = tuning.horizontal_velocity(self.direction_x, dt);
        let mut velocity_y = current_velocity.y;

        if self.jump_requested && !self.is_grounded {
            velocity_y += tuning.jump_impulse(dt);
        }
        self.jump_requested = false;

        if !self.ground_probe_suppressed && !self.is_grounded && probe() {
            self.is_grounded = true;
        }

        Vec2::new(velocity_x, velocity_y)
    }

    /// Attack-end hook, raised when the slash animation completes.
    pub fn end_attack(&mut self) {
        self.is_attacking = false;
    }

    /// Re-arm hook, raised when the suppression window expires.
    pub fn rearm_ground_probe(&mut self) {
        self.ground_probe_suppressed = false;
    }
}
