//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod motion;

pub(crate) use input::{read_gamepad_input, read_keyboard_input};
pub(crate) use motion::{
    apply_facing_flip, end_slashing, physics_step, step_motion, tick_ground_probe_rearm,
};
