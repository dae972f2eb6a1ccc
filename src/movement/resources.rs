//! Movement domain: tuning resource for the motion core.

use std::time::Duration;

use bevy::prelude::*;

/// Per-character motion tuning, loaded from `controller.ron` at startup.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MotionTuning {
    /// Horizontal speed factor. Velocity is `axis * move_speed * fixed_dt`.
    pub move_speed: f32,
    /// Jump impulse factor, applied once as `jump_force * fixed_dt`.
    pub jump_force: f32,
    /// Radius of the ground probe circle.
    pub collision_radius: f32,
    /// Offset of the ground probe from the body origin.
    pub ground_offset: Vec2,
    /// Wall-clock window after a jump during which ground probes are ignored.
    pub ground_probe_suppression: Duration,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            move_speed: 10000.0,
            jump_force: 30000.0,
            collision_radius: 4.0,
            ground_offset: Vec2::new(0.0, -24.0),
            ground_probe_suppression: Duration::from_millis(200),
        }
    }
}

impl MotionTuning {
    /// Horizontal velocity produced by a full deflection for one tick of `dt` seconds.
    pub fn horizontal_velocity(&self, direction_x: f32, dt: f32) -> f32 {
        direction_x * self.move_speed * dt
    }

    /// Vertical velocity added by the jump impulse for one tick of `dt` seconds.
    pub fn jump_impulse(&self, dt: f32) -> f32 {
        self.jump_force * dt
    }
}
