//! Animation domain: signals published by the motion core each frame.

use bevy::prelude::*;

/// Animator parameter names, as the clip graph knows them.
pub const PARAM_SPEED: &str = "speed";
pub const PARAM_VELOCITY_Y: &str = "velocityY";
pub const PARAM_IS_SLASHING: &str = "isSlashing";
pub const PARAM_IS_ON_GROUND: &str = "isOnGround";
pub const PARAM_JUMP: &str = "jump";

/// Parameters written by the logical step and read by the animation driver.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct AnimationSignals {
    pub is_slashing: bool,
    pub is_on_ground: bool,
    /// Absolute horizontal velocity from the last physics tick.
    pub speed: f32,
    /// Vertical velocity from the last physics tick.
    pub velocity_y: f32,
    pub(crate) jump: bool,
    pub(crate) slash: bool,
}

impl AnimationSignals {
    /// Fire the jump trigger. It stays set until the driver consumes it.
    pub fn fire_jump(&mut self) {
        self.jump = true;
    }

    /// Consume the jump trigger.
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump)
    }

    /// Fire the slash trigger so the driver restarts the slash clip.
    pub fn fire_slash(&mut self) {
        self.slash = true;
    }

    /// Consume the slash trigger.
    pub fn take_slash(&mut self) -> bool {
        std::mem::take(&mut self.slash)
    }
}

impl std::fmt::Display for AnimationSignals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}={} {}={} {}={:.2} {}={:.2} {}={}",
            PARAM_IS_SLASHING,
            self.is_slashing,
            PARAM_IS_ON_GROUND,
            self.is_on_ground,
            PARAM_SPEED,
            self.speed,
            PARAM_VELOCITY_Y,
            self.velocity_y,
            PARAM_JUMP,
            self.jump
        )
    }
}
