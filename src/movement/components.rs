//! Movement domain: components and physics layers for locomotion.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marks an entity as driven by the motion core. Adding it attaches the
/// controller, removing it detaches.
#[derive(Component, Debug, Default)]
pub struct CharacterController;

/// Marker for the child entity that carries the character's visuals.
/// Facing flips rotate this transform, never the physics body.
#[derive(Component, Debug)]
pub struct CharacterVisual;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Which device fills an entity's [`ControllerInput`].
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum InputScheme {
    #[default]
    Keyboard,
    /// First connected gamepad.
    Gamepad,
}

/// Input snapshot for the current frame, rewritten in full by the input
/// source every frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerInput {
    pub axis: f32,
    pub attack_pressed: bool,
    pub jump_pressed: bool,
    pub debug_pressed: bool,
}

/// Pending re-arm of the ground probe after a jump.
/// Dropping the component (detach or despawn) cancels the callback.
#[derive(Component, Debug)]
pub struct GroundProbeRearm {
    pub timer: Timer,
}

impl GroundProbeRearm {
    pub fn new(duration: Duration) -> Self {
        Self {
            timer: Timer::new(duration, TimerMode::Once),
        }
    }

    pub fn tick(&mut self, delta: Duration) {
        self.timer.tick(delta);
    }

    pub fn is_expired(&self) -> bool {
        self.timer.remaining_secs() == 0.0
    }
}
