//! Movement domain: the character motion core and its plugin wiring.

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
pub(crate) mod dev;
mod events;
mod lifecycle;
mod resources;
mod state;
mod systems;


pub use components::{
    CharacterController, CharacterVisual, ControllerInput, GameLayer, Ground, GroundProbeRearm,
    InputScheme, Player,
};
pub use events::FacingFlipped;
pub use lifecycle::{AttachError, Collaborators};
pub use resources::MotionTuning;
pub use state::{FrameInput, MotionState, StepOutcome};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::lifecycle::{attach_controllers, detach_controllers};
use crate::movement::systems::{
    apply_facing_flip, end_slashing, physics_step, read_gamepad_input, read_keyboard_input,
    step_motion, tick_ground_probe_rearm,
};

/// System ordering for the logical step.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MotionSet {
    /// Controller attach and detach.
    Lifecycle,
    /// Input sources fill the frame snapshot.
    Input,
    /// Hooks raised outside the tick stream (attack end, probe re-arm).
    Hooks,
    /// The logical step itself.
    Step,
    /// Side effects of the step (facing flip).
    Effects,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionTuning>()
            .add_message::<FacingFlipped>()
            .configure_sets(
                Update,
                (
                    MotionSet::Lifecycle,
                    MotionSet::Input,
                    MotionSet::Hooks,
                    MotionSet::Step,
                    MotionSet::Effects,
                )
                    .chain(),
            )
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (attach_controllers, detach_controllers)
                    .chain()
                    .in_set(MotionSet::Lifecycle),
            )
            .add_systems(
                Update,
                (read_keyboard_input, read_gamepad_input).in_set(MotionSet::Input),
            )
            .add_systems(
                Update,
                (end_slashing, tick_ground_probe_rearm).in_set(MotionSet::Hooks),
            )
            .add_systems(Update, step_motion.in_set(MotionSet::Step))
            .add_systems(Update, apply_facing_flip.in_set(MotionSet::Effects))
            .add_systems(FixedUpdate, physics_step);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room);
    }
}
