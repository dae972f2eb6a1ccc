//! Animation domain: signals from the motion core and the clip driver that
//! raises the attack-end hook.

mod driver;
mod events;
mod signals;

#[cfg(test)]
mod tests;

pub use driver::{AnimationDriver, ClipState, drive_animations};
pub use events::{AnimationStateChanged, SlashFinished};
pub use signals::AnimationSignals;

use bevy::prelude::*;

use crate::movement::MotionSet;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationStateChanged>()
            .add_message::<SlashFinished>()
            .add_systems(Update, drive_animations.after(MotionSet::Step));
    }
}
