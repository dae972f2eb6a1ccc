//! Debug tooling for tuning the controller in a running game.
//!
//! Features:
//! - Ground probe gizmo (F1 to toggle)
//! - Motion snapshot logging on the debug button
//! - Animation transition logging

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{
    draw_ground_probe, log_animation_changes, log_debug_snapshot, toggle_probe_gizmo,
};
use crate::movement::MotionSet;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_probe_gizmo,
                draw_ground_probe,
                log_debug_snapshot.after(MotionSet::Step),
                log_animation_changes,
            ),
        );
    }
}
