//! Debug domain: state for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether the ground probe gizmo is drawn
    pub show_probe: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self { show_probe: true }
    }
}

impl DebugState {
    pub fn toggle_probe(&mut self) -> bool {
        self.show_probe = !self.show_probe;
        self.show_probe
    }
}
