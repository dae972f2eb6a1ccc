//! Data definitions for the controller RON file.
//!
//! These structs mirror the structure in assets/data/controller.ron and are
//! used for deserialization only. Missing fields take their defaults.

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{InputScheme, MotionTuning};

/// Wall-clock suppression window used when the configured one is unusable.
pub const DEFAULT_GROUND_PROBE_SUPPRESSION_SECS: f32 = 0.2;

// ============================================================================
// Controller (controller.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerDef {
    pub input: InputScheme,
    pub tuning: TuningDef,
    /// Length of the slash clip; the slash ends when it completes.
    pub slash_duration_secs: f32,
}

impl Default for ControllerDef {
    fn default() -> Self {
        Self {
            input: InputScheme::Keyboard,
            tuning: TuningDef::default(),
            slash_duration_secs: 0.4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TuningDef {
    pub move_speed: f32,
    pub jump_force: f32,
    pub collision_radius: f32,
    pub ground_offset: (f32, f32),
    pub ground_probe_suppression_secs: f32,
}

impl Default for TuningDef {
    fn default() -> Self {
        Self {
            move_speed: 10000.0,
            jump_force: 30000.0,
            collision_radius: 4.0,
            ground_offset: (0.0, -24.0),
            ground_probe_suppression_secs: DEFAULT_GROUND_PROBE_SUPPRESSION_SECS,
        }
    }
}

impl TuningDef {
    pub fn to_tuning(&self) -> MotionTuning {
        let suppression = Duration::try_from_secs_f32(self.ground_probe_suppression_secs)
            .unwrap_or(Duration::from_secs_f32(DEFAULT_GROUND_PROBE_SUPPRESSION_SECS));

        MotionTuning {
            move_speed: self.move_speed,
            jump_force: self.jump_force,
            collision_radius: self.collision_radius,
            ground_offset: Vec2::new(self.ground_offset.0, self.ground_offset.1),
            ground_probe_suppression: suppression,
        }
    }
}
