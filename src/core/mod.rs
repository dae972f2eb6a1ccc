//! Core domain: camera, physics rate and world constants.

mod systems;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::systems::setup_camera;

/// Fixed physics rate. Matches the 0.02 s tick the tuning values assume.
pub const PHYSICS_HZ: f64 = 50.0;

/// Downward gravity in pixels per second squared.
pub const GRAVITY: f32 = 1000.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(PHYSICS_HZ))
            .insert_resource(Gravity(Vec2::NEG_Y * GRAVITY))
            .insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.1)))
            .add_systems(Startup, setup_camera);
    }
}
