//! Content domain: controller configuration loaded from RON at startup.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::ControllerDef;
pub use loader::{
    ContentLoadError, ContentLoadErrorKind, load_controller_def, parse_controller_def,
};
pub use validation::validate_controller;

use bevy::prelude::*;
use std::path::Path;

/// Location of the controller definition, relative to the working directory.
pub const CONTROLLER_PATH: &str = "assets/data/controller.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_controller_content);
    }
}

/// Resolve the definition to use: the loaded one if it loads and validates,
/// the defaults otherwise.
pub fn resolve_controller_def(loaded: Result<ControllerDef, ContentLoadError>) -> ControllerDef {
    match loaded {
        Ok(def) => {
            let errors = validate_controller(&def);
            if errors.is_empty() {
                def
            } else {
                for e in &errors {
                    error!("Invalid controller content: {}", e);
                }
                warn!("Using default controller settings");
                ControllerDef::default()
            }
        }
        Err(e) if e.kind == ContentLoadErrorKind::Io => {
            warn!("{}; using default controller settings", e);
            ControllerDef::default()
        }
        Err(e) => {
            error!("{}", e);
            warn!("Using default controller settings");
            ControllerDef::default()
        }
    }
}

fn load_controller_content(mut commands: Commands) {
    let def = resolve_controller_def(load_controller_def(Path::new(CONTROLLER_PATH)));
    let tuning = def.tuning.to_tuning();

    info!(
        "Loaded controller content: move_speed={}, jump_force={}, probe_radius={}, suppression={:?}",
        tuning.move_speed, tuning.jump_force, tuning.collision_radius, tuning.ground_probe_suppression
    );

    commands.insert_resource(tuning);
    commands.insert_resource(def);
}
