//! Content domain: tests for controller parsing, validation and fallback.

use std::path::Path;
use std::time::Duration;

use bevy::prelude::Vec2;

use super::{
    ContentLoadErrorKind, ControllerDef, load_controller_def, parse_controller_def,
    resolve_controller_def, validate_controller,
};
use crate::movement::InputScheme;

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_parse_full_controller_def() {
    let def = parse_controller_def(
        "inline",
        r#"(
            input: Gamepad,
            tuning: (
                move_speed: 250.0,
                jump_force: 700.0,
                collision_radius: 0.1,
                ground_offset: (0.0, -0.5),
                ground_probe_suppression_secs: 0.2,
            ),
            slash_duration_secs: 0.3,
        )"#,
    )
    .unwrap();

    assert_eq!(def.input, InputScheme::Gamepad);
    assert_eq!(def.tuning.move_speed, 250.0);
    assert_eq!(def.tuning.jump_force, 700.0);
    assert_eq!(def.tuning.ground_offset, (0.0, -0.5));
    assert_eq!(def.slash_duration_secs, 0.3);
}

#[test]
fn test_missing_fields_take_defaults() {
    let def = parse_controller_def("inline", "(tuning: (move_speed: 5.0))").unwrap();
    let defaults = ControllerDef::default();

    assert_eq!(def.tuning.move_speed, 5.0);
    assert_eq!(def.tuning.jump_force, defaults.tuning.jump_force);
    assert_eq!(def.input, defaults.input);
    assert_eq!(def.slash_duration_secs, defaults.slash_duration_secs);
}

#[test]
fn test_parse_error_is_reported() {
    let err = parse_controller_def("broken.ron", "(tuning: (move_speed: \"fast\"))").unwrap_err();
    assert_eq!(err.kind, ContentLoadErrorKind::Parse);
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_controller_def(Path::new("does/not/exist/controller.ron")).unwrap_err();
    assert_eq!(err.kind, ContentLoadErrorKind::Io);
}

#[test]
fn test_shipped_controller_file_loads_and_validates() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/controller.ron");
    let def = load_controller_def(&path).unwrap();
    assert!(validate_controller(&def).is_empty());
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_default_def_is_valid() {
    assert!(validate_controller(&ControllerDef::default()).is_empty());
}

#[test]
fn test_validation_flags_each_bad_field() {
    let mut def = ControllerDef::default();
    def.tuning.move_speed = 0.0;
    def.tuning.collision_radius = -1.0;
    def.tuning.ground_probe_suppression_secs = f32::NAN;
    def.tuning.ground_offset = (f32::INFINITY, 0.0);

    let errors = validate_controller(&def);
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();

    assert_eq!(errors.len(), 4);
    assert!(fields.contains(&"tuning.move_speed"));
    assert!(fields.contains(&"tuning.collision_radius"));
    assert!(fields.contains(&"tuning.ground_probe_suppression_secs"));
    assert!(fields.contains(&"tuning.ground_offset.0"));
}

#[test]
fn test_invalid_def_falls_back_to_defaults() {
    let mut def = ControllerDef::default();
    def.tuning.jump_force = -10.0;
    def.input = InputScheme::Gamepad;

    assert_eq!(resolve_controller_def(Ok(def)), ControllerDef::default());
}

#[test]
fn test_valid_def_is_kept() {
    let mut def = ControllerDef::default();
    def.input = InputScheme::Gamepad;

    assert_eq!(resolve_controller_def(Ok(def.clone())), def);
}

// -----------------------------------------------------------------------------
// Conversion
// -----------------------------------------------------------------------------

#[test]
fn test_tuning_conversion() {
    let tuning = ControllerDef::default().tuning.to_tuning();
    assert_eq!(tuning.ground_offset, Vec2::new(0.0, -24.0));
    assert_eq!(tuning.ground_probe_suppression, Duration::from_secs_f32(0.2));
}
