//! Validation for loaded controller values.

use super::data::ControllerDef;

/// A validation error naming the offending field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub requirement: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "field '{}' is {} but must be {}",
            self.field, self.value, self.requirement
        )
    }
}

fn check_positive(errors: &mut Vec<ValidationError>, field: &'static str, value: f32) {
    if !value.is_finite() || value <= 0.0 {
        errors.push(ValidationError {
            field,
            value,
            requirement: "finite and greater than zero",
        });
    }
}

/// Validate a controller definition.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_controller(def: &ControllerDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let tuning = &def.tuning;

    check_positive(&mut errors, "tuning.move_speed", tuning.move_speed);
    check_positive(&mut errors, "tuning.jump_force", tuning.jump_force);
    check_positive(&mut errors, "tuning.collision_radius", tuning.collision_radius);
    check_positive(
        &mut errors,
        "tuning.ground_probe_suppression_secs",
        tuning.ground_probe_suppression_secs,
    );
    check_positive(&mut errors, "slash_duration_secs", def.slash_duration_secs);

    for (field, value) in [
        ("tuning.ground_offset.0", tuning.ground_offset.0),
        ("tuning.ground_offset.1", tuning.ground_offset.1),
    ] {
        if !value.is_finite() {
            errors.push(ValidationError {
                field,
                value,
                requirement: "finite",
            });
        }
    }

    errors
}
