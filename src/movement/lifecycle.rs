//! Movement domain: controller attach and detach.

use std::collections::HashSet;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimationDriver, AnimationSignals};
use crate::movement::{
    CharacterController, CharacterVisual, ControllerInput, GroundProbeRearm, InputScheme,
    MotionState,
};

/// A collaborator the motion core cannot run without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachError {
    MissingPhysicsBody,
    MissingAnimationDriver,
    MissingVisual,
}

impl std::fmt::Display for AttachError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttachError::MissingPhysicsBody => {
                write!(f, "no physics body (RigidBody + LinearVelocity)")
            }
            AttachError::MissingAnimationDriver => {
                write!(f, "no animation driver (AnimationSignals + AnimationDriver)")
            }
            AttachError::MissingVisual => write!(f, "no child tagged CharacterVisual"),
        }
    }
}

/// Collaborators present on an entity that wants a controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Collaborators {
    pub rigid_body: bool,
    pub velocity: bool,
    pub signals: bool,
    /// Raises the attack-end hook; without it a slash never ends.
    pub driver: bool,
    pub visual: bool,
}

impl Collaborators {
    pub fn check(&self) -> Result<(), AttachError> {
        if !self.rigid_body || !self.velocity {
            return Err(AttachError::MissingPhysicsBody);
        }
        if !self.signals || !self.driver {
            return Err(AttachError::MissingAnimationDriver);
        }
        if !self.visual {
            return Err(AttachError::MissingVisual);
        }
        Ok(())
    }
}

/// Attaches freshly added controllers. Entities missing a collaborator are
/// refused: the error is logged and `CharacterController` is removed so the
/// steps never see them.
pub(crate) fn attach_controllers(
    mut commands: Commands,
    added: Query<
        (
            Entity,
            Has<RigidBody>,
            Has<LinearVelocity>,
            Has<AnimationSignals>,
            Has<AnimationDriver>,
            Has<InputScheme>,
        ),
        Added<CharacterController>,
    >,
    visuals: Query<&ChildOf, With<CharacterVisual>>,
) {
    if added.is_empty() {
        return;
    }

    let with_visual: HashSet<Entity> = visuals.iter().map(|child_of| child_of.parent()).collect();

    for (entity, rigid_body, velocity, signals, driver, has_scheme) in &added {
        let collaborators = Collaborators {
            rigid_body,
            velocity,
            signals,
            driver,
            visual: with_visual.contains(&entity),
        };

        match collaborators.check() {
            Ok(()) => {
                let mut entity_commands = commands.entity(entity);
                entity_commands.insert((MotionState::default(), ControllerInput::default()));
                if !has_scheme {
                    warn!(
                        "Controller on {:?} has no InputScheme, defaulting to {:?}",
                        entity,
                        InputScheme::default()
                    );
                    entity_commands.insert(InputScheme::default());
                }
                info!("Controller attached: entity={:?}", entity);
            }
            Err(e) => {
                error!("Refusing to attach controller to {:?}: {}", entity, e);
                commands.entity(entity).remove::<CharacterController>();
            }
        }
    }
}

/// Drops the motion state, the input snapshot and any pending re-arm when a
/// controller is removed from a live entity.
pub(crate) fn detach_controllers(
    mut commands: Commands,
    mut removed: RemovedComponents<CharacterController>,
    attached: Query<(), With<MotionState>>,
) {
    for entity in removed.read() {
        if !attached.contains(entity) {
            continue;
        }
        if let Ok(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.try_remove::<(MotionState, ControllerInput, GroundProbeRearm)>();
            info!("Controller detached: entity={:?}", entity);
        }
    }
}
