//! Movement domain: messages emitted by the motion core.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Facing changed; the character's visual must turn 180° about Y.
#[derive(Debug)]
pub struct FacingFlipped {
    pub entity: Entity,
}

impl Message for FacingFlipped {}
