//! Animation domain: messages raised from the animation timeline.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use super::ClipState;

/// Message fired when the clip state changes.
#[derive(Debug)]
pub struct AnimationStateChanged {
    pub entity: Entity,
    pub from: ClipState,
    pub to: ClipState,
}

impl Message for AnimationStateChanged {}

/// Message fired when a slash clip completes. This is the attack-end hook.
#[derive(Debug)]
pub struct SlashFinished {
    pub entity: Entity,
}

impl Message for SlashFinished {}
