//! Animation clip state and the slash timeline.
//!
//! The driver only tracks which clip the character is in and how far the
//! non-looping slash clip has progressed. It renders nothing; its one job
//! towards the motion core is to report when the slash completes.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use super::{AnimationSignals, AnimationStateChanged, SlashFinished};

/// Horizontal speed below which a grounded character counts as idle.
pub const RUN_SPEED_THRESHOLD: f32 = 0.01;

/// Clip states for the player character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClipState {
    #[default]
    Idle,
    Run,
    Jump,
    Rise,
    Fall,
    Slash,
}

impl ClipState {
    /// Pick the clip for this frame's signals. `jump_fired` is the consumed
    /// jump trigger.
    pub fn resolve(signals: &AnimationSignals, jump_fired: bool) -> Self {
        if signals.is_slashing {
            ClipState::Slash
        } else if jump_fired {
            ClipState::Jump
        } else if !signals.is_on_ground {
            if signals.velocity_y > 0.0 {
                ClipState::Rise
            } else {
                ClipState::Fall
            }
        } else if signals.speed > RUN_SPEED_THRESHOLD {
            ClipState::Run
        } else {
            ClipState::Idle
        }
    }
}

/// Component for clip playback on a character.
#[derive(Component, Debug)]
pub struct AnimationDriver {
    /// Current clip state.
    pub state: ClipState,
    /// Previous state (for detecting transitions).
    pub previous_state: ClipState,
    /// Length of the slash clip in seconds.
    pub slash_duration: f32,
    /// Time spent in the current clip.
    pub clip_timer: f32,
    /// Whether the current non-looping clip has completed.
    pub finished: bool,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(0.4)
    }
}

impl AnimationDriver {
    pub fn new(slash_duration: f32) -> Self {
        Self {
            state: ClipState::Idle,
            previous_state: ClipState::Idle,
            slash_duration,
            clip_timer: 0.0,
            finished: false,
        }
    }

    /// Set the clip state, restarting the clip if it changed.
    /// Returns true when the state changed.
    pub fn set_state(&mut self, state: ClipState) -> bool {
        if self.state == state {
            return false;
        }
        self.previous_state = self.state;
        self.state = state;
        self.restart();
        true
    }

    /// Restart the current clip from its first frame.
    pub fn restart(&mut self) {
        self.clip_timer = 0.0;
        self.finished = false;
    }

    /// Advance the clip by `dt` seconds. Returns true on the frame a slash
    /// clip completes.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }

        self.clip_timer += dt;

        if self.state == ClipState::Slash && self.clip_timer >= self.slash_duration {
            self.finished = true;
            return true;
        }
        false
    }
}

/// Applies the frame's signals to each driver and advances the clip.
pub fn drive_animations(
    time: Res<Time>,
    mut query: Query<(Entity, &mut AnimationSignals, &mut AnimationDriver)>,
    mut changed_events: MessageWriter<AnimationStateChanged>,
    mut finished_events: MessageWriter<SlashFinished>,
) {
    for (entity, mut signals, mut driver) in &mut query {
        let jump_fired = signals.take_jump();
        let slash_fired = signals.take_slash();
        let next = ClipState::resolve(&signals, jump_fired);

        if driver.set_state(next) {
            changed_events.write(AnimationStateChanged {
                entity,
                from: driver.previous_state,
                to: next,
            });
        } else if slash_fired {
            // Back-to-back slash: same state, fresh clip.
            driver.restart();
        }

        if driver.advance(time.delta_secs()) {
            finished_events.write(SlashFinished { entity });
        }
    }
}
