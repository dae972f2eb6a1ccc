//! Animation domain: tests for clip resolution and the slash timeline.

use super::{AnimationDriver, AnimationSignals, ClipState};

fn grounded_signals() -> AnimationSignals {
    AnimationSignals {
        is_on_ground: true,
        ..Default::default()
    }
}

// -----------------------------------------------------------------------------
// Signals
// -----------------------------------------------------------------------------

#[test]
fn test_jump_trigger_fires_once() {
    let mut signals = AnimationSignals::default();
    assert!(!signals.take_jump());

    signals.fire_jump();
    assert!(signals.take_jump());
    assert!(!signals.take_jump());
}

#[test]
fn test_signals_display_uses_parameter_names() {
    let signals = AnimationSignals {
        is_slashing: true,
        speed: 2.0,
        velocity_y: -1.5,
        ..Default::default()
    };
    let text = signals.to_string();

    assert!(text.contains("isSlashing=true"));
    assert!(text.contains("isOnGround=false"));
    assert!(text.contains("speed=2.00"));
    assert!(text.contains("velocityY=-1.50"));
}

// -----------------------------------------------------------------------------
// Clip resolution
// -----------------------------------------------------------------------------

#[test]
fn test_resolve_grounded_states() {
    let mut signals = grounded_signals();
    assert_eq!(ClipState::resolve(&signals, false), ClipState::Idle);

    signals.speed = 200.0;
    assert_eq!(ClipState::resolve(&signals, false), ClipState::Run);
}

#[test]
fn test_resolve_airborne_states() {
    let mut signals = AnimationSignals {
        velocity_y: 300.0,
        ..Default::default()
    };
    assert_eq!(ClipState::resolve(&signals, false), ClipState::Rise);

    signals.velocity_y = -50.0;
    assert_eq!(ClipState::resolve(&signals, false), ClipState::Fall);
}

#[test]
fn test_resolve_priorities() {
    let mut signals = grounded_signals();
    assert_eq!(ClipState::resolve(&signals, true), ClipState::Jump);

    signals.is_slashing = true;
    assert_eq!(ClipState::resolve(&signals, true), ClipState::Slash);
}

// -----------------------------------------------------------------------------
// Slash timeline
// -----------------------------------------------------------------------------

#[test]
fn test_slash_clip_finishes_once() {
    let mut driver = AnimationDriver::new(0.3);
    assert!(driver.set_state(ClipState::Slash));

    assert!(!driver.advance(0.1));
    assert!(!driver.advance(0.1));
    assert!(driver.advance(0.15));
    assert!(!driver.advance(0.5));
}

#[test]
fn test_looping_states_never_finish() {
    let mut driver = AnimationDriver::new(0.3);
    driver.set_state(ClipState::Run);

    for _ in 0..20 {
        assert!(!driver.advance(0.1));
    }
}

#[test]
fn test_restart_rearms_slash_clip() {
    let mut driver = AnimationDriver::new(0.2);
    driver.set_state(ClipState::Slash);
    assert!(driver.advance(0.25));

    driver.restart();
    assert!(!driver.finished);
    assert!(driver.advance(0.25));
}

#[test]
fn test_set_state_tracks_previous() {
    let mut driver = AnimationDriver::default();
    assert!(!driver.set_state(ClipState::Idle));

    driver.set_state(ClipState::Run);
    driver.set_state(ClipState::Slash);
    assert_eq!(driver.previous_state, ClipState::Run);
    assert_eq!(driver.state, ClipState::Slash);
}
