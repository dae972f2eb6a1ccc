//! Movement domain: player bootstrap from the loaded controller definition.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimationDriver, AnimationSignals};
use crate::content::ControllerDef;
use crate::movement::{CharacterController, CharacterVisual, GameLayer, Player};

/// Spawns the player body with every collaborator the controller needs.
pub(crate) fn spawn_player(
    mut commands: Commands,
    controller: Option<Res<ControllerDef>>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let def = match controller {
        Some(def) => def.clone(),
        None => {
            warn!("ControllerDef not available, using default controller settings");
            ControllerDef::default()
        }
    };

    info!(
        "Spawning player: input={:?}, slash_duration={}s",
        def.input, def.slash_duration_secs
    );

    commands
        .spawn((
            // Identity & Control
            (
                Player,
                CharacterController,
                def.input,
                AnimationSignals::default(),
                AnimationDriver::new(def.slash_duration_secs),
            ),
            Transform::from_xyz(0.0, 100.0, 0.0),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(24.0, 48.0),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    CharacterVisual,
                    Sprite {
                        color: Color::srgb(0.9, 0.9, 0.9),
                        custom_size: Some(Vec2::new(24.0, 48.0)),
                        ..default()
                    },
                    Transform::default(),
                ))
                .with_children(|visual| {
                    // Eye marker so the facing is readable on screen.
                    visual.spawn((
                        Sprite {
                            color: Color::srgb(0.1, 0.1, 0.1),
                            custom_size: Some(Vec2::new(4.0, 4.0)),
                            ..default()
                        },
                        Transform::from_xyz(6.0, 14.0, 0.1),
                    ));
                });
        });
}
