//! Movement domain: player spawn from the loaded motion settings.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::config::MotionSettings;
use crate::movement::{CharacterMotionController, GameLayer, GroundCheck, Player};
use crate::visuals::{BaseScale, MotionVisualState, PlayerSprite};

/// Player body size in world units.
const PLAYER_SIZE: Vec2 = Vec2::new(0.6, 1.2);

pub(crate) fn spawn_player(
    mut commands: Commands,
    settings: Res<MotionSettings>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let controller = match CharacterMotionController::new(settings.0.clone()) {
        Ok(controller) => controller,
        Err(errors) => {
            for error in &errors {
                error!("Cannot spawn player: {}", error);
            }
            return;
        }
    };

    info!(
        "Spawning player: move_speed={}, jump_force={}, dash_force={}, dash_cooldown={}",
        settings.0.move_speed, settings.0.jump_force, settings.0.dash_force, settings.0.dash_cooldown
    );

    commands
        .spawn((
            // Identity & Movement
            (
                Player,
                controller,
                GroundCheck::new(Vec2::new(0.0, -PLAYER_SIZE.y / 2.0)),
            ),
            Transform::from_xyz(0.0, 2.0, 0.0),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(3.0),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        // Deformation lives on a child so the collider keeps its shape.
        .with_child((
            PlayerSprite,
            BaseScale(Vec3::ONE),
            MotionVisualState::default(),
            Sprite {
                color: MotionVisualState::default().tint(),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::default(),
        ));
}
