//! Level domain: camera and a small test room to move around in.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground};

/// World units per screen pixel at the default window size.
const CAMERA_SCALE: f32 = 1.0 / 48.0;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.12, 0.12, 0.16)))
            .add_systems(Startup, (setup_camera, spawn_test_room));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, 2.0, 0.0),
    ));
}

fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // (center, size, color)
    let slabs = [
        // Floor
        (Vec2::new(0.0, -4.0), Vec2::new(24.0, 1.0), ground_color),
        // Platform - left side
        (Vec2::new(-5.0, -1.0), Vec2::new(4.0, 0.4), platform_color),
        // Platform - right side, higher
        (Vec2::new(5.0, 1.5), Vec2::new(4.0, 0.4), platform_color),
        // Platform - center, highest
        (Vec2::new(0.0, 4.0), Vec2::new(3.0, 0.4), platform_color),
    ];

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    for (center, size, color) in slabs {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }
}
