//! Visuals domain: sprite-side components for the player.

use bevy::prelude::*;

use crate::movement::CharacterMotionController;

/// Marker for the sprite child that renders the player body.
#[derive(Component, Debug)]
pub struct PlayerSprite;

/// Spawn-time scale that deformation multiplies.
#[derive(Component, Debug, Clone, Copy)]
pub struct BaseScale(pub Vec3);

/// Coarse pose shown by the player sprite.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionVisualState {
    #[default]
    Idle,
    Walking,
    Airborne,
    Dashing,
}

impl MotionVisualState {
    /// Dashing wins over airborne, airborne over walking.
    pub fn from_controller(controller: &CharacterMotionController) -> Self {
        if controller.is_dashing() {
            MotionVisualState::Dashing
        } else if !controller.is_grounded() {
            MotionVisualState::Airborne
        } else if controller.is_walking() {
            MotionVisualState::Walking
        } else {
            MotionVisualState::Idle
        }
    }

    pub fn tint(self) -> Color {
        match self {
            MotionVisualState::Idle => Color::srgb(0.9, 0.9, 0.9),
            MotionVisualState::Walking => Color::srgb(0.85, 0.92, 1.0),
            MotionVisualState::Airborne => Color::srgb(1.0, 0.95, 0.8),
            MotionVisualState::Dashing => Color::srgb(0.6, 0.9, 1.0),
        }
    }
}
