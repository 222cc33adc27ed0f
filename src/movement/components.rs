//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Where the ground overlap circle sits, relative to the body origin.
///
/// A player without this component is never grounded.
#[derive(Component, Debug, Clone, Copy)]
pub struct GroundCheck {
    pub offset: Vec2,
}

impl GroundCheck {
    pub fn new(offset: Vec2) -> Self {
        Self { offset }
    }

    /// World-space probe point for a body at `transform`.
    pub fn point(&self, transform: &Transform) -> Vec2 {
        transform.translation.truncate() + self.offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 for right, -1 for left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    /// Facing implied by a horizontal axis value, `None` when the axis is zero.
    pub fn from_axis(axis: f32) -> Option<Self> {
        if axis > 0.0 {
            Some(Facing::Right)
        } else if axis < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}
