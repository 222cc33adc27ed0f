//! Engine seams for the motion core.
//!
//! The controller never touches ECS data directly. Each tick receives the
//! collaborators it needs through these traits, so the same state machine
//! runs against avian2d in the game and against plain structs in tests.

use bevy::prelude::*;

/// Per-frame input readings.
pub trait InputSource {
    /// Horizontal axis in [-1, 1].
    fn axis_value(&self) -> f32;

    /// Jump was pressed this frame (edge, not level).
    fn jump_just_pressed(&self) -> bool;

    /// Dash was pressed this frame (edge, not level).
    fn dash_just_pressed(&self) -> bool;
}

/// The rigid body the controller steers.
pub trait PhysicsBody {
    fn velocity(&self) -> Vec2;

    fn set_velocity(&mut self, velocity: Vec2);
}

/// Ground overlap query.
pub trait GroundProbe {
    /// World-space probe point, or `None` when no ground check is configured.
    fn check_point(&self) -> Option<Vec2>;

    /// Whether a circle at `point` overlaps any collider in `layer_mask`.
    fn overlaps_ground(&self, point: Vec2, radius: f32, layer_mask: u32) -> bool;
}
