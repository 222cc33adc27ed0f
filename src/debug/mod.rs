//! Debug tooling for tuning motion (feature `dev-tools`).
//!
//! - Ground check gizmo at the check point, yellow while airborne
//! - F3 logs the player's motion state as JSON

use bevy::prelude::*;
use serde::Serialize;

use crate::movement::{CharacterMotionController, Facing, GroundCheck, Player};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (draw_ground_check, dump_motion_state));
    }
}

/// Serializable copy of the motion state for the F3 dump.
#[derive(Debug, Serialize)]
pub struct MotionSnapshot {
    pub grounded: bool,
    pub walking: bool,
    pub dashing: bool,
    pub facing: &'static str,
    pub coyote: f32,
    pub jump_buffer: f32,
    pub dash: f32,
    pub dash_cooldown: f32,
    pub current_scale: [f32; 3],
    pub target_scale: [f32; 3],
}

impl MotionSnapshot {
    pub fn capture(controller: &CharacterMotionController) -> Self {
        let state = controller.state();
        Self {
            grounded: controller.is_grounded(),
            walking: controller.is_walking(),
            dashing: controller.is_dashing(),
            facing: match controller.facing_direction() {
                Facing::Left => "left",
                Facing::Right => "right",
            },
            coyote: state.coyote.remaining(),
            jump_buffer: state.jump_buffer.remaining(),
            dash: state.dash.remaining(),
            dash_cooldown: state.dash_cooldown.remaining(),
            current_scale: state.current_scale.to_array(),
            target_scale: state.target_scale.to_array(),
        }
    }
}

fn draw_ground_check(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &GroundCheck, &CharacterMotionController), With<Player>>,
) {
    for (transform, ground_check, controller) in &query {
        let color = if controller.is_grounded() {
            Color::srgb(0.3, 0.9, 0.3)
        } else {
            Color::srgb(1.0, 0.9, 0.0)
        };
        gizmos.circle_2d(
            ground_check.point(transform),
            controller.config().check_radius,
            color,
        );
    }
}

fn dump_motion_state(
    keyboard: Res<ButtonInput<KeyCode>>,
    query: Query<(Entity, &CharacterMotionController), With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    for (entity, controller) in &query {
        match serde_json::to_string_pretty(&MotionSnapshot::capture(controller)) {
            Ok(json) => info!("[DEBUG] Motion state for {:?}:\n{}", entity, json),
            Err(e) => warn!("[DEBUG] Could not serialize motion state: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MotionConfig;

    #[test]
    fn snapshot_of_fresh_controller() {
        let controller = CharacterMotionController::new(MotionConfig::default()).unwrap();
        let snapshot = MotionSnapshot::capture(&controller);

        assert!(!snapshot.grounded);
        assert!(!snapshot.dashing);
        assert_eq!(snapshot.facing, "right");
        assert_eq!(snapshot.current_scale, [1.0, 1.0, 1.0]);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["facing"], "right");
        assert_eq!(json["dash_cooldown"], 0.0);
    }
}
