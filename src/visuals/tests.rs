//! Visuals domain: tests for visual state derivation.

use bevy::prelude::*;

use super::MotionVisualState;
use crate::config::MotionConfig;
use crate::movement::{
    CharacterMotionController, GroundProbe, InputSource, MovementInput, PhysicsBody,
};

struct FixedGround(bool);

impl GroundProbe for FixedGround {
    fn check_point(&self) -> Option<Vec2> {
        Some(Vec2::ZERO)
    }

    fn overlaps_ground(&self, _point: Vec2, _radius: f32, _layer_mask: u32) -> bool {
        self.0
    }
}

struct Body(Vec2);

impl PhysicsBody for Body {
    fn velocity(&self) -> Vec2 {
        self.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.0 = velocity;
    }
}

fn state_after(input: MovementInput, grounded: bool) -> MotionVisualState {
    let mut controller = CharacterMotionController::new(MotionConfig::default()).unwrap();
    let mut body = Body(Vec2::ZERO);
    controller.on_variable_tick(1.0 / 60.0, &input, &FixedGround(grounded), &mut body);
    MotionVisualState::from_controller(&controller)
}

#[test]
fn test_idle_when_grounded_without_input() {
    assert_eq!(
        state_after(MovementInput::default(), true),
        MotionVisualState::Idle
    );
}

#[test]
fn test_walking_when_grounded_with_axis() {
    let input = MovementInput {
        horizontal: 1.0,
        ..Default::default()
    };
    assert_eq!(state_after(input, true), MotionVisualState::Walking);
}

#[test]
fn test_airborne_overrides_walking() {
    let input = MovementInput {
        horizontal: -1.0,
        ..Default::default()
    };
    assert_eq!(state_after(input, false), MotionVisualState::Airborne);
}

#[test]
fn test_dashing_overrides_airborne() {
    let input = MovementInput {
        dash_just_pressed: true,
        ..Default::default()
    };
    assert!(input.dash_just_pressed());
    assert_eq!(state_after(input, false), MotionVisualState::Dashing);
}

#[test]
fn test_each_state_has_distinct_tint() {
    let states = [
        MotionVisualState::Idle,
        MotionVisualState::Walking,
        MotionVisualState::Airborne,
        MotionVisualState::Dashing,
    ];
    for (i, a) in states.iter().enumerate() {
        for b in &states[i + 1..] {
            assert_ne!(a.tint(), b.tint());
        }
    }
}
