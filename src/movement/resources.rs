//! Movement domain: input resource.

use bevy::prelude::*;

use crate::movement::ports::InputSource;

/// Input sampled once per frame by `read_input`.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub horizontal: f32,
    pub jump_just_pressed: bool,
    pub dash_just_pressed: bool,
}

impl InputSource for MovementInput {
    fn axis_value(&self) -> f32 {
        self.horizontal
    }

    fn jump_just_pressed(&self) -> bool {
        self.jump_just_pressed
    }

    fn dash_just_pressed(&self) -> bool {
        self.dash_just_pressed
    }
}
