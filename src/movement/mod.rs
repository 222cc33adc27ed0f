//! Movement domain: the character motion core and the systems that drive it.

mod bootstrap;
mod components;
mod controller;
mod events;
mod ports;
mod resources;
mod systems;
mod timer;

pub use components::{Facing, GameLayer, Ground, GroundCheck, Player};
pub use controller::CharacterMotionController;
pub use events::{DashEndedEvent, DashStartedEvent, JumpedEvent};
#[cfg(test)]
pub use ports::{GroundProbe, InputSource, PhysicsBody};
pub use resources::MovementInput;
pub use timer::Countdown;

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{log_motion_events, read_input, run_fixed_tick, run_variable_tick};

/// Ordering for the variable-rate motion systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MotionSet {
    /// Sample keyboard input into `MovementInput`.
    Input,
    /// Jump, dash and deformation updates.
    Simulate,
}

/// Motion core on both clocks: the controller ticks and their events.
///
/// Leaves `MovementInput` to whoever fills it, so it runs without a keyboard.
pub struct MotionCorePlugin;

impl Plugin for MotionCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_message::<JumpedEvent>()
            .add_message::<DashStartedEvent>()
            .add_message::<DashEndedEvent>()
            .configure_sets(Update, (MotionSet::Input, MotionSet::Simulate).chain())
            .add_systems(
                Update,
                (run_variable_tick, log_motion_events)
                    .chain()
                    .in_set(MotionSet::Simulate),
            )
            .add_systems(FixedUpdate, run_fixed_tick);
    }
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MotionCorePlugin)
            .add_systems(Startup, spawn_player)
            .add_systems(Update, read_input.in_set(MotionSet::Input));
    }
}
