//! Visuals domain: sprite flip, squash-and-stretch and tint for the player.

mod components;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{BaseScale, MotionVisualState, PlayerSprite};

use bevy::prelude::*;

use crate::movement::MotionSet;
use crate::visuals::systems::apply_player_visuals;

pub struct VisualsPlugin;

impl Plugin for VisualsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, apply_player_visuals.after(MotionSet::Simulate));
    }
}
