//! Visuals domain: read-only presentation of the motion state.

use bevy::prelude::*;

use crate::movement::{CharacterMotionController, Facing, Player};
use crate::visuals::{BaseScale, MotionVisualState, PlayerSprite};

pub(crate) fn apply_player_visuals(
    players: Query<&CharacterMotionController, With<Player>>,
    mut sprites: Query<
        (
            &ChildOf,
            &BaseScale,
            &mut Transform,
            &mut Sprite,
            &mut MotionVisualState,
        ),
        With<PlayerSprite>,
    >,
) {
    for (child_of, base_scale, mut transform, mut sprite, mut visual_state) in &mut sprites {
        let Ok(controller) = players.get(child_of.parent()) else {
            continue;
        };

        transform.scale = base_scale.0 * controller.current_scale();
        sprite.flip_x = controller.facing_direction() == Facing::Left;

        let next = MotionVisualState::from_controller(controller);
        if *visual_state != next {
            *visual_state = next;
            sprite.color = next.tint();
        }
    }
}
