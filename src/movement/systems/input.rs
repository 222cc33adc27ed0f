//! Movement domain: keyboard bindings sampled into `MovementInput`.

use bevy::prelude::*;

use crate::movement::MovementInput;

const LEFT_KEYS: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const JUMP_KEYS: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];
const DASH_KEYS: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::KeyJ];

/// Raw horizontal axis: -1, 0 or +1. Opposing keys cancel out.
fn horizontal_axis(keyboard: &ButtonInput<KeyCode>) -> f32 {
    let left = keyboard.any_pressed(LEFT_KEYS);
    let right = keyboard.any_pressed(RIGHT_KEYS);
    match (left, right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    *input = MovementInput {
        horizontal: horizontal_axis(&keyboard),
        jump_just_pressed: keyboard.any_just_pressed(JUMP_KEYS),
        dash_just_pressed: keyboard.any_just_pressed(DASH_KEYS),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposing_keys_cancel() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyA);
        assert_eq!(horizontal_axis(&keyboard), -1.0);

        keyboard.press(KeyCode::ArrowRight);
        assert_eq!(horizontal_axis(&keyboard), 0.0);

        keyboard.release(KeyCode::KeyA);
        assert_eq!(horizontal_axis(&keyboard), 1.0);
    }

    #[test]
    fn edges_only_on_press_frame() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyK);
        assert!(keyboard.any_just_pressed(JUMP_KEYS));
        assert!(!keyboard.any_just_pressed(DASH_KEYS));

        keyboard.clear();
        assert!(!keyboard.any_just_pressed(JUMP_KEYS));
        assert!(keyboard.any_pressed(JUMP_KEYS));
    }
}
