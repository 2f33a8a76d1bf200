use crate::game_logic::ControlState;
use bevy::prelude::*;

// WASD/arrows to drive, Shift to boost
pub fn read_keyboard(input: Res<ButtonInput<KeyCode>>, mut controls: ResMut<ControlState>) {
    controls.forward = input.pressed(KeyCode::KeyW) || input.pressed(KeyCode::ArrowUp);
    controls.backward = input.pressed(KeyCode::KeyS) || input.pressed(KeyCode::ArrowDown);
    controls.left = input.pressed(KeyCode::KeyA) || input.pressed(KeyCode::ArrowLeft);
    controls.right = input.pressed(KeyCode::KeyD) || input.pressed(KeyCode::ArrowRight);
    controls.boost = input.pressed(KeyCode::ShiftLeft) || input.pressed(KeyCode::ShiftRight);
}
