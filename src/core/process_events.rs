//! Input polling for movement and turning.
use raylib::prelude::*;

use crate::core::player::{Player, MOVE_SPEED, TURN_SPEED};

/// Arrow keys write the player's speed and heading directly; the values
/// take effect on the next tick. Releasing Up/Down stops the player.
pub fn process_events(window: &RaylibHandle, player: &mut Player) {
    if window.is_key_down(KeyboardKey::KEY_UP) {
        player.speed = MOVE_SPEED;
    } else if window.is_key_down(KeyboardKey::KEY_DOWN) {
        player.speed = -MOVE_SPEED;
    } else {
        player.speed = 0.0;
    }

    if window.is_key_down(KeyboardKey::KEY_LEFT) {
        player.turn(-TURN_SPEED);
    }
    if window.is_key_down(KeyboardKey::KEY_RIGHT) {
        player.turn(TURN_SPEED);
    }
}
