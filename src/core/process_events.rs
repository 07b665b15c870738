//! Keyboard input: movement keys to avatar intent.
use raylib::prelude::*;

use crate::core::player::Direction;
use crate::core::session::LevelSession;

/// WASD and the arrow keys drive the same four directions.
pub const BINDINGS: [(KeyboardKey, Direction); 8] = [
    (KeyboardKey::KEY_W, Direction::Up),
    (KeyboardKey::KEY_UP, Direction::Up),
    (KeyboardKey::KEY_S, Direction::Down),
    (KeyboardKey::KEY_DOWN, Direction::Down),
    (KeyboardKey::KEY_A, Direction::Left),
    (KeyboardKey::KEY_LEFT, Direction::Left),
    (KeyboardKey::KEY_D, Direction::Right),
    (KeyboardKey::KEY_RIGHT, Direction::Right),
];

/// Forwards this frame's press/release events to the session.
pub fn process_events(window: &RaylibHandle, session: &mut LevelSession) {
    for (key, dir) in BINDINGS {
        if window.is_key_pressed(key) {
            session.apply_intent(dir, true);
        }
        if window.is_key_released(key) {
            session.apply_intent(dir, false);
        }
    }
}
