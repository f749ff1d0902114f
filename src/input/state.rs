//! Input state sampling

use macroquad::prelude::*;

use super::Action;

/// Is either key bound to this action currently held?
pub fn action_down(action: Action) -> bool {
    match action {
        Action::MoveUp => is_key_down(KeyCode::Up) || is_key_down(KeyCode::W),
        Action::MoveDown => is_key_down(KeyCode::Down) || is_key_down(KeyCode::S),
        Action::MoveLeft => is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
        Action::MoveRight => is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
    }
}

/// One frame's snapshot of the four directional bindings.
///
/// Several directions may be active at once; each applies its own axis
/// step, so diagonals are the sum of two independent moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    /// Sample the current keyboard state. Call once per frame.
    pub fn sample() -> Self {
        Self {
            up: action_down(Action::MoveUp),
            down: action_down(Action::MoveDown),
            left: action_down(Action::MoveLeft),
            right: action_down(Action::MoveRight),
        }
    }
}
