//! Keyboard input
//!
//! An action-based view over macroquad's per-frame key-down state. The
//! key state is snapshotted once per frame into a plain struct so the
//! update path never reads the keyboard directly.

mod actions;
mod state;

pub use actions::Action;
pub use state::{action_down, MoveIntent};
