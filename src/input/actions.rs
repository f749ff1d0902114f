//! Game action definitions

/// The directional actions the play loop responds to.
///
/// Bindings (keyboard only):
/// - Up arrow / W = move up
/// - Down arrow / S = move down
/// - Left arrow / A = move left
/// - Right arrow / D = move right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
}
