//! Game core
//!
//! Everything that runs per frame lives here:
//! - entities: plain data with the movement rules
//! - world: the owning container and the single update entry point
//! - renderer: fixed draw order, split into a pure list and a draw pass
//! - runtime: loop phase state machine and frame pacing
//!
//! Update and render are separate functions: the update path takes a
//! plain input snapshot and the draw order is a pure function, so both
//! are testable without opening a window.

pub mod entities;
pub mod renderer;
pub mod runtime;
pub mod world;

pub use renderer::render;
pub use runtime::{FrameLimiter, Phase};
pub use world::World;

/// Logical screen width in pixels
pub const SCREEN_WIDTH: f32 = 1280.0;
/// Logical screen height in pixels
pub const SCREEN_HEIGHT: f32 = 768.0;

/// Fixed loop rate, frames per second
pub const TARGET_FPS: u32 = 30;
