//! Game world
//!
//! The World owns every entity: one player, the robots in update/draw
//! order, the gems in draw order, and the princess. It is built once
//! from a scene layout and mutated only through [`World::update`], which
//! applies exactly one frame of input and robot motion.

use macroquad::math::vec2;

use super::entities::{Gem, Player, Princess, Robot};
use crate::assets::SpriteSizes;
use crate::input::MoveIntent;
use crate::scene::Scene;

/// Pixels the player moves per held direction per frame
pub const PLAYER_STEP: f32 = 10.0;

/// All game state. Entities never reference each other.
pub struct World {
    pub player: Player,
    pub robots: Vec<Robot>,
    pub gems: Vec<Gem>,
    pub princess: Princess,
}

impl World {
    /// Build the world from a scene layout and the loaded sprite sizes.
    pub fn from_scene(scene: &Scene, sizes: &SpriteSizes) -> Self {
        Self {
            player: Player::new(vec2(scene.player.x, scene.player.y), sizes.player),
            robots: scene
                .robots
                .iter()
                .map(|r| Robot::new(vec2(r.x, r.y), sizes.robot, vec2(r.x_heading, r.y_heading)))
                .collect(),
            gems: scene
                .gems
                .iter()
                .map(|g| Gem::new(vec2(g.x, g.y), g.kind))
                .collect(),
            princess: Princess::new(vec2(scene.princess.x, scene.princess.y)),
        }
    }

    /// Apply one frame: player steps for each held direction, then every
    /// robot advances in sequence order.
    ///
    /// Each held direction is an independent axis step, so holding two
    /// keys moves diagonally by the full step on both axes (no
    /// normalization).
    pub fn update(&mut self, moves: &MoveIntent) {
        if moves.up {
            self.player.step(0.0, -PLAYER_STEP);
        }
        if moves.down {
            self.player.step(0.0, PLAYER_STEP);
        }
        if moves.left {
            self.player.step(-PLAYER_STEP, 0.0);
        }
        if moves.right {
            self.player.step(PLAYER_STEP, 0.0);
        }

        for robot in &mut self.robots {
            robot.step();
        }
    }
}
