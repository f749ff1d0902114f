//! Garden entities
//!
//! Plain data structs with the per-frame movement rules. Entities carry
//! their scaled sprite size so bounds checks never need the textures,
//! and positions are top-left anchored to match the draw calls.

use macroquad::math::Vec2;
use serde::{Deserialize, Serialize};

use super::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::assets::SpriteId;

/// The keyboard-controlled sprite.
///
/// Movement is bounded to the strict interior of the screen: a step that
/// would land an axis on or past the edge leaves that axis unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Player {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Move by (dx, dy), each axis accepted or rejected on its own.
    ///
    /// The bound is an open interval: 0 and `screen - size` themselves
    /// are never reached through this path. Rejection is silent.
    pub fn step(&mut self, dx: f32, dy: f32) {
        let new_x = self.pos.x + dx;
        let new_y = self.pos.y + dy;

        if 0.0 < new_x && new_x < SCREEN_WIDTH - self.size.x {
            self.pos.x = new_x;
        }
        if 0.0 < new_y && new_y < SCREEN_HEIGHT - self.size.y {
            self.pos.y = new_y;
        }
    }
}

/// A patrol robot: constant heading, reflected off the screen edges.
#[derive(Debug, Clone, Copy)]
pub struct Robot {
    pub pos: Vec2,
    pub size: Vec2,
    /// Signed per-axis velocity in pixels per frame
    pub heading: Vec2,
}

impl Robot {
    pub fn new(pos: Vec2, size: Vec2, heading: Vec2) -> Self {
        Self { pos, size, heading }
    }

    /// Advance one frame, then reflect the heading per axis.
    ///
    /// Reflection compares the post-move position against each bound in
    /// sequence; the position itself is never clamped. A robot that is
    /// still out of bounds on the next frame flips again, which
    /// oscillates the heading at a boundary (see
    /// `test_robot_oscillates_while_out_of_bounds`).
    pub fn step(&mut self) {
        self.pos += self.heading;

        if self.pos.x > SCREEN_WIDTH - self.size.x {
            self.heading.x = -self.heading.x;
        }
        if self.pos.x < 0.0 {
            self.heading.x = -self.heading.x;
        }
        if self.pos.y > SCREEN_HEIGHT - self.size.y {
            self.heading.y = -self.heading.y;
        }
        if self.pos.y < 0.0 {
            self.heading.y = -self.heading.y;
        }
    }
}

/// Which gem sprite a gem references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GemKind {
    Blue,
    Red,
}

impl GemKind {
    /// Sprite lookup for this kind.
    pub fn sprite(&self) -> SpriteId {
        match self {
            GemKind::Blue => SpriteId::GemBlue,
            GemKind::Red => SpriteId::GemRed,
        }
    }
}

/// A static gem. Immutable after construction.
#[derive(Debug, Clone, Copy)]
pub struct Gem {
    pub pos: Vec2,
    pub kind: GemKind,
}

impl Gem {
    pub fn new(pos: Vec2, kind: GemKind) -> Self {
        Self { pos, kind }
    }
}

/// The decorative princess sprite. Never updated, drawn topmost.
#[derive(Debug, Clone, Copy)]
pub struct Princess {
    pub pos: Vec2,
}

impl Princess {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(vec2(x, y), vec2(128.0, 128.0))
    }

    #[test]
    fn test_player_step_moves_both_axes() {
        let mut player = player_at(350.0, 200.0);
        player.step(10.0, -10.0);
        assert_eq!(player.pos, vec2(360.0, 190.0));
    }

    #[test]
    fn test_player_axes_rejected_independently() {
        // x would land past the right edge, y is fine
        let mut player = player_at(1150.0, 200.0);
        player.step(10.0, 10.0);
        assert_eq!(player.pos.x, 1150.0); // 1160 >= 1280 - 128, rejected
        assert_eq!(player.pos.y, 210.0);
    }

    #[test]
    fn test_player_never_lands_on_boundary() {
        // 130 - 2 = 128 would be in bounds; 128 - 128 = 0 exactly is not
        let mut player = player_at(130.0, 130.0);
        player.step(-2.0, -130.0);
        assert_eq!(player.pos.x, 128.0);
        assert_eq!(player.pos.y, 130.0); // 0 is on the boundary, rejected

        let mut player = player_at(1150.0, 200.0);
        player.step(2.0, 0.0);
        assert_eq!(player.pos.x, 1150.0); // 1152 == 1280 - 128 exactly, rejected
    }

    #[test]
    fn test_player_stays_inside_after_any_walk() {
        let mut player = player_at(350.0, 200.0);
        for _ in 0..500 {
            player.step(-10.0, 0.0);
            player.step(0.0, 10.0);
        }
        assert!(player.pos.x > 0.0 && player.pos.x < SCREEN_WIDTH - player.size.x);
        assert!(player.pos.y > 0.0 && player.pos.y < SCREEN_HEIGHT - player.size.y);
    }

    #[test]
    fn test_player_walks_up_until_top_edge() {
        // From y=200, steps of -10 land on 10, then the next step would
        // hit 0 exactly and is rejected; y never reaches the edge.
        let mut player = player_at(350.0, 200.0);
        for _ in 0..21 {
            player.step(0.0, -10.0);
        }
        assert_eq!(player.pos.y, 10.0);
        assert!(player.pos.y > 0.0);
    }

    fn robot_at(x: f32, y: f32, heading: Vec2) -> Robot {
        Robot::new(vec2(x, y), vec2(100.0, 100.0), heading)
    }

    #[test]
    fn test_robot_advances_by_heading() {
        let mut robot = robot_at(500.0, 500.0, vec2(1.0, 1.0));
        robot.step();
        assert_eq!(robot.pos, vec2(501.0, 501.0));
        assert_eq!(robot.heading, vec2(1.0, 1.0));
    }

    #[test]
    fn test_robot_reflects_at_right_edge() {
        // Max x for a 100px sprite is 1180; the first step past it flips
        // the heading but leaves the overshot position as-is.
        let mut robot = robot_at(1175.0, 300.0, vec2(1.0, 0.0));
        for _ in 0..6 {
            robot.step();
        }
        assert_eq!(robot.pos.x, 1181.0);
        assert_eq!(robot.heading.x, -1.0);

        robot.step();
        assert_eq!(robot.pos.x, 1180.0);
        assert_eq!(robot.heading.x, -1.0); // 1180 is not > 1180, no second flip
    }

    #[test]
    fn test_robot_reflects_at_left_and_top() {
        let mut robot = robot_at(1.0, 1.0, vec2(-2.0, -2.0));
        robot.step();
        assert_eq!(robot.pos, vec2(-1.0, -1.0));
        assert_eq!(robot.heading, vec2(2.0, 2.0));
    }

    #[test]
    fn test_robot_reflects_both_axes_same_frame() {
        let mut robot = robot_at(1179.0, 667.0, vec2(3.0, 5.0));
        robot.step();
        assert_eq!(robot.pos, vec2(1182.0, 672.0));
        assert_eq!(robot.heading, vec2(-3.0, -5.0));
    }

    #[test]
    fn test_robot_flips_once_per_axis_even_on_huge_overshoot() {
        // One position cannot be both past the far edge and below zero,
        // so each axis flips at most once per step no matter how large
        // the heading is.
        let mut robot = robot_at(100.0, 300.0, vec2(2000.0, 0.0));
        robot.step();
        assert_eq!(robot.pos.x, 2100.0);
        assert_eq!(robot.heading.x, -2000.0);
    }

    #[test]
    fn test_robot_oscillates_while_out_of_bounds() {
        // A robot parked far past the edge with a small heading cannot
        // escape in one frame, so the position-based reflection flips
        // the heading every frame and it jitters in place. Long-standing
        // behavior, kept as-is.
        let mut robot = robot_at(1500.0, 300.0, vec2(1.0, 0.0));

        robot.step();
        assert_eq!(robot.pos.x, 1501.0);
        assert_eq!(robot.heading.x, -1.0);

        robot.step();
        assert_eq!(robot.pos.x, 1500.0);
        assert_eq!(robot.heading.x, 1.0);

        robot.step();
        assert_eq!(robot.pos.x, 1501.0);
        assert_eq!(robot.heading.x, -1.0);
    }

    #[test]
    fn test_gem_kind_selects_sprite() {
        assert_eq!(GemKind::Blue.sprite(), SpriteId::GemBlue);
        assert_eq!(GemKind::Red.sprite(), SpriteId::GemRed);
    }
}
