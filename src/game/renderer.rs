//! Frame rendering
//!
//! Draw order is fixed: background, player, robots in sequence order,
//! gems in sequence order, princess topmost. The order lives in
//! [`draw_list`], a pure function over the world, and [`render`] is the
//! thin macroquad pass over it.

use macroquad::prelude::*;

use super::world::World;
use crate::assets::{SpriteId, SpriteStore};

/// The backdrop is washed out behind the sprites.
const BACKGROUND_TINT: Color = Color::new(1.0, 1.0, 1.0, 0.5);

/// Produce this frame's draw calls in order, back to front.
pub fn draw_list(world: &World) -> Vec<(SpriteId, Vec2)> {
    let mut list = Vec::with_capacity(3 + world.robots.len() + world.gems.len());

    list.push((SpriteId::Background, Vec2::ZERO));
    list.push((SpriteId::Player, world.player.pos));
    for robot in &world.robots {
        list.push((SpriteId::Robot, robot.pos));
    }
    for gem in &world.gems {
        list.push((gem.kind.sprite(), gem.pos));
    }
    list.push((SpriteId::Princess, world.princess.pos));

    list
}

/// Clear the screen and draw the whole world.
pub fn render(world: &World, sprites: &SpriteStore) {
    clear_background(WHITE);

    for (id, pos) in draw_list(world) {
        let tint = if id == SpriteId::Background {
            BACKGROUND_TINT
        } else {
            WHITE
        };
        draw_texture(sprites.texture(id), pos.x, pos.y, tint);
    }
}
