//! Moon base level
//!
//! 48 half-unit tiles: a base row, a stepped hill on each side, six landing
//! pads, two of which drift sideways.

use glam::Vec3;

use super::body::{Body, BodyKind, SpriteId, Surface};
use crate::consts::*;

/// Number of tiles in the moon base
pub const TILE_COUNT: usize = 48;

pub const LANDER_SPRITE: SpriteId = SpriteId(0);
pub const MOON_SPRITE: SpriteId = SpriteId(1);
pub const PAD_SPRITE: SpriteId = SpriteId(2);

/// Tiles that are landing pads
pub const PAD_TILES: [usize; 6] = [5, 6, 24, 25, 46, 47];

/// Where the lander starts
pub const LANDER_START: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// The controlled body at its starting position
pub fn lander() -> Body {
    let mut body = Body::new(BodyKind::Dynamic, LANDER_START)
        .with_size(LANDER_WIDTH, LANDER_HEIGHT)
        .with_sprite(LANDER_SPRITE);
    body.acceleration = Vec3::new(0.0, LANDER_GRAVITY, 0.0);
    body.speed = LANDER_SPEED;
    body.jump_power = LANDER_JUMP_POWER;
    body
}

fn tile(x: f32, y: f32) -> Body {
    Body::new(BodyKind::StaticObstacle, Vec3::new(x, y, 0.0))
        .with_scale(Vec3::new(TILE_SIZE, TILE_SIZE, 0.0))
        .with_sprite(MOON_SPRITE)
}

/// Build the moon base catalog
pub fn moon_base() -> Vec<Body> {
    let mut tiles = Vec::with_capacity(TILE_COUNT);

    // Base row
    for i in 0..20 {
        let i = i as f32;
        tiles.push(tile(i - 20.0 / 4.21 - i * 0.5, -3.5));
    }

    // 20..=23: left hill, bottom step
    for x in [-4.75059, -4.25059, -3.75059, -3.25059] {
        tiles.push(tile(x, -3.0));
    }

    // 24..=32: right hill, bottom step
    for x in [
        0.249406, 0.749406, 1.24941, 1.74941, 2.24941, 2.74941, 3.24941, 3.74941, 4.24941,
    ] {
        tiles.push(tile(x, -3.0));
    }

    // 33..=38: left hill, upper steps
    for (x, y) in [
        (-4.75059, -2.5),
        (-4.25059, -2.5),
        (-3.75059, -2.5),
        (-4.75059, -2.0),
        (-4.25059, -2.0),
        (-4.75059, -1.5),
    ] {
        tiles.push(tile(x, y));
    }

    // 39..=45: right hill, upper steps
    for (x, y) in [
        (1.74941, -2.5),
        (2.24941, -2.5),
        (2.74941, -2.5),
        (3.24941, -2.5),
        (3.74941, -2.5),
        (2.74941, -2.0),
        (3.24941, -2.0),
    ] {
        tiles.push(tile(x, y));
    }

    // 46, 47: drifting pads
    tiles.push(drifting(tile(2.74941, -1.0), 0.5));
    tiles.push(drifting(tile(-2.74941, 0.0), -0.5));

    for &index in &PAD_TILES {
        let pad = &mut tiles[index];
        pad.surface = Surface::LandingPad;
        pad.sprite = PAD_SPRITE;
    }

    tiles
}

fn drifting(tile: Body, direction_x: f32) -> Body {
    let mut tile = tile.with_motion(Vec3::new(direction_x, 0.0, 0.0), MOVING_PAD_SPEED);
    tile.kind = BodyKind::KinematicObstacle;
    tile
}
