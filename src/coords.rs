//! Conversions between continuous world space and integer tile space.
//!
//! Tile `(i, j)` covers the half-open world square
//! `[i * room_size, (i + 1) * room_size) x [j * room_size, (j + 1) * room_size)`.

use glam::{IVec2, Vec2};

/// Tile containing a world position. Uses floor division, so negative
/// coordinates map to negative tiles instead of collapsing onto tile 0.
pub fn world_to_tile(pos: Vec2, room_size: f32) -> IVec2 {
    (pos / room_size).floor().as_ivec2()
}

/// Top-left world corner of a tile
pub fn tile_to_world(tile: IVec2, room_size: f32) -> Vec2 {
    tile.as_vec2() * room_size
}

/// World position of a tile's centre
pub fn tile_center(tile: IVec2, room_size: f32) -> Vec2 {
    tile_to_world(tile, room_size) + Vec2::splat(room_size / 2.0)
}

/// Offset of a world position inside its own tile, each component in `[0, room_size)`
pub fn offset_in_tile(pos: Vec2, room_size: f32) -> Vec2 {
    pos - tile_to_world(world_to_tile(pos, room_size), room_size)
}
