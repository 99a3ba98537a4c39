//! Swept body-vs-grid collision.
//!
//! Bodies are pushed out of wall cells one axis at a time. Resolving both axes
//! at once makes a body sliding along a wall snag on the seam between two wall
//! cells, so the axis with the shallower overlap is resolved first and the
//! second pass sees the corrected offset.

use glam::{IVec2, Vec2};

use crate::components::Body;
use crate::coords::{tile_to_world, world_to_tile};
use crate::grid::Grid;
use crate::tile::TileType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Which tile edge `offset` is within `radius` of: -1 low, 1 high, 0 neither
fn near_edge(offset: f32, radius: f32, room_size: f32) -> i32 {
    if offset < radius {
        -1
    } else if offset > room_size - radius {
        1
    } else {
        0
    }
}

/// Push `body` out of the walls around its current tile.
///
/// A wall blocks an axis when it is the orthogonal neighbour on the side the
/// body is pressed against, or the diagonal neighbour when the body is also
/// within `radius` of the other axis' edge. Blocked axes are clamped to the
/// tile edge and their velocity component is zeroed, or reversed when
/// `bounce` is set.
pub fn resolve_collision(body: &mut Body, grid: &Grid, room_size: f32, bounce: bool) {
    let tile = world_to_tile(body.pos, room_size);
    let mut offset = body.pos - tile_to_world(tile, room_size);

    let edge_x = offset.x.min(room_size - offset.x);
    let edge_y = offset.y.min(room_size - offset.y);
    let order = if edge_x > edge_y {
        [Axis::X, Axis::Y]
    } else {
        [Axis::Y, Axis::X]
    };

    for axis in order {
        resolve_axis(body, &mut offset, tile, axis, grid, room_size, bounce);
    }
}

fn resolve_axis(
    body: &mut Body,
    offset: &mut Vec2,
    tile: IVec2,
    axis: Axis,
    grid: &Grid,
    room_size: f32,
    bounce: bool,
) {
    let a = axis.index();
    let b = axis.other().index();

    let side = near_edge(offset[a], body.radius, room_size);
    if side == 0 {
        return;
    }

    let mut step = IVec2::ZERO;
    step[a] = side;
    let mut blocked = grid.tile_at(tile + step) == TileType::Wall;

    let cross = near_edge(offset[b], body.radius, room_size);
    if cross != 0 {
        let mut diagonal = step;
        diagonal[b] = cross;
        blocked |= grid.tile_at(tile + diagonal) == TileType::Wall;
    }

    if !blocked {
        return;
    }

    let target = if side < 0 { body.radius } else { room_size - body.radius };
    body.pos[a] += target - offset[a];
    body.vel[a] = if bounce { -body.vel[a] } else { 0.0 };
    offset[a] = target;
}

/// Advance `body` by `vel * delta`, resolving collisions after every sub-step.
///
/// Sub-steps are no longer than `max_segment` and never longer than the body's
/// radius, so the body cannot cross a wall cell's edge between two passes no
/// matter how fast it moves. Velocity changes from earlier sub-steps (a stop or
/// a bounce) apply to the remaining ones.
pub fn move_body(
    body: &mut Body,
    grid: &Grid,
    room_size: f32,
    max_segment: f32,
    delta: f32,
    bounce: bool,
) {
    if !body.vel.is_finite() {
        body.vel = Vec2::ZERO;
    }

    let distance = (body.vel * delta).length();
    if distance <= 0.0 {
        return;
    }

    let segment = if body.radius > 0.0 {
        max_segment.min(body.radius)
    } else {
        max_segment
    };
    let steps = (distance / segment).ceil().max(1.0) as u32;
    let step_delta = delta / steps as f32;

    for _ in 0..steps {
        body.pos += body.vel * step_delta;
        resolve_collision(body, grid, room_size, bounce);
    }
}
