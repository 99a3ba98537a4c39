//! Grid-traversal raycasting used for line-of-sight checks.
//!
//! The ray hops from grid line to grid line: at each step it measures the
//! parametric distance to the next vertical and the next horizontal grid line,
//! jumps to the nearer one (overshooting slightly so the landing point falls
//! inside the tile being entered) and tests that tile.
//!
//! Casting `a -> b` and `b -> a` does not necessarily report the same hit
//! point. The walk starts from a different end and reports the first wall edge
//! reached from that end, and the overshoot makes the landing points differ
//! too. Callers that only need "is the view blocked" get the same answer
//! either way when there is no wall between the points.

use glam::Vec2;

use crate::constants::{RAYCAST_MIN_STEP, RAYCAST_OVERSHOOT};
use crate::coords::world_to_tile;
use crate::grid::Grid;

/// Walk from `origin` toward `destination` and return the point where the ray
/// first enters a wall tile, or `None` if it reaches `destination` first.
///
/// The tile containing `origin` is never tested. A zero-length (or non-finite)
/// ray returns `None` immediately.
pub fn raycast(grid: &Grid, room_size: f32, origin: Vec2, destination: Vec2) -> Option<Vec2> {
    if origin == destination || !origin.is_finite() || !destination.is_finite() {
        return None;
    }

    let dir = destination - origin;
    let min_t = RAYCAST_MIN_STEP / dir.length();
    let mut point = origin;
    // Fraction of the ray covered so far; the destination sits at 1.0
    let mut travelled = 0.0;

    loop {
        let tx = grid_line_distance(point.x, dir.x, room_size);
        let ty = grid_line_distance(point.y, dir.y, room_size);
        let t = tx.min(ty).max(min_t);

        point += dir * t;
        travelled += t;
        if travelled >= 1.0 {
            return None;
        }

        let tile = world_to_tile(point, room_size);
        if grid.tile_at(tile).blocks_vision() {
            return Some(point);
        }
    }
}

/// Whether nothing solid lies between `a` and `b` when looking from `a`
pub fn has_line_of_sight(grid: &Grid, room_size: f32, a: Vec2, b: Vec2) -> bool {
    raycast(grid, room_size, a, b).is_none()
}

/// Parametric distance (in units of the ray direction) from `p` to the next
/// grid line along one axis, including the overshoot
fn grid_line_distance(p: f32, d: f32, room_size: f32) -> f32 {
    if d == 0.0 {
        return f32::INFINITY;
    }
    let cell = (p / room_size).floor();
    let line = (if d < 0.0 { cell } else { cell + 1.0 }) * room_size;
    (line - p) * RAYCAST_OVERSHOOT / d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileType;

    const ROOM: f32 = 100.0;

    fn corridor() -> Grid {
        // Two open rooms separated by a wall column
        Grid::from_ascii(&[
            "..#..",
            "..#..",
            ".....",
        ])
    }

    #[test]
    fn test_zero_length_ray() {
        let grid = Grid::filled(1, 1, TileType::Wall);
        let p = Vec2::new(50.0, 50.0);
        assert_eq!(raycast(&grid, ROOM, p, p), None);
    }

    #[test]
    fn test_open_space_has_no_hit() {
        let grid = Grid::filled(4, 4, TileType::Floor);
        let cases = [
            (Vec2::new(50.0, 50.0), Vec2::new(350.0, 350.0)),
            (Vec2::new(350.0, 20.0), Vec2::new(10.0, 390.0)),
            (Vec2::new(150.0, 10.0), Vec2::new(150.0, 390.0)),
            (Vec2::new(390.0, 250.0), Vec2::new(5.0, 250.0)),
            (Vec2::new(120.0, 130.0), Vec2::new(180.0, 170.0)),
        ];
        for (a, b) in cases {
            assert_eq!(raycast(&grid, ROOM, a, b), None, "{a:?} -> {b:?}");
            assert_eq!(raycast(&grid, ROOM, b, a), None, "{b:?} -> {a:?}");
        }
    }

    #[test]
    fn test_wall_between_points_is_hit() {
        let grid = corridor();
        let a = Vec2::new(50.0, 50.0);
        let b = Vec2::new(450.0, 50.0);
        let hit = raycast(&grid, ROOM, a, b).expect("wall should block the ray");
        assert!((hit.x - 200.0).abs() < 0.1, "hit at {hit:?}");
        assert!((hit.y - 50.0).abs() < 1e-3);
        assert!(!has_line_of_sight(&grid, ROOM, a, b));
    }

    #[test]
    fn test_path_around_wall_is_clear() {
        let grid = corridor();
        let a = Vec2::new(50.0, 250.0);
        let b = Vec2::new(450.0, 250.0);
        assert!(has_line_of_sight(&grid, ROOM, a, b));
    }

    #[test]
    fn test_vertical_ray_stops_at_destination() {
        // Wall lies beyond the destination; the ray must not reach it
        let grid = Grid::from_ascii(&[
            ".",
            ".",
            "#",
        ]);
        let a = Vec2::new(50.0, 10.0);
        let b = Vec2::new(50.0, 190.0);
        assert_eq!(raycast(&grid, ROOM, a, b), None);
        let hit = raycast(&grid, ROOM, a, Vec2::new(50.0, 250.0)).expect("wall below");
        assert!((hit.y - 200.0).abs() < 0.1);
    }

    #[test]
    fn test_out_of_bounds_counts_as_wall() {
        let grid = Grid::filled(2, 1, TileType::Floor);
        let hit = raycast(&grid, ROOM, Vec2::new(50.0, 50.0), Vec2::new(50.0, -80.0));
        let hit = hit.expect("outside the grid is solid");
        assert!(hit.y < 0.0 && hit.y > -0.1);
    }

    #[test]
    fn test_direction_changes_reported_hit() {
        let grid = corridor();
        let a = Vec2::new(50.0, 50.0);
        let b = Vec2::new(450.0, 50.0);
        let forward = raycast(&grid, ROOM, a, b).unwrap();
        let backward = raycast(&grid, ROOM, b, a).unwrap();
        // Each direction reports the wall face nearest its own origin
        assert!((forward.x - 200.0).abs() < 0.1);
        assert!((backward.x - 300.0).abs() < 0.1);
        assert_ne!(forward, backward);
    }

    #[test]
    fn test_origin_on_grid_line_moving_back() {
        // Starting exactly on a tile edge must still make progress
        let grid = Grid::from_ascii(&["#.."]);
        let hit = raycast(&grid, ROOM, Vec2::new(100.0, 50.0), Vec2::new(0.0, 50.0));
        let hit = hit.expect("wall tile to the left");
        assert!(hit.x < 100.0 && hit.x > 99.0);
    }

    #[test]
    fn test_origin_tile_is_not_tested() {
        let grid = Grid::from_ascii(&["#."]);
        assert_eq!(raycast(&grid, ROOM, Vec2::new(20.0, 50.0), Vec2::new(80.0, 50.0)), None);
    }
}
