//! Enemy behaviour: patrolling, chasing and spawning waves.
//!
//! Patrollers wander the maze one tile at a time until they see the player,
//! then chase until the player gets away or out of sight. Spawners sit still
//! and periodically release a ring of patrollers.

use std::f32::consts::TAU;

use glam::Vec2;
use hecs::World;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::{Behavior, Body, Hive, Mobility, Patrol};
use crate::constants::*;
use crate::coords::{offset_in_tile, tile_to_world, world_to_tile};
use crate::grid::Grid;
use crate::raycast::has_line_of_sight;
use crate::systems::movement::steer;

/// Run one AI tick for every enemy. Returns the positions where spawners
/// want new patrollers; the caller spawns them once the query is released.
pub fn run_ai(
    world: &mut World,
    grid: &Grid,
    room_size: f32,
    player_pos: Vec2,
    delta: f32,
    rng: &mut impl Rng,
) -> Vec<Vec2> {
    puffin::profile_function!();

    let mut spawns = Vec::new();
    for (_entity, (body, mobility, behavior)) in
        world.query_mut::<(&mut Body, &Mobility, &mut Behavior)>()
    {
        match behavior {
            Behavior::Player => {}
            Behavior::Patroller(patrol) => {
                update_patroller(body, mobility, patrol, grid, room_size, player_pos, delta, rng);
            }
            Behavior::Spawner(hive) => {
                update_spawner(body, mobility, hive, player_pos, delta, rng, &mut spawns);
            }
        }
    }
    spawns
}

#[allow(clippy::too_many_arguments)]
fn update_patroller(
    body: &mut Body,
    mobility: &Mobility,
    patrol: &mut Patrol,
    grid: &Grid,
    room_size: f32,
    player_pos: Vec2,
    delta: f32,
    rng: &mut impl Rng,
) {
    let to_player = player_pos - body.pos;
    let in_range = to_player.length_squared() <= PATROLLER_SIGHT_RANGE * PATROLLER_SIGHT_RANGE;

    if patrol.locked_on {
        let dir = (to_player.normalize_or_zero() + patrol.target_offset).normalize_or_zero();
        steer(body, mobility, dir, delta);
        if !in_range || !has_line_of_sight(grid, room_size, player_pos, body.pos) {
            patrol.locked_on = false;
        }
        return;
    }

    if in_range && has_line_of_sight(grid, room_size, player_pos, body.pos) {
        patrol.locked_on = true;
    }

    let arrived = body.pos.distance_squared(patrol.target_pos)
        <= PATROLLER_ARRIVE_DISTANCE * PATROLLER_ARRIVE_DISTANCE;
    if arrived || !has_line_of_sight(grid, room_size, patrol.target_pos, body.pos) {
        pick_patrol_target(patrol, body.pos, grid, room_size, rng);
    }
    let dir = (patrol.target_pos - body.pos).normalize_or_zero();
    steer(body, mobility, dir, delta);
}

/// Choose the next tile to patrol toward: a floor neighbour of the current
/// tile, strongly preferring anything other than the tile the patroller came
/// from. The target keeps the patroller's offset inside its tile plus its
/// personal jitter so a pack fans out. A tile with no floor neighbours leaves
/// the target unchanged.
pub fn pick_patrol_target(
    patrol: &mut Patrol,
    pos: Vec2,
    grid: &Grid,
    room_size: f32,
    rng: &mut impl Rng,
) {
    let tile = world_to_tile(pos, room_size);
    let options: Vec<_> = grid.floor_neighbors(tile).collect();
    let last = patrol.last_tile;
    let Ok(&next) = options.choose_weighted(rng, |&option| {
        if option == last {
            1
        } else {
            1 + PATROLLER_FORWARD_BIAS
        }
    }) else {
        return;
    };

    patrol.last_tile = tile;
    patrol.target_pos = tile_to_world(next, room_size)
        + offset_in_tile(pos, room_size)
        + patrol.target_offset * PATROLLER_TARGET_JITTER;
}

fn update_spawner(
    body: &mut Body,
    mobility: &Mobility,
    hive: &mut Hive,
    player_pos: Vec2,
    delta: f32,
    rng: &mut impl Rng,
    spawns: &mut Vec<Vec2>,
) {
    steer(body, mobility, Vec2::ZERO, delta);

    let alerted = body.pos.distance_squared(player_pos) < PATROLLER_SIGHT_RANGE * PATROLLER_SIGHT_RANGE;
    let rate = if alerted { SPAWNER_ALERT_MULTIPLIER } else { 1.0 };
    hive.spawn_timer -= delta * rate;

    if hive.spawn_timer <= 0.0 {
        hive.spawn_timer = SPAWNER_INTERVAL;
        let wave = wave_positions(body.pos, body.radius, rng);
        log::debug!("Spawner at ({:.0}, {:.0}) releasing {} patrollers", body.pos.x, body.pos.y, wave.len());
        spawns.extend(wave);
    }
}

/// Positions for one wave: two patrollers, or three with
/// `SPAWNER_LARGE_WAVE_CHANCE`, evenly spaced on a ring around the spawner
/// starting at a random angle.
pub fn wave_positions(center: Vec2, radius: f32, rng: &mut impl Rng) -> Vec<Vec2> {
    let count = if rng.gen_bool(SPAWNER_LARGE_WAVE_CHANCE) { 3 } else { 2 };
    let start = rng.gen::<f32>() * TAU;
    let ring = radius * SPAWNER_RING_SCALE;
    (0..count)
        .map(|i| center + Vec2::from_angle(start + TAU * i as f32 / count as f32) * ring)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawning::{spawn_patroller, spawn_spawner};
    use crate::tile::TileType;
    use glam::IVec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ROOM: f32 = 600.0;
    const FRAME: f32 = 1.0 / 60.0;

    fn patrol_at(tile: IVec2, last_tile: IVec2) -> Patrol {
        Patrol {
            target_offset: Vec2::ZERO,
            target_pos: tile_to_world(tile, ROOM),
            last_tile,
            locked_on: false,
        }
    }

    fn patrol_of(world: &World, entity: hecs::Entity) -> Patrol {
        match *world.get::<&Behavior>(entity).unwrap() {
            Behavior::Patroller(patrol) => patrol,
            other => panic!("expected patroller, got {other:?}"),
        }
    }

    #[test]
    fn test_patrol_target_avoids_backtracking() {
        let grid = Grid::from_ascii(&["..."]);
        let mut rng = StdRng::seed_from_u64(5);
        let pos = Vec2::new(700.0, 250.0);
        let mut forward = 0;
        for _ in 0..200 {
            let mut patrol = patrol_at(IVec2::new(1, 0), IVec2::new(0, 0));
            pick_patrol_target(&mut patrol, pos, &grid, ROOM, &mut rng);
            assert_eq!(patrol.last_tile, IVec2::new(1, 0));
            let target_tile = world_to_tile(patrol.target_pos, ROOM);
            if target_tile == IVec2::new(2, 0) {
                forward += 1;
            } else {
                assert_eq!(target_tile, IVec2::new(0, 0));
            }
        }
        // 21:1 odds; anything under 170 would be far outside the expected ~191
        assert!(forward > 170, "only {forward} forward picks");
    }

    #[test]
    fn test_patrol_target_keeps_in_tile_offset() {
        let grid = Grid::from_ascii(&[
            "#.#",
            "#.#",
        ]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut patrol = patrol_at(IVec2::new(1, 0), IVec2::new(1, 0));
        patrol.target_offset = Vec2::new(0.5, -0.5);
        pick_patrol_target(&mut patrol, Vec2::new(700.0, 250.0), &grid, ROOM, &mut rng);
        // Only neighbour is straight down
        assert_eq!(patrol.target_pos, Vec2::new(600.0 + 100.0 + 25.0, 600.0 + 250.0 - 25.0));
    }

    #[test]
    fn test_dead_end_walks_back() {
        let grid = Grid::from_ascii(&[".."]);
        let mut rng = StdRng::seed_from_u64(3);
        let mut patrol = patrol_at(IVec2::new(1, 0), IVec2::new(0, 0));
        pick_patrol_target(&mut patrol, Vec2::new(900.0, 300.0), &grid, ROOM, &mut rng);
        assert_eq!(world_to_tile(patrol.target_pos, ROOM), IVec2::new(0, 0));
    }

    #[test]
    fn test_enclosed_tile_keeps_target() {
        let grid = Grid::from_ascii(&["#.#"]);
        let mut rng = StdRng::seed_from_u64(3);
        let mut patrol = patrol_at(IVec2::new(1, 0), IVec2::new(0, 0));
        let before = patrol;
        pick_patrol_target(&mut patrol, Vec2::new(900.0, 300.0), &grid, ROOM, &mut rng);
        assert_eq!(patrol, before);
    }

    #[test]
    fn test_patroller_locks_on_and_loses_player() {
        let grid = Grid::from_ascii(&[
            "...",
            "#..",
        ]);
        let mut rng = StdRng::seed_from_u64(8);
        let mut world = World::new();
        let enemy = spawn_patroller(&mut world, Vec2::new(300.0, 300.0), ROOM, &mut rng);

        // Player in the same open area, close by
        run_ai(&mut world, &grid, ROOM, Vec2::new(600.0, 400.0), FRAME, &mut rng);
        assert!(patrol_of(&world, enemy).locked_on);

        // Player far away drops the lock
        run_ai(&mut world, &grid, ROOM, Vec2::new(1500.0, 300.0), FRAME, &mut rng);
        assert!(!patrol_of(&world, enemy).locked_on);
    }

    #[test]
    fn test_wall_blocks_lock_on() {
        let grid = Grid::from_ascii(&[
            ".#",
            "..",
        ]);
        let mut rng = StdRng::seed_from_u64(8);
        let mut world = World::new();
        let enemy = spawn_patroller(&mut world, Vec2::new(580.0, 500.0), ROOM, &mut rng);

        // Within range, but the sight line cuts through the wall tile
        run_ai(&mut world, &grid, ROOM, Vec2::new(700.0, 680.0), FRAME, &mut rng);
        assert!(!patrol_of(&world, enemy).locked_on);
    }

    #[test]
    fn test_chasing_patroller_steers_toward_player() {
        let grid = Grid::filled(3, 3, TileType::Floor);
        let mut rng = StdRng::seed_from_u64(4);
        let mut world = World::new();
        let enemy = spawn_patroller(&mut world, Vec2::new(900.0, 900.0), ROOM, &mut rng);
        let player = Vec2::new(1200.0, 900.0);
        for _ in 0..30 {
            run_ai(&mut world, &grid, ROOM, player, FRAME, &mut rng);
        }
        let body = *world.get::<&Body>(enemy).unwrap();
        assert!(body.vel.x > 0.0, "velocity {:?}", body.vel);
        assert!(body.vel.length() <= PATROLLER_SPEED + 1e-3);
    }

    #[test]
    fn test_spawner_releases_wave_on_ring() {
        let grid = Grid::filled(3, 3, TileType::Floor);
        let mut rng = StdRng::seed_from_u64(6);
        let mut world = World::new();
        let center = Vec2::new(900.0, 900.0);
        let spawner = spawn_spawner(&mut world, center, &mut rng);

        let mut wave = Vec::new();
        for _ in 0..(6.0 / FRAME) as usize {
            wave = run_ai(&mut world, &grid, ROOM, Vec2::ZERO, FRAME, &mut rng);
            if !wave.is_empty() {
                break;
            }
        }
        assert!(wave.len() == 2 || wave.len() == 3, "wave of {}", wave.len());
        for pos in &wave {
            assert!((pos.distance(center) - SPAWNER_RADIUS * SPAWNER_RING_SCALE).abs() < 1e-2);
        }
        let Behavior::Spawner(hive) = *world.get::<&Behavior>(spawner).unwrap() else {
            panic!("expected spawner");
        };
        assert_eq!(hive.spawn_timer, SPAWNER_INTERVAL);
    }

    #[test]
    fn test_nearby_player_speeds_up_spawner() {
        let mut rng = StdRng::seed_from_u64(0);
        let mobility = Mobility::new(PATROLLER_SPEED, SPAWNER_ACCELERATION);
        let mut body = Body::new(Vec2::new(900.0, 900.0), SPAWNER_RADIUS);
        let mut spawns = Vec::new();

        let mut far = Hive { spawn_timer: 10.0 };
        update_spawner(&mut body, &mobility, &mut far, Vec2::ZERO, 1.0, &mut rng, &mut spawns);
        let mut near = Hive { spawn_timer: 10.0 };
        update_spawner(&mut body, &mobility, &mut near, Vec2::new(1000.0, 900.0), 1.0, &mut rng, &mut spawns);

        assert_eq!(far.spawn_timer, 9.0);
        assert_eq!(near.spawn_timer, 5.0);
        assert!(spawns.is_empty());
    }

    #[test]
    fn test_wave_sizes() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut sizes = [0; 4];
        for _ in 0..500 {
            sizes[wave_positions(Vec2::ZERO, 50.0, &mut rng).len()] += 1;
        }
        assert_eq!(sizes[0] + sizes[1], 0);
        assert!(sizes[2] > sizes[3]);
        assert!(sizes[3] > 50);
    }
}
