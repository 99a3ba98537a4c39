//! World initialization - creates the entity world for a freshly generated level.

use glam::IVec2;
use hecs::{Entity, World};
use rand::Rng;

use crate::coords::tile_center;
use crate::endpoints::EndpointPool;
use crate::spawning;

/// Populate a new world: the player at the centre of a random endpoint and a
/// spawner at the centre of every endpoint left over. With no endpoints at
/// all the player starts on `fallback` (the generator's start node).
///
/// Returns the world, the player entity and the number of spawners placed.
pub fn init_world(
    endpoints: &mut EndpointPool,
    fallback: IVec2,
    room_size: f32,
    rng: &mut impl Rng,
) -> (World, Entity, usize) {
    let mut world = World::new();

    let player_tile = endpoints.pop_random(rng).unwrap_or(fallback);
    let player = spawning::spawn_player(&mut world, tile_center(player_tile, room_size));

    let spawners = endpoints.len();
    while let Some(tile) = endpoints.pop_random(rng) {
        spawning::spawn_spawner(&mut world, tile_center(tile, room_size), rng);
    }

    log::debug!(
        "Initialized world: player at tile ({}, {}), {} spawners",
        player_tile.x,
        player_tile.y,
        spawners
    );
    (world, player, spawners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Behavior, Body};
    use crate::coords::world_to_tile;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ROOM: f32 = 600.0;

    #[test]
    fn test_every_endpoint_gets_an_actor() {
        let tiles = vec![IVec2::new(0, 0), IVec2::new(4, 0), IVec2::new(0, 6), IVec2::new(6, 6)];
        let mut pool = EndpointPool::new(tiles.clone());
        let mut rng = StdRng::seed_from_u64(17);

        let (world, player, spawners) = init_world(&mut pool, IVec2::new(2, 2), ROOM, &mut rng);
        assert_eq!(spawners, 3);
        assert!(pool.is_empty());

        let mut occupied = Vec::new();
        for (entity, (body, behavior)) in world.query::<(&Body, &Behavior)>().iter() {
            assert_eq!(body.pos, tile_center(world_to_tile(body.pos, ROOM), ROOM));
            assert_eq!(entity == player, behavior.is_player());
            occupied.push(world_to_tile(body.pos, ROOM));
        }
        occupied.sort_by_key(|t| (t.x, t.y));
        let mut expected = tiles;
        expected.sort_by_key(|t| (t.x, t.y));
        assert_eq!(occupied, expected);
    }

    #[test]
    fn test_single_endpoint_means_no_spawners() {
        let mut pool = EndpointPool::new(vec![IVec2::new(2, 0)]);
        let mut rng = StdRng::seed_from_u64(1);
        let (world, player, spawners) = init_world(&mut pool, IVec2::ZERO, ROOM, &mut rng);
        assert_eq!(spawners, 0);
        assert_eq!(world.len(), 1);
        assert_eq!(world.get::<&Body>(player).unwrap().pos, tile_center(IVec2::new(2, 0), ROOM));
    }

    #[test]
    fn test_empty_pool_uses_fallback() {
        let mut pool = EndpointPool::default();
        let mut rng = StdRng::seed_from_u64(1);
        let (world, player, spawners) = init_world(&mut pool, IVec2::new(4, 2), ROOM, &mut rng);
        assert_eq!(spawners, 0);
        assert_eq!(world.get::<&Body>(player).unwrap().pos, tile_center(IVec2::new(4, 2), ROOM));
    }
}
