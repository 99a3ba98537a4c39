//! Data-driven entity spawning.
//!
//! Each actor kind is a plain definition; spawning one attaches the shared
//! body/mobility/health components plus the behaviour that drives it.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;

use crate::components::{Behavior, Body, Health, Hive, Mobility, Patrol};
use crate::constants::*;
use crate::coords::world_to_tile;

/// Definition of an actor kind - the stats shared by every instance
#[derive(Clone)]
pub struct ActorDef {
    /// Display name (for logs)
    pub name: &'static str,
    pub radius: f32,
    pub speed: f32,
    pub acceleration: f32,
    pub health: i32,
}

impl ActorDef {
    /// Spawn this actor at `pos` with the given behaviour
    pub fn spawn(&self, world: &mut World, pos: Vec2, behavior: Behavior) -> Entity {
        let entity = world.spawn((
            Body::new(pos, self.radius),
            Mobility::new(self.speed, self.acceleration),
            Health::new(self.health),
            behavior,
        ));
        log::debug!("Spawned {} at ({:.0}, {:.0})", self.name, pos.x, pos.y);
        entity
    }
}

/// Predefined actor kinds
pub mod actors {
    use super::*;

    pub const PLAYER: ActorDef = ActorDef {
        name: "player",
        radius: PLAYER_RADIUS,
        speed: PLAYER_SPEED,
        acceleration: PLAYER_ACCELERATION,
        health: PLAYER_MAX_HEALTH,
    };

    pub const PATROLLER: ActorDef = ActorDef {
        name: "patroller",
        radius: PATROLLER_RADIUS,
        speed: PATROLLER_SPEED,
        acceleration: PATROLLER_ACCELERATION,
        health: PATROLLER_HEALTH,
    };

    /// Spawners share the patroller's speed but never steer anywhere but zero
    pub const SPAWNER: ActorDef = ActorDef {
        name: "spawner",
        radius: SPAWNER_RADIUS,
        speed: PATROLLER_SPEED,
        acceleration: SPAWNER_ACCELERATION,
        health: SPAWNER_HEALTH,
    };
}

pub fn spawn_player(world: &mut World, pos: Vec2) -> Entity {
    actors::PLAYER.spawn(world, pos, Behavior::Player)
}

pub fn spawn_patroller(world: &mut World, pos: Vec2, room_size: f32, rng: &mut impl Rng) -> Entity {
    let target_offset = Vec2::new(rng.gen::<f32>(), rng.gen::<f32>()) - Vec2::splat(0.5);
    let patrol = Patrol {
        target_offset,
        target_pos: pos,
        last_tile: world_to_tile(pos, room_size),
        locked_on: false,
    };
    actors::PATROLLER.spawn(world, pos, Behavior::Patroller(patrol))
}

pub fn spawn_spawner(world: &mut World, pos: Vec2, rng: &mut impl Rng) -> Entity {
    let hive = Hive {
        spawn_timer: SPAWNER_INITIAL_DELAY + SPAWNER_INITIAL_DELAY * rng.gen::<f32>(),
    };
    actors::SPAWNER.spawn(world, pos, Behavior::Spawner(hive))
}
