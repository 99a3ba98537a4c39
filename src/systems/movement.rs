//! Steering and integration for every body in the world.

use glam::Vec2;
use hecs::{Entity, World};

use crate::collision::move_body;
use crate::components::{Body, Health, Mobility};
use crate::grid::Grid;

/// Turn `body`'s velocity toward `dir * mobility.speed`, changing it by at
/// most `mobility.acceleration * delta`. `dir` is expected to be unit length
/// or zero; zero brakes toward a standstill.
pub fn steer(body: &mut Body, mobility: &Mobility, dir: Vec2, delta: f32) {
    if delta <= 0.0 {
        return;
    }
    let diff = dir * mobility.speed - body.vel;
    let gap = diff.length();
    if gap == 0.0 {
        return;
    }
    let step = mobility.acceleration * delta;
    if gap <= step {
        body.vel = dir * mobility.speed;
    } else {
        body.vel += diff / gap * step;
    }
}

/// Move a single entity through the grid and count down its invulnerability.
/// With `bounce` set it reflects off walls instead of stopping.
pub fn integrate_entity(
    world: &mut World,
    entity: Entity,
    grid: &Grid,
    room_size: f32,
    max_segment: f32,
    delta: f32,
    bounce: bool,
) {
    if let Ok((body, health)) = world.query_one_mut::<(&mut Body, &mut Health)>(entity) {
        move_body(body, grid, room_size, max_segment, delta, bounce);
        health.tick(delta);
    }
}

/// Move every body except `skip` through the grid and count down
/// invulnerability. None of them bounce.
pub fn integrate(
    world: &mut World,
    grid: &Grid,
    room_size: f32,
    max_segment: f32,
    delta: f32,
    skip: Option<Entity>,
) {
    puffin::profile_function!();

    for (entity, (body, health)) in world.query_mut::<(&mut Body, &mut Health)>() {
        if skip == Some(entity) {
            continue;
        }
        move_body(body, grid, room_size, max_segment, delta, false);
        health.tick(delta);
    }
}
