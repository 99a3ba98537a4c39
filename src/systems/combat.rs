//! Contact damage between the player and enemies.

use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Behavior, Body, Health};
use crate::constants::{CONTACT_DAMAGE, KNOCKBACK_SPEED};
use crate::events::{EventQueue, GameEvent};

/// Axis-aligned overlap of two bodies, each treated as a square whose
/// half side is its radius. Touching edges do not count.
pub fn is_colliding(a: &Body, b: &Body) -> bool {
    let reach = a.radius + b.radius;
    (a.pos.x - b.pos.x).abs() < reach && (a.pos.y - b.pos.y).abs() < reach
}

/// Hit a body from `from`. Lands only outside the invulnerability window and
/// knocks the body straight away from the attacker.
pub fn damage(body: &mut Body, health: &mut Health, from: Vec2, amount: i32) -> bool {
    if !health.hit(amount) {
        return false;
    }
    body.vel = (body.pos - from).normalize_or_zero() * KNOCKBACK_SPEED;
    true
}

/// An enemy removed this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kill {
    pub entity: Entity,
    pub position: Vec2,
    pub spawner: bool,
}

#[derive(Debug, Default)]
pub struct ContactReport {
    pub kills: Vec<Kill>,
    pub player_died: bool,
}

/// Resolve every enemy touching the player. A dashing player is immune and
/// damages what it touches, despawning enemies that die; otherwise the
/// player takes the hit. Stops at the player's death.
pub fn resolve_contacts(
    world: &mut World,
    player: Entity,
    dashing: bool,
    events: &mut EventQueue,
) -> ContactReport {
    puffin::profile_function!();

    let mut report = ContactReport::default();
    let Ok(player_body) = world.get::<&Body>(player).map(|body| *body) else {
        return report;
    };

    let contacts: Vec<(Entity, Vec2, bool)> = world
        .query::<(&Body, &Behavior)>()
        .iter()
        .filter(|(entity, (body, behavior))| {
            *entity != player && !behavior.is_player() && is_colliding(&player_body, body)
        })
        .map(|(entity, (body, behavior))| (entity, body.pos, behavior.is_spawner()))
        .collect();

    for (enemy, enemy_pos, spawner) in contacts {
        if dashing {
            let Ok((body, health)) = world.query_one_mut::<(&mut Body, &mut Health)>(enemy) else {
                continue;
            };
            damage(body, health, player_body.pos, CONTACT_DAMAGE);
            if !health.is_dead() {
                continue;
            }
            let position = body.pos;
            if world.despawn(enemy).is_ok() {
                report.kills.push(Kill {
                    entity: enemy,
                    position,
                    spawner,
                });
            }
        } else {
            let Ok((body, health)) = world.query_one_mut::<(&mut Body, &mut Health)>(player) else {
                break;
            };
            if damage(body, health, enemy_pos, CONTACT_DAMAGE) {
                log::debug!("Player hit, {} health left", health.current);
                events.push(GameEvent::PlayerHit {
                    position: body.pos,
                    health: health.current,
                });
            }
            if health.is_dead() {
                report.player_died = true;
                break;
            }
        }
    }
    report
}
