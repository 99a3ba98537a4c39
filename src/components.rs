use glam::{IVec2, Vec2};

use crate::constants::INVULNERABILITY_DURATION;

/// Circular moving body in world units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }
}

/// Steering limits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mobility {
    /// Top speed the body steers toward
    pub speed: f32,
    /// Maximum change in velocity per second
    pub acceleration: f32,
}

impl Mobility {
    pub fn new(speed: f32, acceleration: f32) -> Self {
        Self { speed, acceleration }
    }
}

/// Health component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Health {
    pub current: i32,
    pub max: i32,
    /// Seconds of invulnerability left after the last hit
    pub invulnerable: f32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            max,
            invulnerable: 0.0,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable > 0.0
    }

    pub fn percentage(&self) -> f32 {
        (self.current as f32 / self.max as f32).clamp(0.0, 1.0)
    }

    /// Take `amount` damage unless still invulnerable from a previous hit.
    /// Returns whether the hit landed.
    pub fn hit(&mut self, amount: i32) -> bool {
        if self.is_invulnerable() {
            return false;
        }
        self.invulnerable = INVULNERABILITY_DURATION;
        self.current -= amount;
        true
    }

    pub fn restore(&mut self) {
        self.current = self.max;
    }

    pub fn tick(&mut self, delta: f32) {
        self.invulnerable = (self.invulnerable - delta).max(0.0);
    }
}

/// Patrol/chase state for roaming enemies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Patrol {
    /// Per-enemy offset in `[-0.5, 0.5)` on each axis so a pack doesn't stack up
    pub target_offset: Vec2,
    /// World point the enemy walks toward while patrolling
    pub target_pos: Vec2,
    /// Tile the enemy last picked a target from; discouraged as the next target
    pub last_tile: IVec2,
    /// Whether the enemy has spotted the player and is chasing
    pub locked_on: bool,
}

/// Wave timer for stationary spawners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hive {
    /// Seconds until the next wave
    pub spawn_timer: f32,
}

/// What drives an entity each tick. Every entity shares the same body and
/// health components; the behaviour picks the step function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Behavior {
    Player,
    Patroller(Patrol),
    Spawner(Hive),
}

impl Behavior {
    pub fn is_player(&self) -> bool {
        matches!(self, Behavior::Player)
    }

    pub fn is_spawner(&self) -> bool {
        matches!(self, Behavior::Spawner(_))
    }
}
