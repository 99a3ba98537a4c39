//! Game event system for decoupled communication between systems.
//!
//! The simulation pushes events while it steps; a presentation layer (HUD,
//! audio, the headless log) drains them afterwards.

use glam::Vec2;
use hecs::Entity;

/// Game events that systems can emit and subscribe to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The player took contact damage
    PlayerHit { position: Vec2, health: i32 },
    /// A patroller was killed by a dash
    EnemyKilled { entity: Entity, position: Vec2 },
    /// A spawner was destroyed
    SpawnerDestroyed {
        entity: Entity,
        position: Vec2,
        remaining: usize,
    },
    /// A spawner released a new patroller
    EnemySpawned { entity: Entity, position: Vec2 },
    /// A charged dash launched
    DashStarted { strength: f32 },
    /// The running dash finished
    DashEnded,
    /// The last spawner died; the level restarts
    Victory { time: f32 },
    /// The player died; the level restarts
    Defeat { time: f32 },
}

/// Simple event queue - events are pushed during a step, drained by the caller
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
