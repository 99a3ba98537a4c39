//! Core game state - owns the simulation data.

use glam::{IVec2, Vec2};
use hecs::{Entity, World};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::{Body, Health};
use crate::config::GameConfig;
use crate::constants::EXPLORE_RADIUS;
use crate::coords::world_to_tile;
use crate::dungeon_gen::DungeonGenerator;
use crate::endpoints::EndpointPool;
use crate::error::GameError;
use crate::events::EventQueue;
use crate::grid::Grid;
use crate::systems::DashState;

use super::initialization;

/// How the last level ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every spawner was destroyed
    Won,
    /// The player died
    Lost,
}

/// Player input for one step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Controls {
    /// Desired walking direction; longer than unit length is clamped
    pub movement: Vec2,
    /// Dash button held
    pub dash_held: bool,
    /// World point a released dash heads toward
    pub aim: Vec2,
}

/// A freshly generated and populated level
struct Level {
    grid: Grid,
    endpoints: Vec<IVec2>,
    world: World,
    player: Entity,
    spawners: usize,
}

impl Level {
    fn generate(config: &GameConfig, rng: &mut StdRng) -> Result<Self, GameError> {
        let dungeon = DungeonGenerator::generate(config.dungeon_width, config.dungeon_height, rng)?;
        let mut endpoint_pool = EndpointPool::new(dungeon.endpoints.clone());
        let (world, player, spawners) =
            initialization::init_world(&mut endpoint_pool, dungeon.start, config.room_size, rng);
        Ok(Self {
            grid: dungeon.grid,
            endpoints: dungeon.endpoints,
            world,
            player,
            spawners,
        })
    }
}

/// Core game state - owns all simulation data.
pub struct GameState {
    pub config: GameConfig,

    /// Current level grid, replaced only by `reset`
    pub(super) grid: Grid,

    /// Every dead end of the current level, in scan order
    pub endpoints: Vec<IVec2>,

    /// The ECS world
    pub world: World,

    /// Player entity handle
    pub player_entity: Entity,

    pub dash: DashState,

    /// Events produced by `step`, drained by the caller
    pub events: EventQueue,

    pub(super) rng: StdRng,

    /// Explored tiles for the minimap, row-major
    visited: Vec<bool>,

    pub(super) spawners_remaining: usize,

    /// Seconds simulated since the level started
    pub(super) time: f32,

    pub(super) last_outcome: Option<Outcome>,
}

impl GameState {
    /// Validate `config`, seed the RNG from it (or from entropy) and build the
    /// first level.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let level = Level::generate(&config, &mut rng)?;

        let mut state = Self {
            visited: vec![false; level.grid.width() * level.grid.height()],
            config,
            grid: level.grid,
            endpoints: level.endpoints,
            world: level.world,
            player_entity: level.player,
            dash: DashState::default(),
            events: EventQueue::new(),
            rng,
            spawners_remaining: level.spawners,
            time: 0.0,
            last_outcome: None,
        };
        state.mark_visited();
        log::info!("New game with {} spawners", state.spawners_remaining);
        Ok(state)
    }

    /// Throw the current level away and generate a new one. Pending events
    /// and the last outcome are kept.
    pub fn reset(&mut self) -> Result<(), GameError> {
        let level = Level::generate(&self.config, &mut self.rng)?;
        self.visited = vec![false; level.grid.width() * level.grid.height()];
        self.grid = level.grid;
        self.endpoints = level.endpoints;
        self.world = level.world;
        self.player_entity = level.player;
        self.spawners_remaining = level.spawners;
        self.dash = DashState::default();
        self.time = 0.0;
        self.mark_visited();
        log::info!("Level reset with {} spawners", self.spawners_remaining);
        Ok(())
    }

    /// Whether the player has been near tile `(x, y)`. Out of range is unexplored.
    pub fn visited(&self, x: i32, y: i32) -> bool {
        if !self.grid.in_bounds(x, y) {
            return false;
        }
        self.visited[y as usize * self.grid.width() + x as usize]
    }

    /// Mark the block of tiles around the player as explored
    pub(super) fn mark_visited(&mut self) {
        let Some(body) = self.player_body() else {
            return;
        };
        let center = world_to_tile(body.pos, self.config.room_size);
        for dy in -EXPLORE_RADIUS..=EXPLORE_RADIUS {
            for dx in -EXPLORE_RADIUS..=EXPLORE_RADIUS {
                let (x, y) = (center.x + dx, center.y + dy);
                if self.grid.in_bounds(x, y) {
                    self.visited[y as usize * self.grid.width() + x as usize] = true;
                }
            }
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player_body(&self) -> Option<Body> {
        self.world.get::<&Body>(self.player_entity).ok().map(|body| *body)
    }

    pub fn player_health(&self) -> Option<Health> {
        self.world.get::<&Health>(self.player_entity).ok().map(|health| *health)
    }

    pub fn spawners_remaining(&self) -> usize {
        self.spawners_remaining
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn is_dashing(&self) -> bool {
        self.dash.is_dashing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_resizes_explored_map_with_grid() {
        let mut game = GameState::new(GameConfig::default().with_seed(31)).unwrap();
        assert_eq!((game.grid().width(), game.grid().height()), (7, 7));

        game.config.dungeon_width = 11;
        game.config.dungeon_height = 9;
        game.reset().unwrap();

        let grid = game.grid();
        assert_eq!((grid.width(), grid.height()), (11, 9));
        assert_eq!(game.visited.len(), 11 * 9);
        for y in -1..=9 {
            for x in -1..=11 {
                let explored = game.visited(x, y);
                if !grid.in_bounds(x, y) {
                    assert!(!explored, "({x}, {y}) outside the grid");
                }
                let _ = grid.get_tile(x, y);
            }
        }
        let player = world_to_tile(game.player_body().unwrap().pos, game.config.room_size);
        assert!(game.visited(player.x, player.y));
        assert!(grid.is_floor(player.x, player.y));
    }

    #[test]
    fn test_failed_reset_keeps_current_level() {
        let mut game = GameState::new(GameConfig::default().with_seed(32)).unwrap();
        let before = game.grid().clone();

        game.config.dungeon_width = 1;
        assert!(game.reset().is_err());

        assert_eq!(game.grid(), &before);
        assert_eq!(game.visited.len(), before.width() * before.height());
        assert!(game.player_body().is_some());
    }
}
