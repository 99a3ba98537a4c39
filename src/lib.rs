//! Top-down maze action game core: procedural maze generation, swept
//! body-vs-grid collision, grid raycasting and a headless real-time
//! simulation of a player hunting enemy spawners.

pub mod collision;
pub mod components;
pub mod config;
pub mod constants;
pub mod coords;
pub mod dungeon_gen;
pub mod endpoints;
pub mod engine;
pub mod error;
pub mod events;
pub mod grid;
pub mod raycast;
pub mod spawning;
pub mod systems;
pub mod tile;

pub use config::GameConfig;
pub use dungeon_gen::{DungeonGenerator, DungeonResult};
pub use engine::{Controls, GameState, Outcome};
pub use error::{ConfigError, GameError, GenerateError};
pub use grid::Grid;
pub use tile::TileType;
