//! Game constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

mod combat;
mod dungeon;
mod enemies;
mod gameplay;
mod movement;

pub use combat::*;
pub use dungeon::*;
pub use enemies::*;
pub use gameplay::*;
pub use movement::*;
