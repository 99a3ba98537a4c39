//! Game engine - owns the simulation state and advances it frame by frame.
//!
//! The engine handles:
//! - Level generation and entity setup
//! - Per-frame simulation (input, AI, movement, contact damage)
//! - Win/loss detection and automatic restarts
//!
//! Presentation (the headless runner, or any renderer) only feeds `Controls`
//! in and drains `GameEvent`s out.

mod game_state;
pub mod initialization;
mod simulation;

pub use game_state::{Controls, GameState, Outcome};
