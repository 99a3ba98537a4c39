//! Game systems organized by domain.
//!
//! - `movement`: steering and swept integration through the grid
//! - `ai`: patroller and spawner behaviour
//! - `dash`: the player's charge-and-release dash
//! - `combat`: contact damage, knockback and kills

pub mod ai;
pub mod combat;
pub mod dash;
pub mod movement;

pub use ai::run_ai;
pub use combat::{is_colliding, resolve_contacts, ContactReport, Kill};
pub use dash::{DashAction, DashPhase, DashState};
pub use movement::{integrate, integrate_entity, steer};
