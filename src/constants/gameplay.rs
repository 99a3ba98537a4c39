//! Player stats and dash tuning.

/// Player top speed (world units per second)
pub const PLAYER_SPEED: f32 = 500.0;
/// Player acceleration toward the steered velocity
pub const PLAYER_ACCELERATION: f32 = 5000.0;
/// Player half-extent
pub const PLAYER_RADIUS: f32 = 15.0;
/// Player starting and maximum health
pub const PLAYER_MAX_HEALTH: i32 = 3;

/// Seconds of charging for a full-strength dash
pub const DASH_MAX_CHARGE_TIME: f32 = 0.75;
/// Fraction of the max charge needed before release launches a dash
pub const DASH_MIN_CHARGE_RATIO: f32 = 0.2;
/// Seconds a dash lasts
pub const DASH_DURATION: f32 = 0.4;
/// Speed of a fully charged dash
pub const DASH_SPEED: f32 = 1000.0;

/// Radius (in tiles) of the block marked explored around the player
pub const EXPLORE_RADIUS: i32 = 1;
