//! Enemy stats, AI and spawner constants.

// PATROLLER
/// Patroller top speed
pub const PATROLLER_SPEED: f32 = 420.0;
/// Patroller acceleration
pub const PATROLLER_ACCELERATION: f32 = 1000.0;
/// Patroller half-extent
pub const PATROLLER_RADIUS: f32 = 20.0;
/// Patroller health
pub const PATROLLER_HEALTH: i32 = 2;
/// Distance within which a patroller can spot the player
pub const PATROLLER_SIGHT_RANGE: f32 = 500.0;
/// A patroller picks a new target once this close to the current one
pub const PATROLLER_ARRIVE_DISTANCE: f32 = 50.0;
/// Scale of the per-patroller jitter added to patrol targets
pub const PATROLLER_TARGET_JITTER: f32 = 50.0;
/// Extra copies of each non-backtracking option when choosing a patrol target
pub const PATROLLER_FORWARD_BIAS: usize = 20;

// SPAWNER
/// Spawner half-extent
pub const SPAWNER_RADIUS: f32 = 50.0;
/// Spawner braking acceleration
pub const SPAWNER_ACCELERATION: f32 = 5000.0;
/// Spawner health
pub const SPAWNER_HEALTH: i32 = 5;
/// Minimum delay before a fresh spawner's first wave; up to the same again is added at random
pub const SPAWNER_INITIAL_DELAY: f32 = 2.5;
/// Delay between waves
pub const SPAWNER_INTERVAL: f32 = 30.0;
/// Timer runs this many times faster while the player is within sight range
pub const SPAWNER_ALERT_MULTIPLIER: f32 = 5.0;
/// Chance a wave has three patrollers instead of two
pub const SPAWNER_LARGE_WAVE_CHANCE: f64 = 0.2;
/// Patrollers appear on a circle of this many spawner radii
pub const SPAWNER_RING_SCALE: f32 = 1.5;
