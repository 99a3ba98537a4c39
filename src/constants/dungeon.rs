//! Dungeon generation and tile-space constants.

/// Default dungeon width in tiles
pub const DUNGEON_DEFAULT_WIDTH: usize = 7;
/// Default dungeon height in tiles
pub const DUNGEON_DEFAULT_HEIGHT: usize = 7;
/// Smallest accepted width/height (needs at least one room node per axis)
pub const DUNGEON_MIN_DIMENSION: usize = 2;
/// Chance the maze walker marks the node it stands on as visited.
/// Leaving a node unmarked lets the walk come back through it, which adds loops.
pub const DUNGEON_VISIT_CHANCE: f64 = 0.9;
/// Side length of one tile in world units
pub const ROOM_SIZE: f32 = 600.0;
