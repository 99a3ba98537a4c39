//! Body movement, collision and line-of-sight constants.

/// Longest distance a body travels between two collision passes (world units).
/// Bodies never sub-step further than their own radius either.
pub const MAX_SEGMENT_LENGTH: f32 = 10.0;
/// Frames longer than this (seconds) are dropped instead of simulated
pub const MAX_FRAME_DELTA: f32 = 0.1;
/// Raycast steps overshoot each grid line by this factor so the next lookup
/// lands inside the tile being entered
pub const RAYCAST_OVERSHOOT: f32 = 1.00001;
/// Smallest distance a raycast step may advance (world units)
pub const RAYCAST_MIN_STEP: f32 = 0.01;
