//! Contact damage constants.

/// Seconds of invulnerability after taking a hit
pub const INVULNERABILITY_DURATION: f32 = 1.0;
/// Knockback speed applied to a damaged body
pub const KNOCKBACK_SPEED: f32 = 700.0;
/// Damage dealt per contact
pub const CONTACT_DAMAGE: i32 = 1;
