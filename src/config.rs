use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{
    DUNGEON_DEFAULT_HEIGHT, DUNGEON_DEFAULT_WIDTH, DUNGEON_MIN_DIMENSION, MAX_SEGMENT_LENGTH,
    ROOM_SIZE,
};
use crate::error::ConfigError;

/// Level and world settings. Gameplay tuning lives in `constants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Maze width in tiles
    pub dungeon_width: usize,
    /// Maze height in tiles
    pub dungeon_height: usize,
    /// Side length of one tile in world units
    pub room_size: f32,
    /// Longest distance a body moves between two collision passes
    pub max_segment_length: f32,
    /// Fixed RNG seed; entropy when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dungeon_width: DUNGEON_DEFAULT_WIDTH,
            dungeon_height: DUNGEON_DEFAULT_HEIGHT,
            room_size: ROOM_SIZE,
            max_segment_length: MAX_SEGMENT_LENGTH,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dungeon_width < DUNGEON_MIN_DIMENSION || self.dungeon_height < DUNGEON_MIN_DIMENSION {
            return Err(ConfigError::Invalid(format!(
                "dungeon must be at least {min}x{min}, got {}x{}",
                self.dungeon_width,
                self.dungeon_height,
                min = DUNGEON_MIN_DIMENSION,
            )));
        }
        if !self.room_size.is_finite() || self.room_size <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "room_size must be positive, got {}",
                self.room_size
            )));
        }
        if !self.max_segment_length.is_finite() || self.max_segment_length <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max_segment_length must be positive, got {}",
                self.max_segment_length
            )));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
