//! Error types for generation, configuration and the game context.
//!
//! Only genuinely invalid input is an error. Out-of-range tile reads, an
//! exhausted endpoint pool and zero-length rays are ordinary `Option`/`Wall`
//! results so per-frame queries never build error values.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Both dimensions must be at least 2 and fit in `i32` tile coordinates
    #[error("invalid dungeon dimensions {width}x{height}: both must be between 2 and {max}", max = i32::MAX)]
    InvalidDimensions { width: usize, height: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
