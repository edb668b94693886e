use std::path::PathBuf;

use thiserror::Error;

/// Rejected or unreadable build configuration.
///
/// Raised before any chunk is generated, so a failed build leaves no state behind.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("chunk size must be at least 1, got {0}")]
    ChunkSize(i32),

    #[error("world dimensions must be positive, got ({x}, {y}, {z})")]
    Dimensions { x: i32, y: i32, z: i32 },

    #[error("noise {name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("atlas tile size {tile_size} / padding {padding} out of range")]
    Atlas { tile_size: f32, padding: f32 },
}
