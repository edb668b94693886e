//! World sizing, occupancy sampling, and build configuration.
#![forbid(unsafe_code)]

mod bounds;
mod chunk_coord;
pub mod config;
mod error;
pub mod field;
mod noise;
mod voxel;

pub use bounds::WorldBounds;
pub use chunk_coord::ChunkCoord;
pub use config::{AtlasLayout, BuildSettings, FieldConfig, FieldKind, StrataConfig};
pub use error::ConfigError;
pub use field::{ConstantField, HeightMapField, OccupancyField, VolumetricField};
pub use noise::NoiseSource;
pub use voxel::Voxel;
