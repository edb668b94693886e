//! TOML build configuration and its validated form.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::field::{ConstantField, HeightMapField, OccupancyField, VolumetricField};
use crate::{ConfigError, NoiseSource, WorldBounds};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct StrataConfig {
    #[serde(default)]
    pub world: WorldSection,
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub atlas: AtlasSection,
}

impl StrataConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_toml_str(&s)?;
        log::info!(target: "config", "loaded {}", path.display());
        Ok(cfg)
    }

    /// Validates the world and atlas sections into immutable build settings.
    pub fn settings(&self) -> Result<BuildSettings, ConfigError> {
        let w = &self.world;
        let atlas = AtlasLayout::new(self.atlas.tile_size, self.atlas.padding)?;
        let settings = BuildSettings::new((w.chunks_x, w.chunks_y, w.chunks_z), w.chunk_size, atlas)?;
        Ok(settings.with_skip_enclosed(w.skip_enclosed))
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct WorldSection {
    #[serde(default = "default_chunks_x")]
    pub chunks_x: i32,
    #[serde(default = "default_chunks_y")]
    pub chunks_y: i32,
    #[serde(default = "default_chunks_z")]
    pub chunks_z: i32,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: i32,
    #[serde(default)]
    pub skip_enclosed: bool,
}
fn default_chunks_x() -> i32 {
    3
}
fn default_chunks_y() -> i32 {
    1
}
fn default_chunks_z() -> i32 {
    5
}
fn default_chunk_size() -> i32 {
    4
}
impl Default for WorldSection {
    fn default() -> Self {
        Self {
            chunks_x: default_chunks_x(),
            chunks_y: default_chunks_y(),
            chunks_z: default_chunks_z(),
            chunk_size: default_chunk_size(),
            skip_enclosed: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Heightmap,
    Volumetric,
    Solid,
    Air,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FieldConfig {
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default = "default_seed")]
    pub seed: i32,
    #[serde(default)]
    pub offset_x: f32,
    #[serde(default)]
    pub offset_y: f32,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default)]
    pub height_offset: f32,
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
    #[serde(default = "default_threshold")]
    pub threshold: f32,
}
fn default_seed() -> i32 {
    1337
}
fn default_scale() -> f32 {
    0.1
}
fn default_amplitude() -> f32 {
    4.0
}
fn default_threshold() -> f32 {
    0.5
}
impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            kind: FieldKind::default(),
            seed: default_seed(),
            offset_x: 0.0,
            offset_y: 0.0,
            scale: default_scale(),
            height_offset: 0.0,
            amplitude: default_amplitude(),
            threshold: default_threshold(),
        }
    }
}

impl FieldConfig {
    /// Builds the configured strategy. Fails on a non-positive scale or amplitude.
    pub fn build(&self) -> Result<Box<dyn OccupancyField>, ConfigError> {
        let noise = || NoiseSource::new(self.seed, self.offset_x, self.offset_y);
        let field: Box<dyn OccupancyField> = match self.kind {
            FieldKind::Heightmap => {
                positive("scale", self.scale)?;
                positive("amplitude", self.amplitude)?;
                Box::new(HeightMapField::new(
                    noise(),
                    self.scale,
                    self.height_offset,
                    self.amplitude,
                ))
            }
            FieldKind::Volumetric => {
                positive("scale", self.scale)?;
                Box::new(VolumetricField::new(noise(), self.scale, self.threshold))
            }
            FieldKind::Solid => Box::new(ConstantField::SOLID),
            FieldKind::Air => Box::new(ConstantField::AIR),
        };
        Ok(field)
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct AtlasSection {
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
    #[serde(default = "default_padding")]
    pub padding: f32,
}
fn default_tile_size() -> f32 {
    1.0 / 3.0
}
fn default_padding() -> f32 {
    0.01
}
impl Default for AtlasSection {
    fn default() -> Self {
        Self {
            tile_size: default_tile_size(),
            padding: default_padding(),
        }
    }
}

/// Texture atlas strip: three tiles (top, side, bottom) laid out along U.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtlasLayout {
    tile_size: f32,
    padding: f32,
}

impl AtlasLayout {
    pub const TILE_CLASSES: usize = 3;

    pub fn new(tile_size: f32, padding: f32) -> Result<Self, ConfigError> {
        let in_range = |v: f32| v.is_finite() && v > 0.0 && v < 0.5;
        let fits = 2.0 * padding < tile_size && tile_size * Self::TILE_CLASSES as f32 <= 1.0 + f32::EPSILON;
        if in_range(tile_size) && in_range(padding) && fits {
            Ok(Self { tile_size, padding })
        } else {
            Err(ConfigError::Atlas { tile_size, padding })
        }
    }

    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    #[inline]
    pub fn padding(&self) -> f32 {
        self.padding
    }
}

impl Default for AtlasLayout {
    fn default() -> Self {
        Self {
            tile_size: default_tile_size(),
            padding: default_padding(),
        }
    }
}

/// Validated, immutable inputs of one world build.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildSettings {
    bounds: WorldBounds,
    chunk_size: usize,
    atlas: AtlasLayout,
    skip_enclosed: bool,
}

impl BuildSettings {
    pub fn new(
        dims: (i32, i32, i32),
        chunk_size: i32,
        atlas: AtlasLayout,
    ) -> Result<Self, ConfigError> {
        if chunk_size < 1 {
            return Err(ConfigError::ChunkSize(chunk_size));
        }
        let (x, y, z) = dims;
        if x < 1 || y < 1 || z < 1 {
            return Err(ConfigError::Dimensions { x, y, z });
        }
        Ok(Self {
            bounds: WorldBounds::new(x as usize, y as usize, z as usize),
            chunk_size: chunk_size as usize,
            atlas,
            skip_enclosed: false,
        })
    }

    /// Also skip chunks that are solid and buried on all six sides.
    pub fn with_skip_enclosed(mut self, skip: bool) -> Self {
        self.skip_enclosed = skip;
        self
    }

    #[inline]
    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    #[inline]
    pub fn atlas(&self) -> AtlasLayout {
        self.atlas
    }

    #[inline]
    pub fn skip_enclosed(&self) -> bool {
        self.skip_enclosed
    }
}
