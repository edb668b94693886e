//! Occupancy strategies: world position in, solid/air out.
//!
//! Every field is a pure function of its parameters and the sample position, so two
//! fields built from the same configuration agree bit for bit.

use strata_geom::Vec3;

use crate::{NoiseSource, Voxel};

/// Maps a world-space position to a density and an occupancy code.
pub trait OccupancyField: Send + Sync {
    /// Raw scalar density at `p`, before thresholding.
    fn density(&self, p: Vec3) -> f32;

    /// Thresholded occupancy at `p`.
    fn sample(&self, p: Vec3) -> Voxel;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}

impl<F: OccupancyField + ?Sized> OccupancyField for Box<F> {
    #[inline]
    fn density(&self, p: Vec3) -> f32 {
        (**self).density(p)
    }

    #[inline]
    fn sample(&self, p: Vec3) -> Voxel {
        (**self).sample(p)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Terrain surface: solid below a noise-perturbed height.
///
/// Density is the noise at `(x, z) * scale`; a cell is solid when the density
/// exceeds its normalised height `(y - height_offset) / amplitude`.
#[derive(Debug)]
pub struct HeightMapField {
    noise: NoiseSource,
    scale: f32,
    height_offset: f32,
    amplitude: f32,
}

impl HeightMapField {
    pub fn new(noise: NoiseSource, scale: f32, height_offset: f32, amplitude: f32) -> Self {
        Self {
            noise,
            scale,
            height_offset,
            amplitude,
        }
    }

    #[inline]
    pub fn normalized_height(&self, y: f32) -> f32 {
        (y - self.height_offset) / self.amplitude
    }
}

impl OccupancyField for HeightMapField {
    #[inline]
    fn density(&self, p: Vec3) -> f32 {
        self.noise.sample01(p.x * self.scale, p.z * self.scale)
    }

    #[inline]
    fn sample(&self, p: Vec3) -> Voxel {
        Voxel::from_solid(self.density(p) > self.normalized_height(p.y))
    }

    fn name(&self) -> &'static str {
        "heightmap"
    }
}

/// Caves-and-overhangs density built from a 2D primitive.
///
/// Averages the six ordered axis pairs so no axis is favoured; noisier than real 3D
/// noise but isotropic.
#[derive(Debug)]
pub struct VolumetricField {
    noise: NoiseSource,
    scale: f32,
    threshold: f32,
}

impl VolumetricField {
    pub fn new(noise: NoiseSource, scale: f32, threshold: f32) -> Self {
        Self {
            noise,
            scale,
            threshold,
        }
    }
}

impl OccupancyField for VolumetricField {
    fn density(&self, p: Vec3) -> f32 {
        let (x, y, z) = (p.x * self.scale, p.y * self.scale, p.z * self.scale);
        let n = &self.noise;
        let sum = n.sample01(x, y)
            + n.sample01(y, z)
            + n.sample01(z, x)
            + n.sample01(y, x)
            + n.sample01(z, y)
            + n.sample01(x, z);
        sum / 6.0
    }

    #[inline]
    fn sample(&self, p: Vec3) -> Voxel {
        Voxel::from_solid(self.density(p) > self.threshold)
    }

    fn name(&self) -> &'static str {
        "volumetric"
    }
}

/// The same occupancy everywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConstantField(pub Voxel);

impl ConstantField {
    pub const SOLID: ConstantField = ConstantField(Voxel::SOLID);
    pub const AIR: ConstantField = ConstantField(Voxel::AIR);
}

impl OccupancyField for ConstantField {
    #[inline]
    fn density(&self, _p: Vec3) -> f32 {
        if self.0.is_solid() { 1.0 } else { 0.0 }
    }

    #[inline]
    fn sample(&self, _p: Vec3) -> Voxel {
        self.0
    }

    fn name(&self) -> &'static str {
        if self.0.is_solid() { "solid" } else { "air" }
    }
}
