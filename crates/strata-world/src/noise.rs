use fastnoise_lite::{FastNoiseLite, NoiseType};

/// Seeded 2D gradient noise remapped into `[0, 1]`.
///
/// Frequency is fixed at 1; callers scale their coordinates before sampling so the
/// field parameters stay in one place.
pub struct NoiseSource {
    noise: FastNoiseLite,
    seed: i32,
    offset_x: f32,
    offset_y: f32,
}

impl NoiseSource {
    pub fn new(seed: i32, offset_x: f32, offset_y: f32) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed);
        noise.set_noise_type(Some(NoiseType::Perlin));
        noise.set_frequency(Some(1.0));
        Self {
            noise,
            seed,
            offset_x,
            offset_y,
        }
    }

    /// Samples at `(x, y)` (already scaled) and returns a value in `[0, 1]`.
    #[inline]
    pub fn sample01(&self, x: f32, y: f32) -> f32 {
        let n = self
            .noise
            .get_noise_2d(x + self.offset_x, y + self.offset_y);
        ((n + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

impl std::fmt::Debug for NoiseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseSource")
            .field("seed", &self.seed)
            .field("offset_x", &self.offset_x)
            .field("offset_y", &self.offset_y)
            .finish()
    }
}
