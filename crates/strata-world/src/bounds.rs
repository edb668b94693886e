use crate::ChunkCoord;

/// Rectangular grid of chunk coordinates `[0,x) × [0,y) × [0,z)`.
///
/// Anything outside is "beyond the world": faces that look out of the bounds are
/// always drawn and no neighbour lookup happens for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldBounds {
    pub chunks_x: usize,
    pub chunks_y: usize,
    pub chunks_z: usize,
}

impl WorldBounds {
    #[inline]
    pub const fn new(chunks_x: usize, chunks_y: usize, chunks_z: usize) -> Self {
        Self {
            chunks_x,
            chunks_y,
            chunks_z,
        }
    }

    #[inline]
    pub fn contains(&self, c: ChunkCoord) -> bool {
        c.cx >= 0
            && c.cy >= 0
            && c.cz >= 0
            && (c.cx as usize) < self.chunks_x
            && (c.cy as usize) < self.chunks_y
            && (c.cz as usize) < self.chunks_z
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks_x * self.chunks_y * self.chunks_z
    }

    /// All coordinates in build order: x outermost, then y, then z.
    pub fn coords(&self) -> impl Iterator<Item = ChunkCoord> + use<> {
        let (sx, sy, sz) = (self.chunks_x as i32, self.chunks_y as i32, self.chunks_z as i32);
        (0..sx).flat_map(move |x| {
            (0..sy).flat_map(move |y| (0..sz).map(move |z| ChunkCoord::new(x, y, z)))
        })
    }
}
