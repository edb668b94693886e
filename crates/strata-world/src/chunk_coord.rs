use serde::{Deserialize, Serialize};
use strata_geom::IVec3;

/// Integer position of a chunk in chunk space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cy: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cy: i32, cz: i32) -> Self {
        Self { cx, cy, cz }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            cx: self.cx + dx,
            cy: self.cy + dy,
            cz: self.cz + dz,
        }
    }

    /// Neighbouring chunk one step along `delta` (a unit face normal).
    #[inline]
    pub fn step(self, delta: IVec3) -> Self {
        self.offset(delta.x, delta.y, delta.z)
    }

    /// World-space integer position of local cell (0,0,0): `coord * chunk_size`.
    #[inline]
    pub fn origin(self, chunk_size: usize) -> IVec3 {
        IVec3::new(self.cx, self.cy, self.cz).scaled(chunk_size as i32)
    }
}

impl std::fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.cx, self.cy, self.cz)
    }
}

impl From<(i32, i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<ChunkCoord> for (i32, i32, i32) {
    fn from(value: ChunkCoord) -> Self {
        (value.cx, value.cy, value.cz)
    }
}
