//! Chunk occupancy grids, the chunk store, and chunk generation.
#![forbid(unsafe_code)]

mod error;
mod store;

pub use error::StoreError;
pub use store::ChunkStore;

use strata_geom::IVec3;
use strata_world::{ChunkCoord, OccupancyField, Voxel};

/// Dense cubic grid of voxels, `size³` cells in one flat buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    size: usize,
    cells: Vec<Voxel>,
}

impl Chunk {
    /// All-air chunk.
    pub fn new(size: usize) -> Self {
        Self::filled(size, Voxel::AIR)
    }

    pub fn filled(size: usize, v: Voxel) -> Self {
        Self {
            size,
            cells: vec![v; size * size * size],
        }
    }

    /// Wraps `cells` laid out as `x + y*size + z*size²`, padding with air or truncating
    /// to the exact length.
    pub fn from_cells(size: usize, cells: Vec<Voxel>) -> Self {
        let mut c = cells;
        let expect = size * size * size;
        if c.len() != expect {
            c.resize(expect, Voxel::AIR);
        }
        Self { size, cells: c }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn cells(&self) -> &[Voxel] {
        &self.cells
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.size + z * self.size * self.size
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Voxel {
        self.cells[self.idx(x, y, z)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, v: Voxel) {
        let i = self.idx(x, y, z);
        self.cells[i] = v;
    }

    #[inline]
    pub fn contains_local(&self, p: IVec3) -> bool {
        let s = self.size as i32;
        p.x >= 0 && p.y >= 0 && p.z >= 0 && p.x < s && p.y < s && p.z < s
    }

    /// Voxel at a signed local position, `None` outside `[0,size)³`.
    #[inline]
    pub fn get_local(&self, p: IVec3) -> Option<Voxel> {
        if self.contains_local(p) {
            Some(self.get(p.x as usize, p.y as usize, p.z as usize))
        } else {
            None
        }
    }

    /// True iff every cell is air.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|v| v.is_air())
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|v| v.is_solid())
    }

    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|v| v.is_solid()).count()
    }

    #[inline]
    pub fn occupancy(&self) -> ChunkOccupancy {
        if self.is_empty() {
            ChunkOccupancy::Empty
        } else {
            ChunkOccupancy::Populated
        }
    }

    /// Whether the outermost layer on `axis` (`0 = x`, `1 = y`, `2 = z`) is all solid.
    /// `at_max` picks the `size-1` layer instead of `0`.
    pub fn boundary_layer_full(&self, axis: usize, at_max: bool) -> bool {
        let layer = if at_max { self.size - 1 } else { 0 };
        for a in 0..self.size {
            for b in 0..self.size {
                let (x, y, z) = match axis {
                    0 => (layer, a, b),
                    1 => (a, layer, b),
                    _ => (a, b, layer),
                };
                if self.get(x, y, z).is_air() {
                    return false;
                }
            }
        }
        true
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChunkOccupancy {
    Empty,
    Populated,
}

impl ChunkOccupancy {
    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, ChunkOccupancy::Empty)
    }

    #[inline]
    pub fn has_blocks(self) -> bool {
        matches!(self, ChunkOccupancy::Populated)
    }
}

/// Samples `field` at every cell of the chunk at `coord`.
///
/// Cell `(x,y,z)` is sampled at its integer world position `coord*size + (x,y,z)`.
pub fn generate_chunk<F>(coord: ChunkCoord, chunk_size: usize, field: &F) -> Chunk
where
    F: OccupancyField + ?Sized,
{
    let origin = coord.origin(chunk_size);
    let mut cells = Vec::with_capacity(chunk_size * chunk_size * chunk_size);
    for z in 0..chunk_size {
        for y in 0..chunk_size {
            for x in 0..chunk_size {
                let world = origin + IVec3::new(x as i32, y as i32, z as i32);
                cells.push(field.sample(world.as_vec3()));
            }
        }
    }
    Chunk::from_cells(chunk_size, cells)
}
