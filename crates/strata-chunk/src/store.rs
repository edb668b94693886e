use hashbrown::HashMap;
use strata_geom::IVec3;
use strata_world::{ChunkCoord, Voxel};

use crate::{Chunk, StoreError};

/// Generated chunks of one session, keyed by chunk coordinate.
///
/// Written during generation only; meshing borrows it read-only, so concurrent
/// meshers need no synchronisation.
#[derive(Clone, Debug, Default)]
pub struct ChunkStore {
    chunk_size: usize,
    chunks: HashMap<ChunkCoord, Chunk>,
}

impl ChunkStore {
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size,
            chunks: HashMap::new(),
        }
    }

    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    #[inline]
    pub fn get(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    /// Inserts or wholesale replaces the chunk at `coord`, returning the old one.
    ///
    /// Rejects a chunk whose edge differs from the store's chunk size.
    pub fn put(&mut self, coord: ChunkCoord, chunk: Chunk) -> Result<Option<Chunk>, StoreError> {
        if chunk.size() != self.chunk_size {
            log::error!(
                target: "store",
                "rejecting chunk {coord}: edge {} in a store of edge {}",
                chunk.size(),
                self.chunk_size
            );
            return Err(StoreError::ChunkSize {
                coord,
                expected: self.chunk_size,
                actual: chunk.size(),
            });
        }
        Ok(self.chunks.insert(coord, chunk))
    }

    pub fn remove(&mut self, coord: ChunkCoord) -> Option<Chunk> {
        self.chunks.remove(&coord)
    }

    #[inline]
    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn clear(&mut self) {
        if !self.chunks.is_empty() {
            log::debug!(target: "store", "clearing {} chunks", self.chunks.len());
        }
        self.chunks.clear();
    }

    /// Drops every chunk and switches to a new chunk size.
    pub fn reset(&mut self, chunk_size: usize) {
        self.clear();
        self.chunk_size = chunk_size;
    }

    /// Coordinates currently stored, sorted.
    pub fn coords(&self) -> Vec<ChunkCoord> {
        let mut v: Vec<_> = self.chunks.keys().copied().collect();
        v.sort_unstable();
        v
    }

    /// Calls `visit` with the absolute world position of every solid cell.
    ///
    /// Read-only export for debug visualisation; chunks are visited in coordinate
    /// order and cells in x, y, z order within each chunk.
    pub fn for_each_occupied(&self, mut visit: impl FnMut(IVec3, Voxel)) {
        let s = self.chunk_size;
        for coord in self.coords() {
            let Some(chunk) = self.chunks.get(&coord) else {
                continue;
            };
            let origin = coord.origin(s);
            for x in 0..s {
                for y in 0..s {
                    for z in 0..s {
                        let v = chunk.get(x, y, z);
                        if v.is_solid() {
                            visit(origin + IVec3::new(x as i32, y as i32, z as i32), v);
                        }
                    }
                }
            }
        }
    }
}
