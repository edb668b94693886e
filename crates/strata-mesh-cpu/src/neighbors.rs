use strata_chunk::{Chunk, ChunkStore};
use strata_geom::IVec3;
use strata_world::{ChunkCoord, WorldBounds};

use crate::error::MeshError;
use crate::face::Face;

/// What lies across one side of a chunk.
#[derive(Clone, Copy, Debug)]
pub enum Neighbor<'a> {
    /// Outside the world bounds; faces looking this way are always drawn.
    WorldEdge,
    Loaded(&'a Chunk),
}

impl<'a> Neighbor<'a> {
    /// Resolves the neighbour of `coord` across `face`.
    ///
    /// An in-bounds neighbour that is missing from the store means generation did not
    /// finish before meshing started; that is reported, never treated as air.
    pub fn resolve(
        store: &'a ChunkStore,
        coord: ChunkCoord,
        face: Face,
        bounds: &WorldBounds,
    ) -> Result<Self, MeshError> {
        let n = coord.step(face.delta());
        if !bounds.contains(n) {
            return Ok(Neighbor::WorldEdge);
        }
        match store.get(n) {
            Some(chunk) => Ok(Neighbor::Loaded(chunk)),
            None => {
                log::error!(
                    target: "mesh",
                    "chunk {coord}: in-bounds neighbour {n} across {face:?} missing from store"
                );
                Err(MeshError::MissingNeighbor {
                    chunk: coord,
                    neighbor: n,
                    face,
                })
            }
        }
    }
}

/// A chunk together with its six resolved neighbours, indexed by `Face::index`.
#[derive(Clone, Copy, Debug)]
pub struct ChunkNeighborhood<'a> {
    pub coord: ChunkCoord,
    pub center: &'a Chunk,
    pub neighbors: [Neighbor<'a>; 6],
}

impl<'a> ChunkNeighborhood<'a> {
    pub fn resolve(
        store: &'a ChunkStore,
        coord: ChunkCoord,
        bounds: &WorldBounds,
    ) -> Result<Self, MeshError> {
        let center = store
            .get(coord)
            .ok_or(MeshError::MissingChunk { coord })?;
        let mut neighbors = [Neighbor::WorldEdge; 6];
        for face in Face::ALL {
            neighbors[face.index()] = Neighbor::resolve(store, coord, face, bounds)?;
        }
        Ok(Self {
            coord,
            center,
            neighbors,
        })
    }

    #[inline]
    pub fn neighbor(&self, face: Face) -> Neighbor<'a> {
        self.neighbors[face.index()]
    }

    /// Which of the six sides have a generated chunk behind them (as opposed to the
    /// world edge).
    pub fn loaded_mask(&self) -> [bool; 6] {
        self.neighbors.map(|n| matches!(n, Neighbor::Loaded(_)))
    }
}

/// Local position in the neighbouring chunk that `local + face.delta()` lands on
/// after crossing the boundary: the stepped axis wraps to the opposite layer.
#[inline]
pub fn wrap_across(local: IVec3, face: Face, chunk_size: usize) -> IVec3 {
    let axis = face.axis();
    let wrapped = if face.is_positive() {
        0
    } else {
        chunk_size as i32 - 1
    };
    (local + face.delta()).with_axis(axis, wrapped)
}
