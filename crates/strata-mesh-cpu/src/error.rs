use strata_chunk::StoreError;
use strata_geom::IVec3;
use strata_world::ChunkCoord;
use thiserror::Error;

use crate::face::Face;

/// Broken phase ordering or chunk state detected while building. Fatal for the whole build.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    #[error("chunk {coord} was never generated")]
    MissingChunk { coord: ChunkCoord },

    #[error("chunk {chunk}: neighbour {neighbor} across {face:?} is inside the world but not generated")]
    MissingNeighbor {
        chunk: ChunkCoord,
        neighbor: ChunkCoord,
        face: Face,
    },

    #[error("local cell {local:?} lies outside chunk {coord} of edge {chunk_size}")]
    LocalOutOfRange {
        coord: ChunkCoord,
        local: IVec3,
        chunk_size: usize,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}
