use strata_world::ChunkCoord;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("chunk {coord} has edge {actual}, store holds chunks of edge {expected}")]
    ChunkSize {
        coord: ChunkCoord,
        expected: usize,
        actual: usize,
    },
}
