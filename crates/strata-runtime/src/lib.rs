//! World build orchestration: two-phase generation then meshing, stepped or parallel.
#![forbid(unsafe_code)]

mod build;
mod session;

pub use build::{BuildStats, BuildStep, WorldBuild};
pub use session::{WorldSession, build_world};

use strata_chunk::ChunkStore;
use strata_mesh_cpu::{MeshError, build_chunk_mesh, is_enclosed};
use strata_world::{BuildSettings, ChunkCoord};

/// Phase-2 unit of work for one chunk. Reads the store only.
pub(crate) fn mesh_step(
    store: &ChunkStore,
    coord: ChunkCoord,
    settings: &BuildSettings,
) -> Result<BuildStep, MeshError> {
    let chunk = store
        .get(coord)
        .ok_or(MeshError::MissingChunk { coord })?;
    if chunk.is_empty() {
        log::debug!(target: "build", "chunk {coord}: all air, skipped");
        return Ok(BuildStep::SkippedEmpty(coord));
    }
    let bounds = settings.bounds();
    if settings.skip_enclosed() && is_enclosed(store, coord, &bounds)? {
        log::debug!(target: "build", "chunk {coord}: enclosed, skipped");
        return Ok(BuildStep::SkippedEnclosed(coord));
    }
    build_chunk_mesh(store, coord, &bounds, &settings.atlas()).map(BuildStep::Meshed)
}
