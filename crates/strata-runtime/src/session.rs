use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use strata_chunk::{Chunk, ChunkStore, generate_chunk};
use strata_mesh_cpu::{ChunkMesh, MeshError};
use strata_world::{BuildSettings, ChunkCoord, OccupancyField};

use crate::{BuildStep, WorldBuild, mesh_step};

/// Owns the chunk store across builds. Starting a build clears whatever the
/// previous one left behind.
#[derive(Default)]
pub struct WorldSession {
    store: ChunkStore,
    pool: Option<Arc<ThreadPool>>,
}

impl WorldSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session whose parallel builds run on a dedicated pool of `workers` threads
    /// instead of the global rayon pool.
    pub fn with_workers(workers: usize) -> Result<Self, ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers.max(1))
            .thread_name(|i| format!("strata-build-{i}"))
            .build()?;
        Ok(Self {
            store: ChunkStore::default(),
            pool: Some(Arc::new(pool)),
        })
    }

    #[inline]
    pub fn store(&self) -> &ChunkStore {
        &self.store
    }

    /// Drops every chunk from the previous build.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Starts a stepped build. The store is reset before the first chunk is generated.
    pub fn begin<'s>(
        &'s mut self,
        settings: BuildSettings,
        field: &'s dyn OccupancyField,
    ) -> WorldBuild<'s> {
        WorldBuild::new(settings, field, &mut self.store)
    }

    /// Builds the whole world with both phases fanned out across worker threads.
    /// Output order matches the stepped build.
    pub fn build_parallel(
        &mut self,
        settings: BuildSettings,
        field: &dyn OccupancyField,
    ) -> Result<Vec<ChunkMesh>, MeshError> {
        match self.pool.clone() {
            Some(pool) => pool.install(|| self.run_parallel(settings, field)),
            None => self.run_parallel(settings, field),
        }
    }

    fn run_parallel(
        &mut self,
        settings: BuildSettings,
        field: &dyn OccupancyField,
    ) -> Result<Vec<ChunkMesh>, MeshError> {
        let t0 = Instant::now();
        let chunk_size = settings.chunk_size();
        self.store.reset(chunk_size);
        let coords: Vec<ChunkCoord> = settings.bounds().coords().collect();

        let chunks: Vec<(ChunkCoord, Chunk)> = coords
            .par_iter()
            .map(|&coord| (coord, generate_chunk(coord, chunk_size, field)))
            .collect();
        for (coord, chunk) in chunks {
            self.store.put(coord, chunk)?;
        }
        let gen_ms = t0.elapsed().as_millis();

        let store = &self.store;
        let meshes: Vec<ChunkMesh> = coords
            .par_iter()
            .filter_map(|&coord| match mesh_step(store, coord, &settings) {
                Ok(BuildStep::Meshed(mesh)) => Some(Ok(mesh)),
                Ok(_) => None,
                Err(e) => Some(Err(e)),
            })
            .collect::<Result<Vec<ChunkMesh>, MeshError>>()
            .inspect_err(|e| log::error!(target: "build", "parallel build aborted: {e}"))?;

        log::info!(
            target: "build",
            "parallel build done: {} chunks generated in {}ms, {} meshes in {}ms",
            coords.len(),
            gen_ms,
            meshes.len(),
            t0.elapsed().as_millis()
        );
        Ok(meshes)
    }
}

/// One-shot build into a throwaway store.
pub fn build_world(
    settings: BuildSettings,
    field: &dyn OccupancyField,
) -> Result<Vec<ChunkMesh>, MeshError> {
    let mut session = WorldSession::new();
    session.begin(settings, field).collect()
}
