use std::iter::FusedIterator;
use std::time::Instant;

use strata_chunk::{ChunkOccupancy, ChunkStore, generate_chunk};
use strata_mesh_cpu::{ChunkMesh, MeshError};
use strata_world::{BuildSettings, ChunkCoord, OccupancyField};

use crate::mesh_step;

/// One unit of cooperative work, as reported by [`WorldBuild::step`].
#[derive(Clone, Debug)]
pub enum BuildStep {
    Generated {
        coord: ChunkCoord,
        occupancy: ChunkOccupancy,
    },
    Meshed(ChunkMesh),
    /// All-air chunk: nothing to render, no mesh entry.
    SkippedEmpty(ChunkCoord),
    /// Solid chunk buried on all six sides (only with `skip_enclosed`).
    SkippedEnclosed(ChunkCoord),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub generated: usize,
    pub empty: usize,
    pub enclosed: usize,
    pub meshed: usize,
    pub faces: usize,
    pub gen_us: u64,
    pub mesh_us: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Generate,
    Mesh,
    Done,
    /// Units of work done, counting the one that failed.
    Failed { done: usize },
}

/// Incremental world build over a borrowed [`ChunkStore`].
///
/// Every chunk is generated before any chunk is meshed. Each call to [`step`] does
/// exactly one chunk's worth of work so the host decides how much to run per tick;
/// dropping the build cancels it, and meshes already handed out stay valid. After the
/// first error the build is over and yields nothing more.
///
/// [`step`]: WorldBuild::step
pub struct WorldBuild<'s> {
    settings: BuildSettings,
    field: &'s dyn OccupancyField,
    store: &'s mut ChunkStore,
    coords: Vec<ChunkCoord>,
    cursor: usize,
    phase: Phase,
    stats: BuildStats,
    started: Instant,
}

impl<'s> WorldBuild<'s> {
    /// Starts a build into `store`, which is reset to the settings' chunk size first.
    pub fn new(
        settings: BuildSettings,
        field: &'s dyn OccupancyField,
        store: &'s mut ChunkStore,
    ) -> Self {
        store.reset(settings.chunk_size());
        let bounds = settings.bounds();
        let coords: Vec<ChunkCoord> = bounds.coords().collect();
        log::info!(
            target: "build",
            "world build: {}x{}x{} chunks of {}, field {}",
            bounds.chunks_x,
            bounds.chunks_y,
            bounds.chunks_z,
            settings.chunk_size(),
            field.name()
        );
        let phase = if coords.is_empty() {
            Phase::Done
        } else {
            Phase::Generate
        };
        Self {
            settings,
            field,
            store,
            coords,
            cursor: 0,
            phase,
            stats: BuildStats::default(),
            started: Instant::now(),
        }
    }

    #[inline]
    pub fn settings(&self) -> &BuildSettings {
        &self.settings
    }

    #[inline]
    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Read access to the chunks generated so far.
    #[inline]
    pub fn store(&self) -> &ChunkStore {
        &*self.store
    }

    /// `(done, total)` units of work; every chunk is one generation and one mesh unit.
    pub fn progress(&self) -> (usize, usize) {
        let n = self.coords.len();
        let done = match self.phase {
            Phase::Generate => self.cursor,
            Phase::Mesh => n + self.cursor,
            Phase::Failed { done } => done,
            Phase::Done => 2 * n,
        };
        (done, 2 * n)
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Done | Phase::Failed { .. })
    }

    /// Runs one unit of work. `None` once the build has finished or failed.
    pub fn step(&mut self) -> Option<Result<BuildStep, MeshError>> {
        match self.phase {
            Phase::Generate => Some(self.generate_next()),
            Phase::Mesh => Some(self.mesh_next()),
            Phase::Done | Phase::Failed { .. } => None,
        }
    }

    fn generate_next(&mut self) -> Result<BuildStep, MeshError> {
        let t0 = Instant::now();
        let coord = self.coords[self.cursor];
        let chunk = generate_chunk(coord, self.settings.chunk_size(), self.field);
        let occupancy = chunk.occupancy();
        if let Err(e) = self.store.put(coord, chunk) {
            log::error!(target: "build", "world build aborted at chunk {coord}: {e}");
            self.phase = Phase::Failed {
                done: self.cursor + 1,
            };
            return Err(e.into());
        }
        self.stats.generated += 1;
        self.stats.gen_us += t0.elapsed().as_micros() as u64;

        self.cursor += 1;
        if self.cursor == self.coords.len() {
            log::info!(
                target: "build",
                "generated {} chunks in {}ms; meshing",
                self.stats.generated,
                self.stats.gen_us / 1000
            );
            self.phase = Phase::Mesh;
            self.cursor = 0;
        }
        Ok(BuildStep::Generated { coord, occupancy })
    }

    fn mesh_next(&mut self) -> Result<BuildStep, MeshError> {
        let coord = self.coords[self.cursor];
        self.cursor += 1;
        let step = match mesh_step(&*self.store, coord, &self.settings) {
            Ok(step) => step,
            Err(e) => {
                log::error!(target: "build", "world build aborted at chunk {coord}: {e}");
                self.phase = Phase::Failed {
                    done: self.coords.len() + self.cursor,
                };
                return Err(e);
            }
        };
        match &step {
            BuildStep::Meshed(mesh) => {
                self.stats.meshed += 1;
                self.stats.faces += mesh.build.face_count();
                self.stats.mesh_us += u64::from(mesh.mesh_us);
            }
            BuildStep::SkippedEmpty(_) => self.stats.empty += 1,
            BuildStep::SkippedEnclosed(_) => self.stats.enclosed += 1,
            BuildStep::Generated { .. } => {}
        }
        if self.cursor == self.coords.len() {
            self.phase = Phase::Done;
            let s = self.stats;
            log::info!(
                target: "build",
                "world build done in {}ms: {} meshed ({} faces), {} empty, {} enclosed",
                self.started.elapsed().as_millis(),
                s.meshed,
                s.faces,
                s.empty,
                s.enclosed
            );
        }
        Ok(step)
    }
}

impl Iterator for WorldBuild<'_> {
    type Item = Result<ChunkMesh, MeshError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.step()? {
                Ok(BuildStep::Meshed(mesh)) => return Some(Ok(mesh)),
                Ok(_) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

impl FusedIterator for WorldBuild<'_> {}
