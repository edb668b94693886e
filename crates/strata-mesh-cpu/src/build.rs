use std::time::Instant;

use strata_chunk::ChunkStore;
use strata_geom::{IVec3, Vec3};
use strata_world::{AtlasLayout, ChunkCoord, WorldBounds};

use crate::chunk::ChunkMesh;
use crate::error::MeshError;
use crate::face::Face;
use crate::mesh_build::MeshBuild;
use crate::neighbors::{ChunkNeighborhood, Neighbor};

fn elapsed_us(start: Instant) -> u32 {
    start.elapsed().as_micros().min(u128::from(u32::MAX)) as u32
}

/// Meshes the chunk at `coord`, emitting only faces that can be seen.
///
/// Cubes are visited x-major (then y, then z) and faces in [`Face::ALL`] order, so
/// the output is reproducible. All six neighbours inside `bounds` must already be in
/// `store`.
pub fn build_chunk_mesh(
    store: &ChunkStore,
    coord: ChunkCoord,
    bounds: &WorldBounds,
    atlas: &AtlasLayout,
) -> Result<ChunkMesh, MeshError> {
    let t0 = Instant::now();
    let hood = ChunkNeighborhood::resolve(store, coord, bounds)?;
    let chunk = hood.center;
    let s = chunk.size();
    let origin = coord.origin(s);

    let mut build = MeshBuild::default();
    for x in 0..s {
        for y in 0..s {
            for z in 0..s {
                if chunk.get(x, y, z).is_air() {
                    continue;
                }
                let local = IVec3::new(x as i32, y as i32, z as i32);
                let base = (origin + local).as_vec3();
                for face in Face::ALL {
                    if hood.face_visible(local, face) {
                        build.add_face(base, face, atlas);
                    }
                }
            }
        }
    }

    let mesh_us = elapsed_us(t0);
    log::debug!(
        target: "mesh",
        "chunk {coord}: {} faces, {} verts in {}us (neighbours loaded {:?})",
        build.face_count(),
        build.vertex_count(),
        mesh_us,
        hood.loaded_mask()
    );
    Ok(ChunkMesh::new(coord, s, build, mesh_us))
}

/// True when the chunk cannot produce a single visible face: it is fully solid, all
/// six neighbours are inside the world, and each neighbour's facing layer is solid.
pub fn is_enclosed(
    store: &ChunkStore,
    coord: ChunkCoord,
    bounds: &WorldBounds,
) -> Result<bool, MeshError> {
    let hood = ChunkNeighborhood::resolve(store, coord, bounds)?;
    if !hood.center.is_full() {
        return Ok(false);
    }
    for face in Face::ALL {
        match hood.neighbor(face) {
            Neighbor::WorldEdge => return Ok(false),
            Neighbor::Loaded(nb) => {
                if !nb.boundary_layer_full(face.axis(), !face.is_positive()) {
                    return Ok(false);
                }
            }
        }
    }
    Ok(true)
}

/// All six faces of a lone cube at `origin`.
pub fn single_cube_mesh(origin: Vec3, atlas: &AtlasLayout) -> MeshBuild {
    let mut build = MeshBuild::default();
    build.reserve_faces(Face::ALL.len());
    for face in Face::ALL {
        build.add_face(origin, face, atlas);
    }
    build
}
