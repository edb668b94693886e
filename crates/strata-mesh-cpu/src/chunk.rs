use strata_geom::{Aabb, Vec3};
use strata_world::ChunkCoord;

use crate::mesh_build::MeshBuild;

/// Mesh output for one chunk, ready to hand to a renderer.
#[derive(Clone, Debug)]
pub struct ChunkMesh {
    pub coord: ChunkCoord,
    /// Stable display name, e.g. `chunk(0,0,1)`.
    pub name: String,
    /// World-space bounds of the whole chunk.
    pub bbox: Aabb,
    pub build: MeshBuild,
    pub mesh_us: u32,
}

impl ChunkMesh {
    pub fn new(coord: ChunkCoord, chunk_size: usize, build: MeshBuild, mesh_us: u32) -> Self {
        let origin: Vec3 = coord.origin(chunk_size).as_vec3();
        Self {
            coord,
            name: Self::name_for(coord),
            bbox: Aabb::cube(origin, chunk_size as f32),
            build,
            mesh_us,
        }
    }

    pub fn name_for(coord: ChunkCoord) -> String {
        format!("chunk{coord}")
    }
}
