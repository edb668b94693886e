use strata_geom::Vec3;
use strata_world::AtlasLayout;

use crate::atlas::atlas_uv;
use crate::constants::{CUBE_CORNERS, FACE_TRIANGLES, FACE_UVS, VERTICES_PER_FACE};
use crate::face::Face;

/// Packed triangle buffers for one chunk.
///
/// Faces never share vertices: every emitted face appends six fresh vertices and six
/// sequential indices. Normals are left to the consumer.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuild {
    /// Vertex positions, `x y z` per vertex.
    pub pos: Vec<f32>,
    /// Atlas coordinates, `u v` per vertex.
    pub uv: Vec<f32>,
    /// Triangle list, three indices per triangle.
    pub idx: Vec<u32>,
}

impl MeshBuild {
    /// Pre-reserve capacity for `n_faces` more faces.
    #[inline]
    pub fn reserve_faces(&mut self, n_faces: usize) {
        let verts = n_faces * VERTICES_PER_FACE;
        self.pos.reserve(verts * 3);
        self.uv.reserve(verts * 2);
        self.idx.reserve(verts);
    }

    /// Appends `face` of the unit cube whose minimum corner is `origin`.
    pub fn add_face(&mut self, origin: Vec3, face: Face, atlas: &AtlasLayout) {
        let base = self.vertex_count() as u32;
        let class = face.tile_class();
        let template = &FACE_TRIANGLES[face.index()];
        for (slot, &corner) in template.iter().enumerate() {
            let p = origin + CUBE_CORNERS[corner];
            self.pos.extend_from_slice(&[p.x, p.y, p.z]);
            let (u, v) = atlas_uv(atlas, class, FACE_UVS[slot]);
            self.uv.extend_from_slice(&[u, v]);
            self.idx.push(base + slot as u32);
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.idx.len() / 3
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.idx.len() / VERTICES_PER_FACE
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }

    /// Position of vertex `i`.
    #[inline]
    pub fn vertex(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos[i * 3], self.pos[i * 3 + 1], self.pos[i * 3 + 2])
    }

    /// Buffer invariants: whole triangles, in-range indices, one UV pair per vertex.
    pub fn is_consistent(&self) -> bool {
        let n = self.vertex_count();
        self.pos.len() % 3 == 0
            && self.idx.len() % 3 == 0
            && self.uv.len() == n * 2
            && self.idx.iter().all(|&i| (i as usize) < n)
    }
}
