use hashbrown::HashMap;
use strata_mesh_cpu::ChunkMesh;

/// Meshes handed to the host, addressable by name.
#[derive(Default)]
pub struct Scene {
    order: Vec<String>,
    meshes: HashMap<String, ChunkMesh>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mesh, replacing any earlier mesh with the same name.
    pub fn attach(&mut self, mesh: ChunkMesh) {
        log::trace!(
            target: "scene",
            "attach {} ({} faces, {}us)",
            mesh.name,
            mesh.build.face_count(),
            mesh.mesh_us
        );
        if !self.meshes.contains_key(&mesh.name) {
            self.order.push(mesh.name.clone());
        }
        self.meshes.insert(mesh.name.clone(), mesh);
    }

    /// Removes every attached mesh.
    pub fn clear(&mut self) {
        if !self.meshes.is_empty() {
            log::debug!(target: "scene", "clearing {} meshes", self.meshes.len());
        }
        self.order.clear();
        self.meshes.clear();
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Attached meshes in attach order.
    pub fn iter(&self) -> impl Iterator<Item = &ChunkMesh> {
        self.order.iter().filter_map(|n| self.meshes.get(n))
    }

    pub fn face_count(&self) -> usize {
        self.meshes.values().map(|m| m.build.face_count()).sum()
    }

    pub fn vertex_count(&self) -> usize {
        self.meshes.values().map(|m| m.build.vertex_count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_mesh_cpu::{MeshBuild, single_cube_mesh};
    use strata_geom::Vec3;
    use strata_world::{AtlasLayout, ChunkCoord};

    fn mesh(cx: i32, build: MeshBuild) -> ChunkMesh {
        ChunkMesh::new(ChunkCoord::new(cx, 0, 0), 1, build, 0)
    }

    #[test]
    fn attach_replaces_by_name_and_clear_empties() {
        let cube = single_cube_mesh(Vec3::ZERO, &AtlasLayout::default());
        let mut scene = Scene::new();
        scene.attach(mesh(0, MeshBuild::default()));
        scene.attach(mesh(1, cube.clone()));
        scene.attach(mesh(0, cube));
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.face_count(), 12);
        assert_eq!(scene.vertex_count(), 72);
        let names: Vec<&str> = scene.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["chunk(0,0,0)", "chunk(1,0,0)"]);

        scene.clear();
        assert_eq!(scene.len(), 0);
        assert_eq!(scene.iter().count(), 0);
    }
}
