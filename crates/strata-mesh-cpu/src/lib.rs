//! CPU meshing: per-face culled cube meshes with atlas UVs.
#![forbid(unsafe_code)]

pub mod atlas;
mod build;
mod chunk;
pub mod constants;
mod error;
mod face;
mod mesh_build;
mod neighbors;
mod visibility;

pub use atlas::{TileClass, atlas_uv};
pub use build::{build_chunk_mesh, is_enclosed, single_cube_mesh};
pub use chunk::ChunkMesh;
pub use error::MeshError;
pub use face::Face;
pub use mesh_build::MeshBuild;
pub use neighbors::{ChunkNeighborhood, Neighbor, wrap_across};
pub use visibility::is_face_visible;
