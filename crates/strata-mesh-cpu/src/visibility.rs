use strata_chunk::ChunkStore;
use strata_geom::IVec3;
use strata_world::{ChunkCoord, WorldBounds};

use crate::error::MeshError;
use crate::face::Face;
use crate::neighbors::{ChunkNeighborhood, Neighbor, wrap_across};

/// Decides whether `face` of the cube at `local` in chunk `coord` must be drawn.
///
/// - air cubes emit nothing;
/// - inside the chunk the face shows iff the adjacent cell is air;
/// - across a chunk boundary it shows iff the neighbour chunk's wrapped cell is air,
///   or unconditionally when the neighbour lies outside `bounds`.
///
/// Errors when `coord` or a needed in-bounds neighbour was never generated, or when
/// `local` is not a cell of the chunk.
pub fn is_face_visible(
    store: &ChunkStore,
    coord: ChunkCoord,
    local: IVec3,
    face: Face,
    bounds: &WorldBounds,
) -> Result<bool, MeshError> {
    let chunk = store
        .get(coord)
        .ok_or(MeshError::MissingChunk { coord })?;
    let here = chunk
        .get_local(local)
        .ok_or(MeshError::LocalOutOfRange {
            coord,
            local,
            chunk_size: chunk.size(),
        })?;
    if here.is_air() {
        return Ok(false);
    }
    if let Some(adjacent) = chunk.get_local(local + face.delta()) {
        return Ok(adjacent.is_air());
    }
    let neighbor = Neighbor::resolve(store, coord, face, bounds)?;
    Ok(visible_across(neighbor, local, face, chunk.size()))
}

#[inline]
fn visible_across(neighbor: Neighbor<'_>, local: IVec3, face: Face, chunk_size: usize) -> bool {
    match neighbor {
        Neighbor::WorldEdge => true,
        Neighbor::Loaded(nb) => nb
            .get_local(wrap_across(local, face, chunk_size))
            .is_none_or(|v| v.is_air()),
    }
}

impl ChunkNeighborhood<'_> {
    /// Same rule as [`is_face_visible`] with every lookup already resolved.
    #[inline]
    pub fn face_visible(&self, local: IVec3, face: Face) -> bool {
        match self.center.get_local(local) {
            Some(v) if v.is_solid() => {}
            _ => return false,
        }
        if let Some(adjacent) = self.center.get_local(local + face.delta()) {
            return adjacent.is_air();
        }
        visible_across(self.neighbor(face), local, face, self.center.size())
    }
}
