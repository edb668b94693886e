/// Occupancy code of one unit cube. `0` is air; anything else is solid.
///
/// Kept as a byte so block types can be layered on later without changing the
/// chunk layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Voxel(pub u8);

impl Voxel {
    pub const AIR: Voxel = Voxel(0);
    pub const SOLID: Voxel = Voxel(1);

    #[inline]
    pub const fn from_solid(solid: bool) -> Self {
        if solid { Voxel::SOLID } else { Voxel::AIR }
    }

    #[inline]
    pub const fn is_air(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_solid(self) -> bool {
        !self.is_air()
    }
}
