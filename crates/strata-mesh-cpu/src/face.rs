use strata_geom::{IVec3, Vec3};

use crate::atlas::TileClass;

/// One of the six axis-aligned sides of a unit cube.
///
/// Discriminants follow the canonical emission order and index the face templates
/// in [`crate::constants::FACE_TRIANGLES`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    Back = 0,
    Front = 1,
    Down = 2,
    Up = 3,
    Left = 4,
    Right = 5,
}

impl Face {
    /// Canonical order in which a cube's faces are emitted.
    pub const ALL: [Face; 6] = [
        Face::Back,
        Face::Front,
        Face::Down,
        Face::Up,
        Face::Left,
        Face::Right,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Integer step `(dx,dy,dz)` out of this face.
    #[inline]
    pub fn delta(self) -> IVec3 {
        match self {
            Face::Back => IVec3::new(0, 0, -1),
            Face::Front => IVec3::new(0, 0, 1),
            Face::Down => IVec3::new(0, -1, 0),
            Face::Up => IVec3::new(0, 1, 0),
            Face::Left => IVec3::new(-1, 0, 0),
            Face::Right => IVec3::new(1, 0, 0),
        }
    }

    /// Outward unit normal.
    #[inline]
    pub fn normal(self) -> Vec3 {
        self.delta().as_vec3()
    }

    /// Axis the face is perpendicular to: `0 = x`, `1 = y`, `2 = z`.
    #[inline]
    pub fn axis(self) -> usize {
        match self {
            Face::Left | Face::Right => 0,
            Face::Down | Face::Up => 1,
            Face::Back | Face::Front => 2,
        }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        matches!(self, Face::Front | Face::Up | Face::Right)
    }

    /// Atlas tile the face samples from.
    #[inline]
    pub fn tile_class(self) -> TileClass {
        match self {
            Face::Up => TileClass::Top,
            Face::Down => TileClass::Bottom,
            _ => TileClass::Side,
        }
    }
}
