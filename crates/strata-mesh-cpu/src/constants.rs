//! Unit-cube geometry shared by every emitted face.

use strata_geom::Vec3;

/// Corner offsets of the unit cube. Naming: r/l = x 1/0, u/d = y 1/0, f/b = z 1/0.
pub const CUBE_CORNERS: [Vec3; 8] = [
    Vec3::new(1.0, 0.0, 0.0), // rdb
    Vec3::new(0.0, 0.0, 0.0), // ldb
    Vec3::new(0.0, 1.0, 0.0), // lub
    Vec3::new(1.0, 1.0, 0.0), // rub
    Vec3::new(1.0, 0.0, 1.0), // rdf
    Vec3::new(0.0, 0.0, 1.0), // ldf
    Vec3::new(0.0, 1.0, 1.0), // luf
    Vec3::new(1.0, 1.0, 1.0), // ruf
];

/// Two triangles per face as indices into [`CUBE_CORNERS`], indexed by `Face::index`.
///
/// Each template walks its quad as `a b c c d a`. `(b - a) × (c - a)` points along the
/// outward normal for every triangle (counter-clockwise seen from outside).
pub const FACE_TRIANGLES: [[usize; 6]; 6] = [
    [0, 1, 2, 2, 3, 0], // back
    [6, 5, 4, 4, 7, 6], // front
    [5, 1, 0, 0, 4, 5], // down
    [3, 2, 6, 6, 7, 3], // up
    [1, 5, 6, 6, 2, 1], // left
    [4, 0, 3, 3, 7, 4], // right
];

/// Tile-local UV for each slot of a face template.
pub const FACE_UVS: [(f32, f32); 6] = [
    (0.0, 0.0),
    (1.0, 0.0),
    (1.0, 1.0),
    (1.0, 1.0),
    (0.0, 1.0),
    (0.0, 0.0),
];

pub const VERTICES_PER_FACE: usize = 6;
