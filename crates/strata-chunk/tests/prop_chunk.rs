use proptest::prelude::*;
use strata_chunk::{Chunk, ChunkStore, StoreError, generate_chunk};
use strata_geom::{IVec3, Vec3};
use strata_world::{ChunkCoord, ConstantField, HeightMapField, NoiseSource, OccupancyField, Voxel};

fn dim() -> impl Strategy<Value = usize> {
    1usize..=8
}

fn small_i32() -> impl Strategy<Value = i32> {
    -1_000i32..=1_000
}

/// Solid wherever `x + y + z` is even.
struct Checker;

impl OccupancyField for Checker {
    fn density(&self, p: Vec3) -> f32 {
        ((p.x + p.y + p.z) as i32).rem_euclid(2) as f32
    }
    fn sample(&self, p: Vec3) -> Voxel {
        Voxel::from_solid(self.density(p) == 0.0)
    }
    fn name(&self) -> &'static str {
        "checker"
    }
}

proptest! {
    // idx maps each (x,y,z) within bounds to a unique in-range index
    #[test]
    fn idx_is_unique_and_in_range(s in dim()) {
        let c = Chunk::new(s);
        let expect = s * s * s;
        let mut seen = vec![false; expect];
        for z in 0..s { for y in 0..s { for x in 0..s {
            let i = c.idx(x, y, z);
            prop_assert_eq!(i, x + y * s + z * s * s);
            prop_assert!(i < expect);
            prop_assert!(!seen[i]);
            seen[i] = true;
        }}}
        prop_assert!(seen.into_iter().all(|b| b));
    }

    // from_cells pads or truncates to exactly size³
    #[test]
    fn from_cells_resizes(s in dim(), extra in 0usize..4) {
        let expect = s * s * s;
        prop_assert_eq!(Chunk::from_cells(s, vec![Voxel::SOLID; expect]).cells().len(), expect);
        prop_assert_eq!(Chunk::from_cells(s, vec![Voxel::SOLID; expect + extra]).cells().len(), expect);
        let short = Chunk::from_cells(s, vec![Voxel::SOLID; expect - 1]);
        prop_assert_eq!(short.cells().len(), expect);
        prop_assert_eq!(short.solid_count(), expect - 1);
    }

    // generation samples each cell at its absolute world position
    #[test]
    fn generate_uses_world_positions(cx in small_i32(), cy in small_i32(), cz in small_i32(), s in dim()) {
        let coord = ChunkCoord::new(cx, cy, cz);
        let chunk = generate_chunk(coord, s, &Checker);
        let origin = coord.origin(s);
        for z in 0..s { for y in 0..s { for x in 0..s {
            let w = origin + IVec3::new(x as i32, y as i32, z as i32);
            prop_assert_eq!(chunk.get(x, y, z), Checker.sample(w.as_vec3()));
        }}}
    }

    // generating the same chunk twice yields identical contents
    #[test]
    fn generation_is_idempotent(cx in small_i32(), cz in small_i32(), s in dim(), seed in any::<i32>()) {
        let field = HeightMapField::new(NoiseSource::new(seed, 0.0, 0.0), 0.1, 0.0, s as f32);
        let coord = ChunkCoord::new(cx, 0, cz);
        prop_assert_eq!(generate_chunk(coord, s, &field), generate_chunk(coord, s, &field));
    }
}

#[test]
fn empty_and_full_classification() {
    let air = generate_chunk(ChunkCoord::new(0, 0, 0), 4, &ConstantField::AIR);
    assert!(air.is_empty());
    assert!(air.occupancy().is_empty());
    let solid = generate_chunk(ChunkCoord::new(0, 0, 0), 4, &ConstantField::SOLID);
    assert!(solid.is_full());
    assert!(!solid.is_empty());
    for axis in 0..3 {
        assert!(solid.boundary_layer_full(axis, false));
        assert!(solid.boundary_layer_full(axis, true));
    }
}

#[test]
fn store_put_replaces_and_clear_resets() {
    let mut store = ChunkStore::new(2);
    let c = ChunkCoord::new(1, 0, 0);
    assert!(store.put(c, Chunk::new(2)).unwrap().is_none());
    assert!(store.put(c, Chunk::filled(2, Voxel::SOLID)).unwrap().is_some());
    assert_eq!(store.len(), 1);
    assert!(store.get(c).unwrap().is_full());
    assert!(store.get(ChunkCoord::new(0, 0, 0)).is_none());
    assert!(store.remove(c).is_some_and(|ch| ch.is_full()));
    assert!(!store.contains(c));

    store.put(c, Chunk::new(2)).unwrap();
    store.reset(3);
    assert!(store.is_empty());
    assert_eq!(store.chunk_size(), 3);
}

#[test]
fn for_each_occupied_reports_world_positions() {
    let mut store = ChunkStore::new(2);
    let mut a = Chunk::new(2);
    a.set(1, 0, 1, Voxel::SOLID);
    let mut b = Chunk::new(2);
    b.set(0, 1, 0, Voxel::SOLID);
    store.put(ChunkCoord::new(0, 0, 1), b).unwrap();
    store.put(ChunkCoord::new(0, 0, 0), a).unwrap();

    let mut seen = Vec::new();
    store.for_each_occupied(|p, v| {
        assert!(v.is_solid());
        seen.push(p);
    });
    assert_eq!(seen, vec![IVec3::new(1, 0, 1), IVec3::new(0, 1, 2)]);
}

#[test]
fn put_rejects_a_chunk_of_the_wrong_edge() {
    let mut store = ChunkStore::new(2);
    let c = ChunkCoord::new(1, 0, 0);
    let err = store.put(c, Chunk::filled(1, Voxel::SOLID)).unwrap_err();
    assert_eq!(
        err,
        StoreError::ChunkSize {
            coord: c,
            expected: 2,
            actual: 1,
        }
    );
    assert!(store.is_empty());

    store.put(c, Chunk::filled(2, Voxel::SOLID)).unwrap();
    assert!(store.put(c, Chunk::new(3)).is_err());
    assert!(store.get(c).unwrap().is_full());

    let mut count = 0;
    store.for_each_occupied(|_, _| count += 1);
    assert_eq!(count, 8);
}
