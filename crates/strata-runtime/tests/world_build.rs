use proptest::prelude::*;
use strata_geom::Vec3;
use strata_mesh_cpu::ChunkMesh;
use strata_runtime::{BuildStep, WorldSession, build_world};
use strata_world::{
    AtlasLayout, BuildSettings, ChunkCoord, ConstantField, HeightMapField, NoiseSource,
    OccupancyField, Voxel,
};

/// Solid below a fixed world height.
struct Floor(f32);

impl OccupancyField for Floor {
    fn density(&self, p: Vec3) -> f32 {
        if p.y < self.0 { 1.0 } else { 0.0 }
    }
    fn sample(&self, p: Vec3) -> Voxel {
        Voxel::from_solid(p.y < self.0)
    }
    fn name(&self) -> &'static str {
        "floor"
    }
}

fn settings(dims: (i32, i32, i32), chunk_size: i32) -> BuildSettings {
    BuildSettings::new(dims, chunk_size, AtlasLayout::default()).unwrap()
}

fn heightmap(seed: i32) -> HeightMapField {
    HeightMapField::new(NoiseSource::new(seed, 0.0, 0.0), 0.1, 0.0, 4.0)
}

fn names(meshes: &[ChunkMesh]) -> Vec<&str> {
    meshes.iter().map(|m| m.name.as_str()).collect()
}

#[test]
fn empty_chunks_are_skipped_but_occluded_chunks_are_not() {
    let meshes = build_world(settings((1, 2, 1), 2), &Floor(2.0)).unwrap();
    assert_eq!(names(&meshes), ["chunk(0,0,0)"]);
    // Full 2x2x2 block under open air: every outer face is drawn.
    assert_eq!(meshes[0].build.face_count(), 24);

    let solid = build_world(settings((3, 3, 3), 2), &ConstantField::SOLID).unwrap();
    assert_eq!(solid.len(), 27);
    let center = solid
        .iter()
        .find(|m| m.coord == ChunkCoord::new(1, 1, 1))
        .unwrap();
    assert!(center.build.is_empty());
    assert_eq!(center.name, "chunk(1,1,1)");
}

#[test]
fn skip_enclosed_drops_the_buried_chunk() {
    let s = settings((3, 3, 3), 2).with_skip_enclosed(true);
    let meshes = build_world(s, &ConstantField::SOLID).unwrap();
    assert_eq!(meshes.len(), 26);
    assert!(meshes.iter().all(|m| m.coord != ChunkCoord::new(1, 1, 1)));
    assert!(meshes.iter().all(|m| !m.build.is_empty()));
}

#[test]
fn air_world_produces_nothing() {
    let meshes = build_world(settings((2, 2, 2), 3), &ConstantField::AIR).unwrap();
    assert!(meshes.is_empty());
}

#[test]
fn generation_finishes_before_meshing_starts() {
    let field = heightmap(1337);
    let mut session = WorldSession::new();
    let mut build = session.begin(settings((3, 1, 5), 4), &field);
    assert_eq!(build.progress(), (0, 30));

    let mut steps = Vec::new();
    let mut last_done = 0;
    while let Some(step) = build.step() {
        let (done, total) = build.progress();
        assert!(done > last_done && done <= total);
        last_done = done;
        steps.push(step.unwrap());
    }
    assert_eq!(build.progress(), (30, 30));
    assert!(build.is_finished());

    let first_mesh_phase = steps
        .iter()
        .position(|s| !matches!(s, BuildStep::Generated { .. }))
        .unwrap();
    assert_eq!(first_mesh_phase, 15);
    assert!(steps[15..].iter().all(|s| !matches!(s, BuildStep::Generated { .. })));

    let generated: Vec<ChunkCoord> = steps[..15]
        .iter()
        .map(|s| match s {
            BuildStep::Generated { coord, .. } => *coord,
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    let expected: Vec<ChunkCoord> = settings((3, 1, 5), 4).bounds().coords().collect();
    assert_eq!(generated, expected);
    assert_eq!(build.stats().generated, 15);
}

#[test]
fn stepped_and_iterated_builds_agree() {
    let field = heightmap(7);
    let s = settings((3, 2, 3), 4);
    let mut session = WorldSession::new();

    let mut stepped = Vec::new();
    let mut build = session.begin(s, &field);
    while let Some(step) = build.step() {
        if let BuildStep::Meshed(m) = step.unwrap() {
            stepped.push(m);
        }
    }
    let iterated: Vec<ChunkMesh> = session.begin(s, &field).collect::<Result<_, _>>().unwrap();

    assert_eq!(names(&stepped), names(&iterated));
    for (a, b) in stepped.iter().zip(&iterated) {
        assert_eq!(a.build, b.build);
        assert_eq!(a.bbox, b.bbox);
    }
}

#[test]
fn restarting_replaces_the_previous_world() {
    let mut session = WorldSession::new();
    let big = session
        .begin(settings((2, 2, 2), 2), &ConstantField::SOLID)
        .count();
    assert_eq!(big, 8);
    assert_eq!(session.store().len(), 8);

    let small: Vec<_> = session
        .begin(settings((1, 1, 1), 3), &ConstantField::SOLID)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(names(&small), ["chunk(0,0,0)"]);
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.store().chunk_size(), 3);

    session.clear();
    assert!(session.store().is_empty());
}

#[test]
fn dropping_a_build_keeps_emitted_meshes() {
    let mut session = WorldSession::new();
    let mut build = session.begin(settings((2, 1, 2), 2), &ConstantField::SOLID);
    let first = build.next().unwrap().unwrap();
    drop(build);
    assert_eq!(first.name, "chunk(0,0,0)");
    assert_eq!(session.store().len(), 4);
}

#[test]
fn dedicated_pool_matches_sequential() {
    let field = heightmap(99);
    let s = settings((3, 2, 3), 4);
    let sequential = build_world(s, &field).unwrap();
    let mut session = WorldSession::with_workers(2).unwrap();
    let parallel = session.build_parallel(s, &field).unwrap();
    assert_eq!(names(&sequential), names(&parallel));
    assert_eq!(session.store().len(), 18);
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 16, .. ProptestConfig::default() })]

    #[test]
    fn parallel_output_equals_sequential(
        seed in any::<i32>(),
        cx in 1i32..4, cy in 1i32..3, cz in 1i32..4,
        size in 1i32..6,
        skip in any::<bool>(),
    ) {
        let field = heightmap(seed);
        let s = settings((cx, cy, cz), size).with_skip_enclosed(skip);
        let sequential = build_world(s, &field).unwrap();
        let parallel = WorldSession::new().build_parallel(s, &field).unwrap();
        prop_assert_eq!(sequential.len(), parallel.len());
        for (a, b) in sequential.iter().zip(&parallel) {
            prop_assert_eq!(&a.name, &b.name);
            prop_assert_eq!(&a.build, &b.build);
        }
    }
}
