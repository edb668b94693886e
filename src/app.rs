use std::error::Error;
use std::time::Instant;

use strata_chunk::ChunkStore;
use strata_mesh_cpu::MeshError;
use strata_runtime::{BuildStep, WorldSession};
use strata_world::{BuildSettings, FieldKind, OccupancyField, StrataConfig};

use crate::scene::Scene;
use crate::{Args, Demo};

pub fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut cfg = match &args.config {
        Some(path) => StrataConfig::from_path(path)?,
        None => StrataConfig::default(),
    };
    apply_overrides(&mut cfg, args);

    let settings = cfg.settings()?;
    let field = cfg.field.build()?;
    let bounds = settings.bounds();
    log::info!(
        "demo {:?}: {} chunks of {}^3, field {}",
        args.demo,
        bounds.chunk_count(),
        settings.chunk_size(),
        field.name()
    );

    let mut session = if args.parallel && args.workers > 0 {
        WorldSession::with_workers(args.workers)?
    } else {
        WorldSession::new()
    };
    let mut scene = Scene::new();

    let t0 = Instant::now();
    if args.parallel {
        for mesh in session.build_parallel(settings, field.as_ref())? {
            scene.attach(mesh);
        }
    } else {
        tick_build(
            &mut session,
            settings,
            field.as_ref(),
            args.steps_per_tick.max(1),
            &mut scene,
        )?;
    }
    log::info!(
        "scene: {} meshes, {} faces, {} vertices in {}ms",
        scene.len(),
        scene.face_count(),
        scene.vertex_count(),
        t0.elapsed().as_millis()
    );
    for mesh in scene.iter() {
        log::debug!(
            "{}: {} faces, bbox {:?}..{:?}",
            mesh.name,
            mesh.build.face_count(),
            mesh.bbox.min,
            mesh.bbox.max
        );
    }

    if args.dump_occupied {
        dump_occupied(session.store());
    }
    scene.clear();
    Ok(())
}

fn apply_overrides(cfg: &mut StrataConfig, args: &Args) {
    let w = &mut cfg.world;
    if let Some(v) = args.chunks_x {
        w.chunks_x = v;
    }
    if let Some(v) = args.chunks_y {
        w.chunks_y = v;
    }
    if let Some(v) = args.chunks_z {
        w.chunks_z = v;
    }
    if let Some(v) = args.chunk_size {
        w.chunk_size = v;
    }
    w.skip_enclosed |= args.skip_enclosed;
    if let Some(seed) = args.seed {
        cfg.field.seed = seed;
    }
    if let Some(kind) = args.field {
        cfg.field.kind = kind.into();
    }

    match args.demo {
        Demo::Cube => {
            (w.chunks_x, w.chunks_y, w.chunks_z) = (1, 1, 1);
            w.chunk_size = 1;
            cfg.field.kind = FieldKind::Solid;
        }
        Demo::Chunk => {
            (w.chunks_x, w.chunks_y, w.chunks_z) = (1, 1, 1);
        }
        Demo::World => {}
    }
}

/// Drives a stepped build, `steps_per_tick` units at a time, attaching meshes as they land.
fn tick_build(
    session: &mut WorldSession,
    settings: BuildSettings,
    field: &dyn OccupancyField,
    steps_per_tick: usize,
    scene: &mut Scene,
) -> Result<(), MeshError> {
    scene.clear();
    let mut build = session.begin(settings, field);
    let mut tick = 0usize;
    while !build.is_finished() {
        tick += 1;
        let mut attached = 0usize;
        for _ in 0..steps_per_tick {
            match build.step() {
                Some(Ok(BuildStep::Meshed(mesh))) => {
                    scene.attach(mesh);
                    attached += 1;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            }
        }
        let (done, total) = build.progress();
        log::debug!(target: "build", "tick {tick}: {done}/{total}, {attached} meshes attached");
    }
    let s = build.stats();
    log::info!(
        target: "build",
        "{tick} ticks: gen {}ms, mesh {}ms",
        s.gen_us / 1000,
        s.mesh_us / 1000
    );
    Ok(())
}

fn dump_occupied(store: &ChunkStore) {
    let mut count = 0usize;
    store.for_each_occupied(|p, _| {
        count += 1;
        log::trace!(target: "dump", "occupied {} {} {}", p.x, p.y, p.z);
    });
    log::info!(target: "dump", "{count} occupied cells");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn overridden(file: &str, argv: &[&str]) -> StrataConfig {
        let mut cfg = StrataConfig::from_toml_str(file).unwrap();
        let args = Args::parse_from(std::iter::once("strata").chain(argv.iter().copied()));
        apply_overrides(&mut cfg, &args);
        cfg
    }

    const FILE: &str = r#"
        [world]
        chunks_x = 4
        chunks_y = 2
        chunks_z = 6
        chunk_size = 8

        [field]
        kind = "volumetric"
        seed = 5
    "#;

    #[test]
    fn flags_override_the_file() {
        let cfg = overridden(
            FILE,
            &["--chunks-x", "2", "--chunk-size", "3", "--seed", "9", "--field", "air", "--skip-enclosed"],
        );
        let w = &cfg.world;
        assert_eq!((w.chunks_x, w.chunks_y, w.chunks_z, w.chunk_size), (2, 2, 6, 3));
        assert!(w.skip_enclosed);
        assert_eq!(cfg.field.seed, 9);
        assert_eq!(cfg.field.kind, FieldKind::Air);
    }

    #[test]
    fn file_values_stand_without_flags() {
        let cfg = overridden(FILE, &[]);
        let w = &cfg.world;
        assert_eq!((w.chunks_x, w.chunks_y, w.chunks_z, w.chunk_size), (4, 2, 6, 8));
        assert!(!w.skip_enclosed);
        assert_eq!(cfg.field.kind, FieldKind::Volumetric);
    }

    #[test]
    fn cube_demo_forces_one_solid_cell() {
        let cfg = overridden(FILE, &["--demo", "cube", "--chunk-size", "5", "--field", "air"]);
        let w = &cfg.world;
        assert_eq!((w.chunks_x, w.chunks_y, w.chunks_z, w.chunk_size), (1, 1, 1, 1));
        assert_eq!(cfg.field.kind, FieldKind::Solid);
        let settings = cfg.settings().unwrap();
        assert_eq!(settings.bounds().chunk_count(), 1);
    }

    #[test]
    fn chunk_demo_forces_one_chunk_but_keeps_size_and_field() {
        let cfg = overridden(FILE, &["--demo", "chunk", "--chunks-x", "7"]);
        let w = &cfg.world;
        assert_eq!((w.chunks_x, w.chunks_y, w.chunks_z), (1, 1, 1));
        assert_eq!(w.chunk_size, 8);
        assert_eq!(cfg.field.kind, FieldKind::Volumetric);
    }
}
