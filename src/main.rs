//! `strata`: builds a chunked voxel world from an occupancy field and reports the meshes.
#![forbid(unsafe_code)]

mod app;
mod scene;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use strata_world::FieldKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// One solid cube in a 1x1x1 world of chunk size 1.
    Cube,
    /// A single chunk of the configured field.
    Chunk,
    /// The full configured world.
    World,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FieldArg {
    Heightmap,
    Volumetric,
    Solid,
    Air,
}

impl From<FieldArg> for FieldKind {
    fn from(f: FieldArg) -> Self {
        match f {
            FieldArg::Heightmap => FieldKind::Heightmap,
            FieldArg::Volumetric => FieldKind::Volumetric,
            FieldArg::Solid => FieldKind::Solid,
            FieldArg::Air => FieldKind::Air,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "strata", version, about = "Chunked voxel world builder")]
pub struct Args {
    /// TOML config file; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Demo::World)]
    pub demo: Demo,

    #[arg(long)]
    pub chunks_x: Option<i32>,
    #[arg(long)]
    pub chunks_y: Option<i32>,
    #[arg(long)]
    pub chunks_z: Option<i32>,
    #[arg(long)]
    pub chunk_size: Option<i32>,

    #[arg(long)]
    pub seed: Option<i32>,
    #[arg(long, value_enum)]
    pub field: Option<FieldArg>,

    /// Units of build work per tick
    #[arg(long, default_value_t = 4)]
    pub steps_per_tick: usize,

    /// Build with worker threads instead of ticking
    #[arg(long)]
    pub parallel: bool,
    /// Worker threads for --parallel (0 = rayon default)
    #[arg(long, default_value_t = 0)]
    pub workers: usize,

    /// Skip chunks buried on all six sides
    #[arg(long)]
    pub skip_enclosed: bool,

    /// Log every occupied world cell after the build
    #[arg(long)]
    pub dump_occupied: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    app::run(&args)
}
