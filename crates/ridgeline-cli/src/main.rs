//! Ridgeline binary: generate a heightfield and write preview images.
//!
//! Configuration is loaded from a RON file (`--config`) and can be
//! overridden via CLI flags. Run with `cargo run -p ridgeline-cli` for the
//! default dunes terrain, or e.g.
//! `cargo run -p ridgeline-cli -- --preset kryptonite --seed 7`.

mod logging;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::{error, info};

use ridgeline_config::{CliArgs, Config, ConfigError};
use ridgeline_heightfield::{
    Grid, HeightfieldError, PresetRegistry, generate_parallel,
};
use ridgeline_mesh::{MeshError, TerrainMesh};
use ridgeline_noise::SimplexField;
use ridgeline_viz::{PreviewError, render_colors, render_elevation, write_png};

/// Everything that can stop a generation run.
#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Heightfield(#[from] HeightfieldError),
    #[error(transparent)]
    Mesh(#[from] MeshError),
    #[error(transparent)]
    Preview(#[from] PreviewError),
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init(args.log_level.as_deref());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), RunError> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_cli_overrides(args);

    let registry = PresetRegistry::builtin();
    let preset = registry.resolve(&config.preset)?;
    let shape = config.shape.clone().unwrap_or_else(|| preset.shape.clone());
    let palette = config.palette.unwrap_or(preset.palette);

    let grid = Grid::new(config.grid.size, config.grid.resolution)?;
    let field = SimplexField::new(config.seed);

    info!(
        seed = config.seed,
        preset = %config.preset,
        size = grid.size(),
        resolution = grid.resolution(),
        "generating heightfield"
    );
    let start = Instant::now();
    let buffers = generate_parallel(&grid, &field, &shape, &palette, config.threads)?;
    info!(
        vertices = buffers.vertex_count(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "generation finished"
    );

    let mesh = TerrainMesh::build(&buffers, &grid)?;
    let (min_elevation, max_elevation) = buffers.elevation_bounds();
    info!(
        indices = mesh.index_count(),
        min_elevation,
        max_elevation,
        "mesh built"
    );

    write_png(&render_elevation(&buffers, &grid), &config.output.elevation_png)?;
    write_png(&render_colors(&buffers, &grid), &config.output.color_png)?;
    info!(
        elevation = %config.output.elevation_png.display(),
        colors = %config.output.color_png.display(),
        "previews written"
    );

    Ok(())
}
