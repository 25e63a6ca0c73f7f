//! Command-line terrain generator.
//!
//! Loads `config.ron` (created with defaults on first run), applies CLI
//! overrides, regenerates the chunk square around the viewer and optionally
//! writes a PNG preview per chunk.
//! Run with `cargo run -p tessera-app -- --seed 42 --export-dir previews`.

mod error;
mod export;
mod settings;

use std::process::ExitCode;

use clap::Parser;
use glam::Vec2;
use tessera_config::{CliArgs, Config, default_config_dir};
use tessera_world::TerrainRoot;
use tracing::info;

use crate::error::AppError;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("tessera: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .ok_or(AppError::NoConfigDir)?;

    let mut config = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(args);

    tessera_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );
    config.validate()?;

    let terrain = settings::terrain_settings(&config.terrain);
    let viewer = Vec2::new(config.viewer.x, config.viewer.y);
    info!(
        seed = terrain.noise.seed,
        mesh_resolution = terrain.mesh_resolution,
        map_size = terrain.map_size,
        detail_level = terrain.detail_level,
        "generating terrain around ({}, {})",
        viewer.x,
        viewer.y
    );

    let mut root = TerrainRoot::new();
    root.regenerate(&terrain, viewer);

    for chunk in root.chunks() {
        let (lo, hi) = chunk.heights.min_max().unwrap_or_default();
        info!(
            x = chunk.coord.x,
            y = chunk.coord.y,
            vertices = chunk.mesh.vertices.len(),
            triangles = chunk.mesh.triangle_count(),
            "chunk at {} height range [{lo:.3}, {hi:.3}]",
            chunk.world_position
        );
    }

    if let Some(dir) = &config.output.export_dir {
        let mode = settings::draw_mode(config.output.draw_mode);
        let written = export::write_previews(dir, root.chunks(), &terrain.regions, mode)?;
        info!("wrote {} previews to {}", written.len(), dir.display());
    }

    println!(
        "generated {} chunks covering {}x{} world units",
        root.len(),
        root.extent(),
        root.extent()
    );
    Ok(())
}
