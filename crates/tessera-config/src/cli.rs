//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, PreviewMode};

/// Terrain generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "tessera", about = "Procedural chunked terrain generator")]
pub struct CliArgs {
    /// Generation seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of noise octaves.
    #[arg(long, allow_negative_numbers = true)]
    pub octaves: Option<i32>,

    /// Noise scale.
    #[arg(long)]
    pub scale: Option<f32>,

    /// Amplitude decay per octave.
    #[arg(long)]
    pub persistence: Option<f32>,

    /// Frequency growth per octave.
    #[arg(long)]
    pub lacunarity: Option<f32>,

    /// Vertices per chunk edge (odd).
    #[arg(long)]
    pub mesh_resolution: Option<u32>,

    /// View distance in world units.
    #[arg(long, allow_negative_numbers = true)]
    pub map_size: Option<i32>,

    /// Mesh decimation level.
    #[arg(long, allow_negative_numbers = true)]
    pub detail_level: Option<i32>,

    /// Vertical mesh scale.
    #[arg(long)]
    pub height_multiplier: Option<f32>,

    /// Viewer world X.
    #[arg(long, allow_negative_numbers = true)]
    pub viewer_x: Option<f32>,

    /// Viewer world Z.
    #[arg(long, allow_negative_numbers = true)]
    pub viewer_y: Option<f32>,

    /// Directory for per-chunk PNG previews.
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Color map used for previews.
    #[arg(long, value_enum)]
    pub draw_mode: Option<PreviewMode>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        let terrain = &mut self.terrain;
        if let Some(seed) = args.seed {
            terrain.seed = seed;
        }
        if let Some(octaves) = args.octaves {
            terrain.octaves = octaves;
        }
        if let Some(scale) = args.scale {
            terrain.noise_scale = scale;
        }
        if let Some(persistence) = args.persistence {
            terrain.persistence = persistence;
        }
        if let Some(lacunarity) = args.lacunarity {
            terrain.lacunarity = lacunarity;
        }
        if let Some(resolution) = args.mesh_resolution {
            terrain.mesh_resolution = resolution;
        }
        if let Some(map_size) = args.map_size {
            terrain.map_size = map_size;
        }
        if let Some(detail) = args.detail_level {
            terrain.detail_level = detail;
        }
        if let Some(multiplier) = args.height_multiplier {
            terrain.height_multiplier = multiplier;
        }
        if let Some(x) = args.viewer_x {
            self.viewer.x = x;
        }
        if let Some(y) = args.viewer_y {
            self.viewer.y = y;
        }
        if let Some(ref dir) = args.export_dir {
            self.output.export_dir = Some(dir.clone());
        }
        if let Some(mode) = args.draw_mode {
            self.output.draw_mode = mode;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
