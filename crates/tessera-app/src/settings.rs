//! Conversion from loaded configuration to generation settings.

use tessera_config::{PreviewMode, TerrainConfig};
use tessera_terrain::{DrawMode, NoiseParameters, RegionTable, Rgba, TerrainRegion};
use tessera_world::TerrainSettings;

/// Build generation settings from the `terrain` config section.
///
/// The config must already have passed `Config::validate`.
pub fn terrain_settings(config: &TerrainConfig) -> TerrainSettings {
    let regions: RegionTable = config
        .regions
        .iter()
        .map(|r| TerrainRegion::new(r.name.clone(), r.height, Rgba::from(r.color)))
        .collect();

    TerrainSettings {
        mesh_resolution: config.mesh_resolution as usize,
        map_size: config.map_size,
        noise: NoiseParameters {
            seed: config.seed,
            octaves: config.octaves,
            persistence: config.persistence,
            lacunarity: config.lacunarity,
            scale: config.noise_scale,
            ..Default::default()
        }
        .validated(),
        height_multiplier: config.height_multiplier,
        detail_level: config.detail_level,
        regions,
    }
}

/// Preview mode to the terrain crate's draw mode.
pub fn draw_mode(mode: PreviewMode) -> DrawMode {
    match mode {
        PreviewMode::ColorMap => DrawMode::ColorMap,
        PreviewMode::HeightMap => DrawMode::HeightMap,
    }
}
