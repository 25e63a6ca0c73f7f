//! One generated terrain tile.

use glam::Vec3;
use tessera_mesh::{MeshBuffers, tessellate};
use tessera_terrain::{ColorBuffer, HeightGrid, classify, generate_noise_map};

use crate::coord::ChunkCoord;
use crate::settings::TerrainSettings;

/// A generated chunk: its lattice position, height samples, region colors and
/// mesh. Plain data; rendering and collision objects are built from it
/// elsewhere.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainChunk {
    /// Position on the chunk lattice.
    pub coord: ChunkCoord,
    /// World-space placement, `(offset.x, 0, offset.y)`.
    pub world_position: Vec3,
    /// Normalized height samples the mesh and colors were built from.
    pub heights: HeightGrid,
    /// Region color per height sample.
    pub colors: ColorBuffer,
    /// Tessellated surface in chunk-local space.
    pub mesh: MeshBuffers,
}

impl TerrainChunk {
    /// Run noise, classification and tessellation for the chunk at `coord`.
    pub fn generate(coord: ChunkCoord, settings: &TerrainSettings) -> Self {
        let chunk_size = settings.chunk_size();
        let resolution = settings.mesh_resolution;

        let noise = settings.noise.with_offset(coord.world_offset(chunk_size));
        let heights = generate_noise_map(resolution, resolution, &noise);
        let colors = classify(&heights, &settings.regions);
        let mesh = tessellate(&heights, settings.height_multiplier, settings.detail_level);

        Self {
            coord,
            world_position: coord.world_position(chunk_size),
            heights,
            colors,
            mesh,
        }
    }
}
