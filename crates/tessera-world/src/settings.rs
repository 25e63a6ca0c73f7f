//! Inputs for a terrain regeneration pass.

use tessera_terrain::{NoiseParameters, RegionTable, Rgba, TerrainRegion};

/// Everything a regeneration pass needs, passed explicitly to each call.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainSettings {
    /// Vertices per chunk edge. Odd, at least 3.
    pub mesh_resolution: usize,
    /// Maximum view distance, in world units, used to size the chunk square.
    pub map_size: i32,
    /// Noise configuration shared by every chunk; its offset is replaced per chunk.
    pub noise: NoiseParameters,
    /// Vertical scale applied to normalized heights.
    pub height_multiplier: f32,
    /// Mesh decimation level (0 = full resolution).
    pub detail_level: i32,
    /// Ordered classification rules.
    pub regions: RegionTable,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            mesh_resolution: 11,
            map_size: 30,
            noise: NoiseParameters::default(),
            height_multiplier: 5.0,
            detail_level: 0,
            regions: default_regions(),
        }
    }
}

impl TerrainSettings {
    /// World-space size of one chunk: one less than the vertices per edge.
    ///
    /// # Panics
    ///
    /// Panics if `mesh_resolution < 2`.
    pub fn chunk_size(&self) -> i32 {
        assert!(
            self.mesh_resolution >= 2,
            "mesh resolution must be at least 2, got {}",
            self.mesh_resolution
        );
        (self.mesh_resolution - 1) as i32
    }
}

/// Water, sand, grass, rock and snow bands.
pub fn default_regions() -> RegionTable {
    [
        TerrainRegion::new("water", 0.3, Rgba::new(0.20, 0.40, 0.80, 1.0)),
        TerrainRegion::new("sand", 0.4, Rgba::new(0.84, 0.80, 0.55, 1.0)),
        TerrainRegion::new("grass", 0.6, Rgba::new(0.34, 0.60, 0.20, 1.0)),
        TerrainRegion::new("rock", 0.8, Rgba::new(0.42, 0.36, 0.30, 1.0)),
        TerrainRegion::new("snow", 1.0, Rgba::new(0.95, 0.95, 0.95, 1.0)),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_size_is_resolution_minus_one() {
        let settings = TerrainSettings {
            mesh_resolution: 25,
            ..Default::default()
        };
        assert_eq!(settings.chunk_size(), 24);
    }

    #[test]
    #[should_panic]
    fn test_degenerate_resolution_panics() {
        let settings = TerrainSettings {
            mesh_resolution: 1,
            ..Default::default()
        };
        let _ = settings.chunk_size();
    }

    #[test]
    fn test_default_regions_ascend() {
        let regions = default_regions();
        assert_eq!(regions.len(), 5);
        assert!(regions.is_ascending());
    }
}
