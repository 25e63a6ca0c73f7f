//! Owner of the current chunk set.
//!
//! Every regeneration is a full rebuild: the previous chunks are dropped
//! before any new chunk is generated, so old and new sets never coexist.

use std::time::Instant;

use glam::Vec2;
use rustc_hash::FxHashMap;

use crate::chunk::TerrainChunk;
use crate::coord::ChunkCoord;
use crate::layout::{layout, visible_radius};
use crate::settings::TerrainSettings;

/// Holds the chunks of the most recent regeneration pass, in layout order.
#[derive(Debug, Default)]
pub struct TerrainRoot {
    chunks: Vec<TerrainChunk>,
    index: FxHashMap<ChunkCoord, usize>,
    generation: u64,
    extent: i32,
}

impl TerrainRoot {
    /// Creates a root with no chunks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every chunk. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.chunks.len();
        self.chunks.clear();
        self.index.clear();
        self.extent = 0;
        removed
    }

    /// Destroy all chunks and build one per visible coordinate around `viewer`.
    ///
    /// Chunks are generated sequentially in row-major layout order.
    ///
    /// # Panics
    ///
    /// Panics if `settings.mesh_resolution < 2`.
    pub fn regenerate(&mut self, settings: &TerrainSettings, viewer: Vec2) -> &[TerrainChunk] {
        let start = Instant::now();
        let removed = self.clear();

        let chunk_size = settings.chunk_size();
        let coords = layout(viewer, chunk_size, settings.map_size);
        self.chunks.reserve(coords.len());

        for coord in coords {
            let chunk = TerrainChunk::generate(coord, settings);
            tracing::debug!(
                x = coord.x,
                y = coord.y,
                vertices = chunk.mesh.vertices.len(),
                triangles = chunk.mesh.triangle_count(),
                "generated terrain chunk"
            );
            self.index.insert(coord, self.chunks.len());
            self.chunks.push(chunk);
        }

        if !self.chunks.is_empty() {
            let radius = visible_radius(chunk_size, settings.map_size);
            self.extent = (2 * radius + 1) * chunk_size;
        }
        self.generation += 1;

        tracing::info!(
            generation = self.generation,
            chunks = self.chunks.len(),
            removed,
            extent = self.extent,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "terrain regenerated"
        );

        &self.chunks
    }

    /// Chunks of the latest pass, in layout order.
    pub fn chunks(&self) -> &[TerrainChunk] {
        &self.chunks
    }

    /// The chunk at `coord`, if it was part of the latest pass.
    pub fn chunk_at(&self, coord: ChunkCoord) -> Option<&TerrainChunk> {
        self.index.get(&coord).map(|&i| &self.chunks[i])
    }

    /// Number of live chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns `true` if no chunks are live.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Number of completed regeneration passes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Side length of the laid-out chunk square in world units.
    pub fn extent(&self) -> i32 {
        self.extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> TerrainSettings {
        TerrainSettings {
            mesh_resolution: 11,
            map_size: 25,
            ..Default::default()
        }
    }

    #[test]
    fn test_regenerate_builds_one_chunk_per_coordinate() {
        let mut root = TerrainRoot::new();
        let chunks = root.regenerate(&settings(), Vec2::ZERO);
        assert_eq!(chunks.len(), 25);
        assert_eq!(chunks[0].coord, ChunkCoord::new(-2, -2));
        assert_eq!(chunks[24].coord, ChunkCoord::new(2, 2));
        assert_eq!(root.extent(), 50);
        assert_eq!(root.generation(), 1);
    }

    #[test]
    fn test_full_rebuild_is_identical_and_leaves_nothing_behind() {
        let mut root = TerrainRoot::new();
        let first = root.regenerate(&settings(), Vec2::ZERO).to_vec();
        let second = root.regenerate(&settings(), Vec2::ZERO).to_vec();

        assert_eq!(root.len(), 25, "No chunks from the first pass may survive");
        assert_eq!(root.generation(), 2);
        assert_eq!(first, second, "Rebuild with identical inputs must be bit-identical");
    }

    #[test]
    fn test_moving_viewer_replaces_chunk_set() {
        let mut root = TerrainRoot::new();
        root.regenerate(&settings(), Vec2::ZERO);
        root.regenerate(&settings(), Vec2::new(100.0, 0.0));

        assert_eq!(root.len(), 25);
        assert!(root.chunk_at(ChunkCoord::new(0, 0)).is_none());
        assert!(root.chunk_at(ChunkCoord::new(10, 0)).is_some());
    }

    #[test]
    fn test_chunk_at_matches_position() {
        let mut root = TerrainRoot::new();
        root.regenerate(&settings(), Vec2::ZERO);
        let chunk = root.chunk_at(ChunkCoord::new(1, 2)).unwrap();
        assert_eq!(chunk.coord, ChunkCoord::new(1, 2));
        assert_eq!(chunk.world_position, glam::Vec3::new(10.0, 0.0, 20.0));
    }

    #[test]
    fn test_chunks_differ_by_offset() {
        let mut root = TerrainRoot::new();
        root.regenerate(&settings(), Vec2::ZERO);
        let a = root.chunk_at(ChunkCoord::new(0, 0)).unwrap();
        let b = root.chunk_at(ChunkCoord::new(1, 0)).unwrap();
        assert_ne!(a.heights, b.heights);
    }

    #[test]
    fn test_clear_empties_root() {
        let mut root = TerrainRoot::new();
        root.regenerate(&settings(), Vec2::ZERO);
        assert_eq!(root.clear(), 25);
        assert!(root.is_empty());
        assert_eq!(root.extent(), 0);
        assert!(root.chunk_at(ChunkCoord::new(0, 0)).is_none());
    }

    #[test]
    fn test_negative_map_size_truncates_toward_zero() {
        let mut root = TerrainRoot::new();
        let tiny = TerrainSettings {
            map_size: -1,
            ..settings()
        };
        root.regenerate(&settings(), Vec2::ZERO);
        // -1 / 10 truncates to 0, still one chunk.
        assert_eq!(root.regenerate(&tiny, Vec2::ZERO).len(), 1);

        let none = TerrainSettings {
            map_size: -10,
            ..settings()
        };
        assert!(root.regenerate(&none, Vec2::ZERO).is_empty());
        assert_eq!(root.extent(), 0);
    }
}
