//! Integer positions on the chunk lattice.

use glam::{Vec2, Vec3};

/// Identifies a chunk's position on the chunk lattice.
///
/// The world-space origin of a chunk is `coord * chunk_size` on the X/Z plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    /// Lattice X coordinate.
    pub x: i32,
    /// Lattice Y coordinate (world Z).
    pub y: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate offset by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// 2-D world offset of this chunk, used as the noise sampling offset.
    pub fn world_offset(self, chunk_size: i32) -> Vec2 {
        Vec2::new((self.x * chunk_size) as f32, (self.y * chunk_size) as f32)
    }

    /// 3-D world position of the chunk's center, at height 0.
    pub fn world_position(self, chunk_size: i32) -> Vec3 {
        let offset = self.world_offset(chunk_size);
        Vec3::new(offset.x, 0.0, offset.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_offset_scales_by_chunk_size() {
        let coord = ChunkCoord::new(-2, 3);
        assert_eq!(coord.world_offset(10), Vec2::new(-20.0, 30.0));
        assert_eq!(coord.world_position(10), Vec3::new(-20.0, 0.0, 30.0));
    }

    #[test]
    fn test_offset() {
        assert_eq!(ChunkCoord::new(1, 1).offset(-1, 2), ChunkCoord::new(0, 3));
    }
}
