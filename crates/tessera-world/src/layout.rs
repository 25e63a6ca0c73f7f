//! Which chunk coordinates are visible around a viewer.
//!
//! Visibility is a square of `(2r + 1)^2` chunks centered on the viewer's
//! chunk, not a true distance test.

use glam::Vec2;

use crate::coord::ChunkCoord;

/// Number of chunks visible on each side of the viewer's chunk.
///
/// Truncating integer division; negative when `max_view_distance` is negative.
///
/// # Panics
///
/// Panics if `chunk_size` is not positive.
pub fn visible_radius(chunk_size: i32, max_view_distance: i32) -> i32 {
    assert!(chunk_size > 0, "chunk size must be positive, got {chunk_size}");
    max_view_distance / chunk_size
}

/// The chunk containing `viewer`, rounding half to even on each axis.
///
/// # Panics
///
/// Panics if `chunk_size` is not positive.
pub fn viewer_chunk(viewer: Vec2, chunk_size: i32) -> ChunkCoord {
    assert!(chunk_size > 0, "chunk size must be positive, got {chunk_size}");
    let size = chunk_size as f32;
    ChunkCoord::new(
        (viewer.x / size).round_ties_even() as i32,
        (viewer.y / size).round_ties_even() as i32,
    )
}

/// All visible chunk coordinates, row-major (`dy` outer, `dx` inner).
///
/// # Panics
///
/// Panics if `chunk_size` is not positive.
pub fn layout(viewer: Vec2, chunk_size: i32, max_view_distance: i32) -> Vec<ChunkCoord> {
    let radius = visible_radius(chunk_size, max_view_distance);
    let center = viewer_chunk(viewer, chunk_size);

    let side = (2 * radius + 1).max(0) as usize;
    let mut coords = Vec::with_capacity(side * side);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            coords.push(center.offset(dx, dy));
        }
    }
    coords
}
