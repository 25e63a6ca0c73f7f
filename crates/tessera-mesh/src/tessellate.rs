//! Height grid to triangle mesh, with stride-based decimation.
//!
//! At detail level `N > 0` the tessellator visits every `2N`-th grid row and
//! column, producing a coarser lattice over the same footprint. The grid is
//! centered on the origin in the X/Z plane with height on +Y.

use glam::{Vec2, Vec3};
use tessera_terrain::HeightGrid;

use crate::mesh_buffers::MeshBuffers;

/// Grid stride for a detail level. Negative levels are treated as 0.
pub fn simplification_step(detail_level: i32) -> usize {
    match detail_level.max(0) as usize {
        0 => 1,
        level => level * 2,
    }
}

/// Number of vertices emitted along an edge of `size` samples at `step`.
///
/// # Panics
///
/// Panics if `step` or `size` is zero.
pub fn vertices_per_line(size: usize, step: usize) -> usize {
    assert!(step > 0, "tessellation step must be positive");
    assert!(size > 0, "grid edge must hold at least one sample");
    (size - 1) / step + 1
}

/// Tessellate `grid` into a mesh, scaling heights by `height_multiplier`.
///
/// The result holds `per_row * per_column` vertices and
/// `6 * (per_row - 1) * (per_column - 1)` indices, where each `per_*` is
/// [`vertices_per_line`] of the grid edge at the detail level's step.
///
/// # Panics
///
/// Panics if the grid is smaller than 2×2.
pub fn tessellate(grid: &HeightGrid, height_multiplier: f32, detail_level: i32) -> MeshBuffers {
    let (width, height) = grid.dimensions();
    assert!(
        width >= 2 && height >= 2,
        "tessellation needs at least a 2x2 grid, got {width}x{height}"
    );

    let step = simplification_step(detail_level);
    let per_row = vertices_per_line(width, step);
    let per_column = vertices_per_line(height, step);

    let left_x = (width - 1) as f32 / -2.0;
    let top_z = (height - 1) as f32 / 2.0;
    let row_stride = per_row as u32;

    let mut mesh = MeshBuffers::with_lattice(per_row, per_column);

    for row in 0..per_column {
        let y = row * step;
        for column in 0..per_row {
            let x = column * step;
            let i = mesh.vertices.len() as u32;

            mesh.vertices.push(Vec3::new(
                left_x + x as f32,
                grid.get(x, y) * height_multiplier,
                top_z - y as f32,
            ));
            mesh.uvs
                .push(Vec2::new(x as f32 / width as f32, y as f32 / height as f32));

            if column + 1 < per_row && row + 1 < per_column {
                mesh.add_triangle(i, i + row_stride + 1, i + row_stride);
                mesh.add_triangle(i, i + 1, i + row_stride + 1);
            }
        }
    }

    debug_assert_eq!(mesh.vertices.len(), per_row * per_column);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(size: usize) -> HeightGrid {
        HeightGrid::from_fn(size, size, |x, y| ((x + y) as f32 / (2 * size) as f32).min(1.0))
    }

    #[test]
    fn test_simplification_step() {
        assert_eq!(simplification_step(0), 1);
        assert_eq!(simplification_step(1), 2);
        assert_eq!(simplification_step(3), 6);
        assert_eq!(simplification_step(-4), 1, "Negative detail is treated as 0");
    }

    #[test]
    #[should_panic]
    fn test_zero_step_panics() {
        let _ = vertices_per_line(11, 0);
    }

    #[test]
    fn test_buffer_sizes_and_index_range() {
        for size in [5, 11, 25] {
            for detail in 0..=3 {
                let mesh = tessellate(&ramp(size), 10.0, detail);
                let per_edge = vertices_per_line(size, simplification_step(detail));

                assert_eq!(mesh.vertices_per_row, per_edge);
                assert_eq!(mesh.vertices.len(), per_edge * per_edge);
                assert_eq!(mesh.uvs.len(), mesh.vertices.len());
                assert_eq!(
                    mesh.triangles.len(),
                    6 * (per_edge - 1) * (per_edge - 1),
                    "size {size}, detail {detail}"
                );
                assert!(
                    mesh.triangles
                        .iter()
                        .all(|&i| (i as usize) < mesh.vertices.len()),
                    "Index out of range for size {size}, detail {detail}"
                );
            }
        }
    }

    #[test]
    fn test_decimation_strictly_coarser() {
        for size in [5, 11, 25] {
            let counts: Vec<usize> = (0..=3)
                .map(|d| tessellate(&ramp(size), 1.0, d).vertices_per_row)
                .collect();
            assert!(
                counts.windows(2).all(|w| w[1] < w[0]),
                "Vertices per row must strictly decrease for size {size}: {counts:?}"
            );
        }
    }

    #[test]
    fn test_decimation_keeps_extent() {
        // 24 is divisible by every step used for detail levels 0..=3.
        let grid = ramp(25);
        let (lo0, hi0) = tessellate(&grid, 0.0, 0).bounds().unwrap();
        assert_eq!((lo0.x, hi0.x), (-12.0, 12.0));
        assert_eq!((lo0.z, hi0.z), (-12.0, 12.0));

        for detail in 1..=3 {
            let (lo, hi) = tessellate(&grid, 0.0, detail).bounds().unwrap();
            assert_eq!((lo.x, lo.z), (lo0.x, lo0.z), "detail {detail}");
            assert_eq!((hi.x, hi.z), (hi0.x, hi0.z), "detail {detail}");
        }
    }

    #[test]
    fn test_vertex_placement_and_uv() {
        let grid = HeightGrid::from_values(3, 3, vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8]);
        let mesh = tessellate(&grid, 2.0, 0);

        assert_eq!(mesh.vertices[0], Vec3::new(-1.0, 0.0, 1.0));
        assert_eq!(mesh.vertices[2], Vec3::new(1.0, 0.4, 1.0));
        assert_eq!(mesh.vertices[4], Vec3::new(0.0, 0.8, 0.0));
        assert_eq!(mesh.vertices[8], Vec3::new(1.0, 1.6, -1.0));
        assert_eq!(mesh.uvs[5], Vec2::new(2.0 / 3.0, 1.0 / 3.0));
    }

    #[test]
    fn test_triangle_winding_order() {
        let grid = HeightGrid::from_values(2, 2, vec![0.0; 4]);
        let mesh = tessellate(&grid, 1.0, 0);
        assert_eq!(mesh.triangles, vec![0, 3, 2, 0, 1, 3]);
    }

    #[test]
    fn test_flat_grid_normals_face_up() {
        let grid = HeightGrid::from_values(5, 5, vec![0.5; 25]);
        let mesh = tessellate(&grid, 3.0, 0);
        for n in mesh.recalculate_normals() {
            assert!((n - Vec3::Y).length() < 1e-6, "Expected +Y normal, got {n}");
        }
    }

    #[test]
    fn test_uneven_step_indices_stay_in_range() {
        // 10 is not divisible by 4: the lattice stops short of the far edge.
        let mesh = tessellate(&ramp(11), 1.0, 2);
        assert_eq!(mesh.vertices_per_row, 3);
        assert_eq!(mesh.triangle_count(), 8);
        assert!(mesh.triangles.iter().all(|&i| i < 9));
    }

    #[test]
    #[should_panic]
    fn test_single_sample_grid_panics() {
        let _ = tessellate(&HeightGrid::from_values(1, 1, vec![0.0]), 1.0, 0);
    }
}
