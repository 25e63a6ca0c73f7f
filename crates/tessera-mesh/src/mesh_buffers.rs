//! Vertex, UV and index buffers produced by heightmap tessellation.

use glam::{Vec2, Vec3};

/// The mesh output of a tessellation pass.
///
/// Holds one vertex and one UV per visited grid sample, and three indices per
/// triangle. Normals are not stored; see [`MeshBuffers::recalculate_normals`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions in chunk-local space, row-major.
    pub vertices: Vec<Vec3>,
    /// Texture coordinates, parallel to `vertices`.
    pub uvs: Vec<Vec2>,
    /// Index buffer (triangles, 3 indices per triangle).
    pub triangles: Vec<u32>,
    /// Number of vertices in each emitted row.
    pub vertices_per_row: usize,
}

impl MeshBuffers {
    /// Creates empty buffers sized for a `per_row × per_column` vertex lattice.
    pub fn with_lattice(per_row: usize, per_column: usize) -> Self {
        let quads = per_row.saturating_sub(1) * per_column.saturating_sub(1);
        Self {
            vertices: Vec::with_capacity(per_row * per_column),
            uvs: Vec::with_capacity(per_row * per_column),
            triangles: Vec::with_capacity(quads * 6),
            vertices_per_row: per_row,
        }
    }

    /// Appends one triangle.
    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.extend_from_slice(&[a, b, c]);
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Axis-aligned `(min, max)` corners of all vertices, or `None` if empty.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }

    /// Per-vertex normals from the triangle winding.
    ///
    /// Each vertex accumulates the area-weighted face normals of the triangles
    /// that use it. Vertices touched by no (or only degenerate) triangles get +Y.
    pub fn recalculate_normals(&self) -> Vec<Vec3> {
        let mut normals = vec![Vec3::ZERO; self.vertices.len()];

        for tri in self.triangles.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let (pa, pb, pc) = (self.vertices[a], self.vertices[b], self.vertices[c]);
            let face = (pb - pa).cross(pc - pa);
            normals[a] += face;
            normals[b] += face;
            normals[c] += face;
        }

        normals
            .into_iter()
            .map(|n| n.try_normalize().unwrap_or(Vec3::Y))
            .collect()
    }
}
