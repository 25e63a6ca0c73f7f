//! Heightmap tessellation: converts height grids into indexed triangle meshes
//! with selectable decimation.

pub mod mesh_buffers;
pub mod tessellate;

pub use mesh_buffers::MeshBuffers;
pub use tessellate::{simplification_step, tessellate, vertices_per_line};
