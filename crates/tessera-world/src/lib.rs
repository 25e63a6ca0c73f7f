//! Chunked terrain around a viewer: visible chunk layout, per-chunk
//! generation, and full-rebuild regeneration.

mod chunk;
mod coord;
mod layout;
mod root;
mod settings;

pub use chunk::TerrainChunk;
pub use coord::ChunkCoord;
pub use layout::{layout, viewer_chunk, visible_radius};
pub use root::TerrainRoot;
pub use settings::{TerrainSettings, default_regions};
