//! Procedural height fields: seeded multi-octave noise sampling and
//! height-threshold region colouring.

mod color;
mod grid;
mod noise_field;
mod regions;

pub use color::{ColorBuffer, DrawMode, Rgba, height_color_map};
pub use grid::HeightGrid;
pub use noise_field::{
    MIN_LACUNARITY, MIN_OCTAVES, NoiseParameters, OCTAVE_OFFSET_RANGE, generate_noise_map,
};
pub use regions::{RegionTable, TerrainRegion, classify};
