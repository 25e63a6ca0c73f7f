//! Colors and per-cell color buffers built from height grids.

use crate::grid::HeightGrid;
use crate::regions::{RegionTable, classify};

/// Linear RGBA color with `f32` components in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black; the color of unclassified cells.
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Component-wise linear interpolation, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// 8-bit RGBA, each component clamped to `[0, 1]` and rounded.
    pub fn to_rgba8(self) -> [u8; 4] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

impl From<[f32; 4]> for Rgba {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// One color per height-grid cell, row-major (`index = y * width + x`).
#[derive(Clone, Debug, PartialEq)]
pub struct ColorBuffer {
    width: usize,
    height: usize,
    colors: Vec<Rgba>,
}

impl ColorBuffer {
    /// Wrap a row-major color list.
    ///
    /// # Panics
    ///
    /// Panics if `colors.len() != width * height`.
    pub fn from_colors(width: usize, height: usize, colors: Vec<Rgba>) -> Self {
        assert_eq!(
            colors.len(),
            width * height,
            "color buffer must hold width * height colors"
        );
        Self {
            width,
            height,
            colors,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Color at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        assert!(x < self.width && y < self.height, "color buffer access out of bounds");
        self.colors[y * self.width + x]
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Packed 8-bit RGBA pixels, `width * height * 4` bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| c.to_rgba8()).collect()
    }
}

/// Which color buffer a preview is built from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawMode {
    /// Region colors from the classification table.
    #[default]
    ColorMap,
    /// Grayscale, white at height 0 fading to black at height 1.
    HeightMap,
}

impl DrawMode {
    /// Build the color buffer for `grid` in this mode.
    pub fn render(self, grid: &HeightGrid, regions: &RegionTable) -> ColorBuffer {
        match self {
            Self::ColorMap => classify(grid, regions),
            Self::HeightMap => height_color_map(grid),
        }
    }
}

/// Grayscale preview of a height grid.
pub fn height_color_map(grid: &HeightGrid) -> ColorBuffer {
    let colors = grid
        .values()
        .iter()
        .map(|&h| Rgba::WHITE.lerp(Rgba::BLACK, h))
        .collect();
    ColorBuffer::from_colors(grid.width(), grid.height(), colors)
}
