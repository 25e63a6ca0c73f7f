//! Multi-octave fractal noise sampled onto a height grid.
//!
//! Each octave samples gradient noise at a per-octave random offset, with
//! frequency growing by `lacunarity` and amplitude shrinking by `persistence`.
//! The accumulated value is normalized against the theoretical maximum
//! amplitude so that chunks sampled at different offsets share one value range.

use glam::{DVec2, Vec2};
use noise::{NoiseFn, Perlin};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::grid::HeightGrid;

/// Smallest accepted octave count; lower values are raised to it.
pub const MIN_OCTAVES: i32 = 1;

/// Smallest accepted lacunarity; lower values are raised to it.
pub const MIN_LACUNARITY: f32 = 1.0;

/// Per-octave offsets are drawn from `[-OCTAVE_OFFSET_RANGE, OCTAVE_OFFSET_RANGE)`.
pub const OCTAVE_OFFSET_RANGE: i32 = 10_000;

/// Configuration for fractal noise generation.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseParameters {
    /// Seed for the per-octave offset generator and the gradient noise table.
    pub seed: u64,
    /// Number of noise layers to sum. Values below [`MIN_OCTAVES`] are clamped.
    pub octaves: i32,
    /// Amplitude multiplier between successive octaves, in `(0, 1]`.
    pub persistence: f32,
    /// Frequency multiplier between successive octaves. Values below
    /// [`MIN_LACUNARITY`] are clamped.
    pub lacunarity: f32,
    /// Spatial scale of the noise relative to the grid size.
    pub scale: f32,
    /// World-space offset of the sampled window.
    pub offset: Vec2,
}

impl Default for NoiseParameters {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            scale: 25.0,
            offset: Vec2::ZERO,
        }
    }
}

impl NoiseParameters {
    /// Clamp `octaves` and `lacunarity` up to their minimum valid values.
    pub fn validated(mut self) -> Self {
        if self.octaves < MIN_OCTAVES {
            tracing::debug!(octaves = self.octaves, "raising octaves to minimum");
            self.octaves = MIN_OCTAVES;
        }
        if self.lacunarity.is_nan() || self.lacunarity < MIN_LACUNARITY {
            tracing::debug!(lacunarity = self.lacunarity, "raising lacunarity to minimum");
            self.lacunarity = MIN_LACUNARITY;
        }
        self
    }

    /// Copy of these parameters sampling a different window.
    pub fn with_offset(&self, offset: Vec2) -> Self {
        Self {
            offset,
            ..self.clone()
        }
    }

    /// Theoretical maximum summed amplitude, `sum(persistence^i)` over all octaves.
    pub fn max_possible_height(&self) -> f64 {
        let persistence = f64::from(self.persistence);
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        for _ in 0..self.octaves.max(MIN_OCTAVES) {
            sum += amplitude;
            amplitude *= persistence;
        }
        sum
    }
}

/// Generate a `width × height` grid of fractal noise normalized to `[0, 1]`.
///
/// Identical inputs always produce a bit-identical grid.
///
/// # Panics
///
/// Panics if `width` or `height` is zero.
pub fn generate_noise_map(width: usize, height: usize, params: &NoiseParameters) -> HeightGrid {
    assert!(
        width > 0 && height > 0,
        "noise map dimensions must be non-zero, got {width}x{height}"
    );

    let params = params.clone().validated();
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    let perlin = Perlin::new(params.seed as u32);

    let persistence = f64::from(params.persistence);
    let lacunarity = f64::from(params.lacunarity);
    let max_possible_height = params.max_possible_height();

    let octave_offsets: Vec<DVec2> = (0..params.octaves)
        .map(|_| {
            let x = rng.random_range(-OCTAVE_OFFSET_RANGE..OCTAVE_OFFSET_RANGE);
            let y = rng.random_range(-OCTAVE_OFFSET_RANGE..OCTAVE_OFFSET_RANGE);
            // Y runs opposite to the world axis in sample space.
            DVec2::new(
                f64::from(x) + f64::from(params.offset.x),
                f64::from(y) - f64::from(params.offset.y),
            )
        })
        .collect();

    let scale = f64::from(effective_scale(params.scale, width.min(height)));
    let (w, h) = (width as f64, height as f64);
    let half_w = (width / 2) as f64;
    let half_h = (height / 2) as f64;

    HeightGrid::from_fn(width, height, |x, y| {
        let mut raw = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;

        for offset in &octave_offsets {
            let sample_x = (x as f64 - half_w + offset.x) / w * scale * frequency;
            let sample_y = (y as f64 - half_h + offset.y) / h * scale * frequency;
            raw += (gradient_noise(&perlin, sample_x, sample_y) * 2.0 - 1.0) * amplitude;

            amplitude *= persistence;
            frequency *= lacunarity;
        }

        ((raw + 1.0) / (2.0 * max_possible_height)).clamp(0.0, 1.0) as f32
    })
}

/// Gradient noise remapped from `[-1, 1]` to `[0, 1]`.
#[inline]
fn gradient_noise(perlin: &Perlin, x: f64, y: f64) -> f64 {
    (perlin.get([x, y]) + 1.0) * 0.5
}

/// A scale that is an exact multiple of the grid size lands every sample on
/// integer lattice points, where gradient noise is constant.
fn effective_scale(scale: f32, grid_size: usize) -> f32 {
    if scale % grid_size as f32 == 0.0 {
        tracing::debug!(scale, grid_size, "bumping degenerate noise scale");
        scale + 1.0
    } else {
        scale
    }
}
