//! Row-major 2-D grid of normalized height samples.

/// A `width × height` array of height samples stored row-major
/// (`index = y * width + x`).
///
/// Grids produced by [`generate_noise_map`](crate::generate_noise_map) hold
/// values in `[0, 1]`. A grid is immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightGrid {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl HeightGrid {
    /// Wrap an existing row-major buffer.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != width * height`.
    pub fn from_values(width: usize, height: usize, values: Vec<f32>) -> Self {
        assert_eq!(
            values.len(),
            width * height,
            "height grid buffer must hold width * height samples"
        );
        Self {
            width,
            height,
            values,
        }
    }

    /// Build a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut values = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                values.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            values,
        }
    }

    /// Number of samples along X.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of samples along Y.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        assert!(
            x < self.width && y < self.height,
            "height grid access out of bounds: ({x}, {y}) in {}x{}",
            self.width,
            self.height
        );
        self.values[y * self.width + x]
    }

    /// All samples in row-major order.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Smallest and largest sample, or `None` for an empty grid.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        self.values.iter().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}
