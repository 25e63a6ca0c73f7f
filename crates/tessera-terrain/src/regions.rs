//! Height-threshold region classification.
//!
//! A [`RegionTable`] is an ordered list of `(threshold, color)` rules. A height
//! takes the color of the first region whose threshold is strictly greater than
//! it; heights at or above every threshold keep the default color.

use crate::color::{ColorBuffer, Rgba};
use crate::grid::HeightGrid;

/// One classification rule.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainRegion {
    /// Human-readable label (e.g. "water").
    pub name: String,
    /// Heights strictly below this value match the region.
    pub height: f32,
    /// Color assigned to matching cells.
    pub color: Rgba,
}

impl TerrainRegion {
    /// Creates a new region rule.
    pub fn new(name: impl Into<String>, height: f32, color: Rgba) -> Self {
        Self {
            name: name.into(),
            height,
            color,
        }
    }
}

/// Ordered region rules. Insertion order is preserved and decides which rule
/// wins, so the table is expected (but not required) to ascend by threshold.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegionTable {
    regions: Vec<TerrainRegion>,
}

impl RegionTable {
    /// Creates an empty table. Every height falls through to the default color.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule after all existing ones.
    pub fn push(&mut self, region: TerrainRegion) {
        self.regions.push(region);
    }

    /// Rules in table order.
    pub fn regions(&self) -> &[TerrainRegion] {
        &self.regions
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns `true` if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Returns `true` if thresholds never decrease in table order.
    pub fn is_ascending(&self) -> bool {
        self.regions.windows(2).all(|w| w[0].height <= w[1].height)
    }

    /// First rule whose threshold is strictly greater than `height`.
    pub fn region_for(&self, height: f32) -> Option<&TerrainRegion> {
        self.regions.iter().find(|region| height < region.height)
    }

    /// Color for `height`, or [`Rgba::CLEAR`] when no rule matches.
    pub fn color_for(&self, height: f32) -> Rgba {
        self.region_for(height)
            .map_or(Rgba::CLEAR, |region| region.color)
    }
}

impl FromIterator<TerrainRegion> for RegionTable {
    fn from_iter<I: IntoIterator<Item = TerrainRegion>>(iter: I) -> Self {
        Self {
            regions: iter.into_iter().collect(),
        }
    }
}

/// Color every cell of `grid` by `regions`, row-major like the grid itself.
pub fn classify(grid: &HeightGrid, regions: &RegionTable) -> ColorBuffer {
    let colors = grid
        .values()
        .iter()
        .map(|&height| regions.color_for(height))
        .collect();
    ColorBuffer::from_colors(grid.width(), grid.height(), colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    const B: Rgba = Rgba::new(0.0, 1.0, 0.0, 1.0);
    const C: Rgba = Rgba::new(0.0, 0.0, 1.0, 1.0);

    fn table() -> RegionTable {
        [
            TerrainRegion::new("a", 0.3, A),
            TerrainRegion::new("b", 0.6, B),
            TerrainRegion::new("c", 1.0, C),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_first_match_wins() {
        let regions = table();
        assert_eq!(regions.color_for(0.2), A);
        assert_eq!(regions.color_for(0.5), B);
        assert_eq!(regions.color_for(0.9), C);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let regions = table();
        assert_eq!(regions.color_for(0.3), B, "Equal to a threshold must not match it");
        assert_eq!(regions.color_for(0.6), C);
    }

    #[test]
    fn test_height_above_all_thresholds_falls_through() {
        let regions = table();
        assert_eq!(regions.color_for(1.0), Rgba::CLEAR);
        assert!(regions.region_for(1.0).is_none());
    }

    #[test]
    fn test_empty_table_gives_default_color() {
        assert_eq!(RegionTable::new().color_for(0.0), Rgba::CLEAR);
    }

    #[test]
    fn test_table_order_is_semantic() {
        // A wide rule listed first shadows the narrower one after it.
        let regions: RegionTable = [
            TerrainRegion::new("wide", 0.9, A),
            TerrainRegion::new("narrow", 0.2, B),
        ]
        .into_iter()
        .collect();
        assert_eq!(regions.color_for(0.1), A);
        assert!(!regions.is_ascending());
        assert!(table().is_ascending());
    }

    #[test]
    fn test_region_for_returns_name() {
        assert_eq!(table().region_for(0.45).map(|r| r.name.as_str()), Some("b"));
    }

    #[test]
    fn test_classify_grid_row_major() {
        let grid = HeightGrid::from_values(2, 2, vec![0.2, 0.5, 0.9, 1.0]);
        let colors = classify(&grid, &table());
        assert_eq!(colors.dimensions(), (2, 2));
        assert_eq!(colors.colors(), &[A, B, C, Rgba::CLEAR]);
        assert_eq!(colors.get(0, 1), C);
    }
}
