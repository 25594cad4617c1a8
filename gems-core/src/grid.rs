//! Quantization of the map into fixed-size cells.
//!
//! The cells are plain `floor(degrees / cell_size)` buckets and
//! therefore not a geodesic grid: towards the poles a cell covers
//! less ground in east-west direction than at the equator.

use std::{fmt, ops::RangeInclusive};

use crate::entities::MapBbox;

/// ~5 km at the equator
pub const DEFAULT_CELL_SIZE_DEG: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    pub lat_idx: i64,
    pub lng_idx: i64,
}

impl GridCell {
    pub const fn new(lat_idx: i64, lng_idx: i64) -> Self {
        Self { lat_idx, lng_idx }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.lat_idx, self.lng_idx)
    }
}

/// The inclusive rectangle of cells that covers a bounding box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCellRange {
    lat: RangeInclusive<i64>,
    lng: RangeInclusive<i64>,
}

impl GridCellRange {
    pub fn lat_indexes(&self) -> RangeInclusive<i64> {
        self.lat.clone()
    }

    pub fn lng_indexes(&self) -> RangeInclusive<i64> {
        self.lng.clone()
    }

    pub fn len(&self) -> usize {
        let span = |r: &RangeInclusive<i64>| {
            usize::try_from(r.end() - r.start() + 1).unwrap_or_default()
        };
        span(&self.lat) * span(&self.lng)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.lat
            .clone()
            .flat_map(move |i| self.lng.clone().map(move |j| GridCell::new(i, j)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    cell_size: f64,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE_DEG)
    }
}

impl Grid {
    pub fn new(cell_size: f64) -> Self {
        debug_assert!(cell_size > 0.0);
        Self { cell_size }
    }

    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    fn index(&self, deg: f64) -> i64 {
        (deg / self.cell_size).floor() as i64
    }

    pub fn cell_of(&self, lat: f64, lng: f64) -> GridCell {
        GridCell::new(self.index(lat), self.index(lng))
    }

    /// All cells touched by the box, edges included.
    pub fn cells_for_bbox(&self, bbox: &MapBbox) -> GridCellRange {
        let sw = self.cell_of(bbox.min_lat(), bbox.min_lng());
        let ne = self.cell_of(bbox.max_lat(), bbox.max_lng());
        GridCellRange {
            lat: sw.lat_idx..=ne.lat_idx,
            lng: sw.lng_idx..=ne.lng_idx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn cells_of_a_small_box() {
        let grid = Grid::new(0.05);
        let bbox = MapBbox::from_bounds(0.02, 0.07, 0.0, 0.03);
        let cells = grid.cells_for_bbox(&bbox);
        assert_eq!(cells.len(), 2);
        let keys: HashSet<String> = cells.iter().map(|c| c.to_string()).collect();
        let expected: HashSet<String> = ["0:0", "1:0"].into_iter().map(String::from).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn negative_coordinates_round_down() {
        let grid = Grid::default();
        assert_eq!(grid.cell_of(-0.01, -0.06), GridCell::new(-1, -2));
        assert_eq!(grid.cell_of(0.0, 0.0), GridCell::new(0, 0));
        assert_eq!(grid.cell_of(-0.05, 0.049), GridCell::new(-1, 0));
    }

    #[test]
    fn edges_are_inclusive() {
        let grid = Grid::new(1.0);
        let cells = grid.cells_for_bbox(&MapBbox::from_bounds(0.0, 2.0, 0.0, 1.0));
        assert_eq!(cells.lat_indexes(), 0..=2);
        assert_eq!(cells.lng_indexes(), 0..=1);
        assert_eq!(cells.len(), 6);
        let all: Vec<_> = cells.iter().collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all.first(), Some(&GridCell::new(0, 0)));
        assert_eq!(all.last(), Some(&GridCell::new(2, 1)));
    }

    #[test]
    fn display_cell_key() {
        assert_eq!(GridCell::new(-3, 12).to_string(), "-3:12");
    }
}
