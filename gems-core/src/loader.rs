//! Bookkeeping of the incremental, viewport driven loading.
//!
//! The loader never talks to the network itself. [`ViewportLoader::plan`]
//! decides whether a viewport needs a fetch and the caller reports the
//! outcome back with [`ViewportLoader::complete`]. A failed fetch is just
//! never completed, which keeps the region uncovered.

use crate::{
    accumulated::AccumulatedLocations,
    bbox::extend_bbox,
    coverage::CoverageSet,
    entities::*,
    grid::{Grid, GridCellRange, DEFAULT_CELL_SIZE_DEG},
};

pub const DEFAULT_BUFFER_RATIO: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportLoaderConfig {
    pub cell_size: f64,
    pub buffer_ratio: f64,
}

impl Default for ViewportLoaderConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE_DEG,
            buffer_ratio: DEFAULT_BUFFER_RATIO,
        }
    }
}

/// A fetch that is required to cover a viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchPlan {
    /// The buffered viewport, clamped to valid coordinates.
    pub bbox: MapBbox,
    /// All cells of the buffered viewport.
    pub cells: GridCellRange,
}

#[derive(Debug, Clone)]
pub struct ViewportLoader {
    grid: Grid,
    buffer_ratio: f64,
    coverage: CoverageSet,
    locations: AccumulatedLocations,
}

impl Default for ViewportLoader {
    fn default() -> Self {
        Self::new(ViewportLoaderConfig::default())
    }
}

impl ViewportLoader {
    pub fn new(config: ViewportLoaderConfig) -> Self {
        let ViewportLoaderConfig {
            cell_size,
            buffer_ratio,
        } = config;
        Self {
            grid: Grid::new(cell_size),
            buffer_ratio,
            coverage: CoverageSet::new(),
            locations: AccumulatedLocations::new(),
        }
    }

    pub fn buffered(&self, viewport: &MapBbox) -> MapBbox {
        extend_bbox(viewport, self.buffer_ratio)
    }

    pub fn required_cells(&self, viewport: &MapBbox) -> GridCellRange {
        self.grid.cells_for_bbox(&self.buffered(viewport))
    }

    pub fn is_covered(&self, viewport: &MapBbox) -> bool {
        self.coverage.covers(&self.required_cells(viewport))
    }

    /// Returns `None` if every required cell has been fetched before.
    pub fn plan(&self, viewport: &MapBbox) -> Option<FetchPlan> {
        let buffered = self.buffered(viewport);
        let cells = self.grid.cells_for_bbox(&buffered);
        let missing = self.coverage.count_missing(&cells);
        if missing == 0 {
            log::debug!("All {} cells of {viewport} are loaded", cells.len());
            return None;
        }
        log::debug!(
            "{missing} of {} cells of {viewport} are not loaded yet",
            cells.len()
        );
        Some(FetchPlan {
            bbox: buffered.clamp_to_world(),
            cells,
        })
    }

    /// Merge the fetched locations and mark the whole plan as covered.
    ///
    /// Returns the number of locations that were not known before.
    pub fn complete(&mut self, plan: FetchPlan, fetched: Vec<Location>) -> usize {
        let FetchPlan { bbox, cells } = plan;
        let fetched_count = fetched.len();
        let added = self.locations.merge(fetched);
        self.coverage.mark(&cells);
        log::debug!(
            "Fetched {fetched_count} locations in {bbox}, {added} of them are new ({} in total)",
            self.locations.len()
        );
        added
    }

    pub fn locations(&self) -> &[Location] {
        self.locations.as_slice()
    }

    pub fn coverage(&self) -> &CoverageSet {
        &self.coverage
    }
}
