use std::{collections::BTreeMap, ops::RangeInclusive};

use crate::grid::GridCellRange;

/// Grid cells that have already been fetched.
///
/// The set only grows. Dropping the whole loader is the
/// only way to forget a region.
///
/// Cells are stored per latitude row as merged longitude intervals,
/// so even a whole-world viewport only costs one entry per row.
#[derive(Debug, Clone, Default)]
pub struct CoverageSet {
    // Sorted, disjoint and non-adjacent intervals of longitude indexes
    rows: BTreeMap<i64, Vec<RangeInclusive<i64>>>,
    len: usize,
}

fn span(range: &RangeInclusive<i64>) -> usize {
    usize::try_from(range.end() - range.start() + 1).unwrap_or_default()
}

/// Number of indexes of `range` that are contained in `intervals`.
fn overlap(intervals: &[RangeInclusive<i64>], range: &RangeInclusive<i64>) -> usize {
    intervals
        .iter()
        .map(|iv| span(&(*iv.start().max(range.start())..=*iv.end().min(range.end()))))
        .sum()
}

/// Returns the number of indexes that were not contained before.
fn insert(intervals: &mut Vec<RangeInclusive<i64>>, range: &RangeInclusive<i64>) -> usize {
    let added = span(range) - overlap(intervals, range);
    if added == 0 {
        return 0;
    }
    let (mut start, mut end) = (*range.start(), *range.end());
    let mut merged = Vec::with_capacity(intervals.len() + 1);
    for iv in intervals.drain(..) {
        if *iv.end() < start.saturating_sub(1) || *iv.start() > end.saturating_add(1) {
            merged.push(iv);
        } else {
            start = start.min(*iv.start());
            end = end.max(*iv.end());
        }
    }
    merged.push(start..=end);
    merged.sort_unstable_by_key(|iv| *iv.start());
    *intervals = merged;
    added
}

impl CoverageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of covered cells.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn covers(&self, range: &GridCellRange) -> bool {
        self.count_missing(range) == 0
    }

    /// Number of cells of `range` that are not covered yet.
    pub fn count_missing(&self, range: &GridCellRange) -> usize {
        let lng = range.lng_indexes();
        range
            .lat_indexes()
            .map(|lat| {
                let covered = self
                    .rows
                    .get(&lat)
                    .map(|row| overlap(row, &lng))
                    .unwrap_or_default();
                span(&lng) - covered
            })
            .sum()
    }

    pub fn mark(&mut self, range: &GridCellRange) {
        let lng = range.lng_indexes();
        if span(&lng) == 0 {
            return;
        }
        for lat in range.lat_indexes() {
            self.len += insert(self.rows.entry(lat).or_default(), &lng);
        }
    }
}
