//! Summary of a finished compression run.

use crate::buffer::Region;

/// Counts gathered by the [`TaskCoordinator`](super::TaskCoordinator).
///
/// Every visited region is either a leaf or a split, and each split adds
/// four regions, so `leaf_count == 3 * split_count + 1` for a single root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionReport {
    /// Regions evaluated (leaves plus splits).
    pub regions_visited: usize,
    /// Regions painted with their average color.
    pub leaf_count: usize,
    /// Regions divided into quadrants.
    pub split_count: usize,
    /// Deepest quadtree level reached; the root is level 0.
    pub max_depth: usize,
    /// Every leaf, sorted row-major by top-left corner. Only present when
    /// leaf collection was requested.
    pub leaves: Option<Vec<Region>>,
}

impl CompressionReport {
    /// Total pixels covered by the collected leaves, if any were collected.
    pub fn leaf_area(&self) -> Option<usize> {
        self.leaves
            .as_ref()
            .map(|leaves| leaves.iter().map(Region::area).sum())
    }
}
