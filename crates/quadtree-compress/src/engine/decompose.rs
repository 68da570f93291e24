//! The recursive region decomposition.
//!
//! Each region is evaluated once: if its mean absolute error exceeds the
//! threshold and it is at least 2x2, it is split into four quadrant views
//! that are processed independently. Otherwise its color channels are
//! painted with its average color and it is done.

use rayon::Scope;

use super::coordinator::TaskCoordinator;
use crate::buffer::RegionView;
use crate::stats::RegionStats;

/// Regions smaller than this many pixels are finished on the current worker
/// instead of being spawned as separate rayon jobs.
const INLINE_AREA: usize = 32 * 32;

/// Runs the per-region state machine for one compression run.
pub(crate) struct Decomposer<'c> {
    threshold: u32,
    coordinator: &'c TaskCoordinator,
}

impl<'c> Decomposer<'c> {
    pub(crate) fn new(threshold: u32, coordinator: &'c TaskCoordinator) -> Self {
        Self {
            threshold,
            coordinator,
        }
    }

    /// Evaluate one region. Returns the four child views if it must be
    /// split, or `None` after painting it flat.
    pub(crate) fn evaluate<'v>(&self, mut view: RegionView<'v>) -> Option<[RegionView<'v>; 4]> {
        let stats = RegionStats::measure(&view);

        if stats.error > self.threshold && view.region().can_split() {
            self.coordinator.record_split();
            Some(view.split_quadrants())
        } else {
            view.fill(stats.average);
            self.coordinator.record_leaf(view.region());
            None
        }
    }

    /// Process `view` and all of its descendants on the calling thread.
    pub(crate) fn run_inline(&self, view: RegionView<'_>, depth: usize) {
        let _task = self.coordinator.submit(depth);
        if let Some(children) = self.evaluate(view) {
            for child in children {
                self.run_inline(child, depth + 1);
            }
        }
    }

    /// Submit `view` as a job on `scope`. Children of a split are submitted
    /// from inside the job, so the whole tree completes before the scope
    /// returns.
    pub(crate) fn spawn<'s>(&'s self, scope: &Scope<'s>, view: RegionView<'s>, depth: usize) {
        if view.region().area() < INLINE_AREA {
            self.run_inline(view, depth);
            return;
        }

        let task = self.coordinator.submit(depth);
        scope.spawn(move |scope| {
            if let Some(children) = self.evaluate(view) {
                for child in children {
                    self.spawn(scope, child, depth + 1);
                }
            }
            drop(task);
        });
    }
}
