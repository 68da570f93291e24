//! Bookkeeping for in-flight region tasks.
//!
//! Every region unit is registered with [`TaskCoordinator::submit`] before it
//! is scheduled. The returned [`TaskGuard`] travels with the unit and
//! decrements the pending count when dropped, after the unit has submitted
//! any children. The pending count therefore only reaches zero once every
//! path in the tree has reached a leaf.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use super::CompressionReport;
use crate::buffer::Region;

/// Concurrency-safe counters shared by all tasks of one run.
#[derive(Debug, Default)]
pub struct TaskCoordinator {
    pending: AtomicUsize,
    submitted: AtomicUsize,
    splits: AtomicUsize,
    leaves: AtomicUsize,
    max_depth: AtomicUsize,
    leaf_regions: Option<Mutex<Vec<Region>>>,
}

impl TaskCoordinator {
    /// Create a coordinator. With `collect_leaves` every leaf region is kept
    /// for the final report.
    pub fn new(collect_leaves: bool) -> Self {
        Self {
            leaf_regions: collect_leaves.then(|| Mutex::new(Vec::new())),
            ..Self::default()
        }
    }

    /// Register a unit of work at `depth` in the quadtree.
    pub fn submit(&self, depth: usize) -> TaskGuard<'_> {
        self.pending.fetch_add(1, Ordering::AcqRel);
        self.submitted.fetch_add(1, Ordering::Relaxed);
        self.max_depth.fetch_max(depth, Ordering::Relaxed);
        TaskGuard { coordinator: self }
    }

    pub(crate) fn record_split(&self) {
        self.splits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_leaf(&self, region: Region) {
        self.leaves.fetch_add(1, Ordering::Relaxed);
        if let Some(regions) = &self.leaf_regions {
            regions
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(region);
        }
    }

    /// Units submitted but not yet done.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::Acquire)
    }

    /// Units submitted so far.
    pub fn submitted(&self) -> usize {
        self.submitted.load(Ordering::Relaxed)
    }

    /// Finish the run and summarize it.
    ///
    /// Must be called after the scheduler has returned (the end of the rayon
    /// scope, or the outermost call in sequential mode).
    ///
    /// # Panics
    ///
    /// Panics if any submitted unit has not finished.
    pub fn join(self) -> CompressionReport {
        let pending = self.pending.into_inner();
        assert_eq!(pending, 0, "{pending} region tasks still pending at join");

        let leaves = self.leaf_regions.map(|regions| {
            let mut regions = regions.into_inner().unwrap_or_else(PoisonError::into_inner);
            regions.sort_unstable();
            regions
        });

        CompressionReport {
            regions_visited: self.submitted.into_inner(),
            leaf_count: self.leaves.into_inner(),
            split_count: self.splits.into_inner(),
            max_depth: self.max_depth.into_inner(),
            leaves,
        }
    }
}

/// Marks one submitted unit as in flight until dropped.
#[must_use = "dropping the guard marks the task as done"]
#[derive(Debug)]
pub struct TaskGuard<'c> {
    coordinator: &'c TaskCoordinator,
}

impl Drop for TaskGuard<'_> {
    fn drop(&mut self) {
        self.coordinator.pending.fetch_sub(1, Ordering::AcqRel);
    }
}
