//! Quadtree decomposition engine.
//!
//! [`decompose`] drives one run: it creates a [`TaskCoordinator`], hands the
//! root view to the decomposer on the configured scheduler, waits for the
//! scheduler to drain, and joins the coordinator into a
//! [`CompressionReport`].
//!
//! # Scheduling
//!
//! In the parallel modes every region large enough to be worth it becomes a
//! rayon job inside one `scope`. The scope does not return until every job,
//! including the ones spawned by other jobs, has finished. Jobs write through
//! disjoint [`RegionView`]s, so the shared pixel buffer needs no locks and
//! the output does not depend on scheduling order.

mod coordinator;
mod decompose;
mod options;
mod report;

pub use coordinator::{TaskCoordinator, TaskGuard};
pub use options::{CompressOptions, Parallelism, DEFAULT_THRESHOLD};
pub use report::CompressionReport;

use crate::buffer::RegionView;
use decompose::Decomposer;

/// Compress the pixels behind `view` in place.
pub fn decompose(view: RegionView<'_>, options: &CompressOptions) -> CompressionReport {
    let coordinator = TaskCoordinator::new(options.collect_leaves);
    let decomposer = Decomposer::new(options.threshold, &coordinator);

    match options.parallelism {
        Parallelism::Sequential => decomposer.run_inline(view, 0),
        Parallelism::Auto => rayon::scope(|s| decomposer.spawn(s, view, 0)),
        Parallelism::Threads(n) => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
            Ok(pool) => pool.scope(|s| decomposer.spawn(s, view, 0)),
            Err(_) => rayon::scope(|s| decomposer.spawn(s, view, 0)),
        },
    }

    coordinator.join()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{PixelBuffer, Region};

    fn checkerboard(size: usize) -> PixelBuffer {
        PixelBuffer::from_rgba_fn(size, size, |x, y| {
            let v = if (x + y) % 2 == 0 { 0 } else { 255 };
            [v, v, v, 255]
        })
        .unwrap()
    }

    #[test]
    fn test_checkerboard_splits_to_pixels() {
        let mut buffer = checkerboard(8);
        let before = buffer.clone();
        let bounds = buffer.bounds();
        let report = decompose(buffer.view_mut(bounds), &CompressOptions::new(10));

        // Every 2x2 block has error 127, so the tree bottoms out at 1x1.
        assert_eq!(report.leaf_count, 64);
        assert_eq!(report.split_count, 1 + 4 + 16);
        assert_eq!(report.regions_visited, 85);
        assert_eq!(report.max_depth, 3);
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_report_counts_are_consistent() {
        for parallelism in [
            Parallelism::Sequential,
            Parallelism::Auto,
            Parallelism::Threads(3),
        ] {
            let mut buffer = PixelBuffer::from_rgba_fn(123, 77, |x, y| {
                [(x * x / 7) as u8, (y * 3) as u8, ((x * y) % 251) as u8, 255]
            })
            .unwrap();
            let bounds = buffer.bounds();
            let options = CompressOptions::new(5)
                .parallelism(parallelism)
                .collect_leaves(true);
            let report = decompose(buffer.view_mut(bounds), &options);

            assert_eq!(report.regions_visited, report.leaf_count + report.split_count);
            assert_eq!(report.leaf_count, 3 * report.split_count + 1);
            assert_eq!(report.leaf_area(), Some(123 * 77));
        }
    }

    #[test]
    fn test_sub_region_only_touches_its_pixels() {
        let mut buffer = checkerboard(8);
        let before = buffer.clone();
        let region = Region::new(0, 0, 4, 8);
        let report = decompose(
            buffer.view_mut(region),
            &CompressOptions::new(200).parallelism(Parallelism::Sequential),
        );
        assert_eq!(report.leaf_count, 1);

        for y in 0..8 {
            for x in 0..8 {
                if x < 4 {
                    assert_eq!(buffer.pixel(x, y), &[127, 127, 127, 255]);
                } else {
                    assert_eq!(buffer.pixel(x, y), before.pixel(x, y));
                }
            }
        }
    }
}
