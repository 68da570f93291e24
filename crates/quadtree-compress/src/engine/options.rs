//! Run configuration for the decomposition engine.

/// Threshold used when none is configured.
pub const DEFAULT_THRESHOLD: u32 = 10;

/// How region tasks are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parallelism {
    /// Recurse on the calling thread.
    Sequential,
    /// Fan out on rayon's global work-stealing pool.
    #[default]
    Auto,
    /// Fan out on a dedicated pool with this many worker threads.
    ///
    /// Falls back to the global pool if the threads cannot be spawned.
    Threads(usize),
}

/// Options for a single compression run.
///
/// The threshold is the only setting that affects output; the others only
/// change scheduling and reporting. Output is identical for every
/// [`Parallelism`] mode.
///
/// # Example
///
/// ```
/// use quadtree_compress::{CompressOptions, Parallelism};
///
/// let options = CompressOptions::new(25)
///     .parallelism(Parallelism::Threads(2))
///     .collect_leaves(true);
/// assert_eq!(options.threshold, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressOptions {
    /// Maximum mean absolute error a region may have and still be painted
    /// flat. Regions above it are split into quadrants.
    ///
    /// Default: `10`
    pub threshold: u32,

    /// Task scheduling mode.
    ///
    /// Default: [`Parallelism::Auto`]
    pub parallelism: Parallelism,

    /// Record every leaf region in the
    /// [`CompressionReport`](super::CompressionReport).
    ///
    /// Default: `false`
    pub collect_leaves: bool,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            parallelism: Parallelism::default(),
            collect_leaves: false,
        }
    }
}

impl CompressOptions {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    #[inline]
    pub fn threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    #[inline]
    pub fn parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    #[inline]
    pub fn collect_leaves(mut self, enabled: bool) -> Self {
        self.collect_leaves = enabled;
        self
    }
}
