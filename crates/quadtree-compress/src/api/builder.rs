//! Compressor builder -- the primary ergonomic entry point for the crate.

use crate::buffer::{PixelBuffer, Region};
use crate::engine::{self, CompressOptions, CompressionReport, Parallelism};

/// Reusable quadtree compressor.
///
/// - Constructor takes the threshold, the only setting that changes output
/// - Configuration methods consume and return `self`
/// - [`compress()`](Self::compress) takes `&self`, so one compressor can be
///   applied to many buffers
///
/// # Example
///
/// ```
/// use quadtree_compress::{Compressor, PixelBuffer};
///
/// let mut buffer = PixelBuffer::from_rgba_fn(4, 4, |x, _| {
///     if x < 2 { [0, 0, 0, 255] } else { [255, 255, 255, 255] }
/// })
/// .unwrap();
///
/// let report = Compressor::new(10).compress(&mut buffer);
///
/// // The left and right halves are each uniform.
/// assert_eq!(report.leaf_count, 4);
/// assert_eq!(buffer.pixel(0, 0), &[0, 0, 0, 255]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Compressor {
    options: CompressOptions,
}

impl Compressor {
    /// Create a compressor that splits regions whose mean absolute error
    /// exceeds `threshold`.
    pub fn new(threshold: u32) -> Self {
        Self {
            options: CompressOptions::new(threshold),
        }
    }

    /// Create a compressor from prepared options.
    pub fn with_options(options: CompressOptions) -> Self {
        Self { options }
    }

    /// Set the scheduling mode.
    #[inline]
    pub fn parallelism(mut self, parallelism: Parallelism) -> Self {
        self.options = self.options.parallelism(parallelism);
        self
    }

    /// Use a dedicated pool of `n` worker threads. `0` lets rayon choose.
    #[inline]
    pub fn threads(self, n: usize) -> Self {
        self.parallelism(Parallelism::Threads(n))
    }

    /// Process every region on the calling thread.
    #[inline]
    pub fn sequential(self) -> Self {
        self.parallelism(Parallelism::Sequential)
    }

    /// Record every leaf region in the report.
    #[inline]
    pub fn collect_leaves(mut self, enabled: bool) -> Self {
        self.options = self.options.collect_leaves(enabled);
        self
    }

    #[inline]
    pub fn options(&self) -> &CompressOptions {
        &self.options
    }

    /// Compress the whole buffer in place.
    pub fn compress(&self, buffer: &mut PixelBuffer) -> CompressionReport {
        let bounds = buffer.bounds();
        self.compress_region(buffer, bounds)
    }

    /// Compress only `region` of the buffer in place. Pixels outside it are
    /// not read or written.
    ///
    /// # Panics
    ///
    /// Panics if `region` is empty or extends past the buffer bounds.
    pub fn compress_region(&self, buffer: &mut PixelBuffer, region: Region) -> CompressionReport {
        assert!(!region.is_empty(), "cannot compress empty region {region:?}");
        engine::decompose(buffer.view_mut(region), &self.options)
    }
}

/// Compress `buffer` in place with `threshold` and default scheduling.
pub fn compress(buffer: &mut PixelBuffer, threshold: u32) -> CompressionReport {
    Compressor::new(threshold).compress(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: usize, height: usize) -> PixelBuffer {
        PixelBuffer::from_rgba_fn(width, height, |x, y| {
            [(x * 255 / width) as u8, (y * 255 / height) as u8, 128, 255]
        })
        .unwrap()
    }

    #[test]
    fn test_new_defaults() {
        let compressor = Compressor::new(12);
        assert_eq!(compressor.options().threshold, 12);
        assert_eq!(compressor.options().parallelism, Parallelism::Auto);
        assert!(!compressor.options().collect_leaves);
    }

    #[test]
    fn test_builder_chaining() {
        let compressor = Compressor::new(1).threads(2).collect_leaves(true);
        assert_eq!(compressor.options().parallelism, Parallelism::Threads(2));
        assert!(compressor.options().collect_leaves);

        let compressor = compressor.sequential();
        assert_eq!(compressor.options().parallelism, Parallelism::Sequential);
    }

    #[test]
    fn test_compress_reusable() {
        let compressor = Compressor::new(6);
        let mut a = gradient(40, 30);
        let mut b = gradient(40, 30);

        let report_a = compressor.compress(&mut a);
        let report_b = compressor.compress(&mut b);

        assert_eq!(a, b);
        assert_eq!(report_a, report_b);
    }

    #[test]
    fn test_free_function_matches_builder() {
        let mut a = gradient(33, 17);
        let mut b = gradient(33, 17);
        compress(&mut a, 4);
        Compressor::new(4).sequential().compress(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_threshold_on_gradient_is_lossless() {
        // Neighbouring pixels differ by ~16 on both axes, so every block
        // larger than 1x1 has a non-zero error and is split down to pixels.
        let mut buffer = gradient(16, 16);
        let original = buffer.clone();
        let report = Compressor::new(0).compress(&mut buffer);
        assert_eq!(report.leaf_count, 256);
        assert_eq!(buffer, original);
    }

    #[test]
    #[should_panic(expected = "empty region")]
    fn test_compress_empty_region_panics() {
        let mut buffer = gradient(4, 4);
        Compressor::new(1).compress_region(&mut buffer, Region::new(2, 2, 2, 4));
    }
}
