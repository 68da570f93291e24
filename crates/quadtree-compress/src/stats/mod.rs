//! Per-region color statistics.
//!
//! Both measurements use integer arithmetic and truncate toward zero, so a
//! region with red values `{0, 1}` averages to red `0`, not `1`.

use crate::buffer::RegionView;
use crate::color::Rgb;

/// Mean color and non-uniformity score of one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionStats {
    /// Per-channel floor mean.
    pub average: Rgb,
    /// Floor of the mean absolute deviation from `average` over R, G, B.
    pub error: u32,
}

impl RegionStats {
    /// Compute both statistics for `view`.
    ///
    /// # Panics
    ///
    /// Panics if the view covers no pixels.
    pub fn measure(view: &RegionView<'_>) -> Self {
        let average = average_color(view);
        let error = mean_absolute_error(view, average);
        Self { average, error }
    }
}

/// Arithmetic mean of each color channel, truncated.
///
/// Channel sums use `u64`, which cannot overflow for any image that fits
/// in memory.
///
/// # Panics
///
/// Panics if the view covers no pixels.
pub fn average_color(view: &RegionView<'_>) -> Rgb {
    let n = view.pixel_count() as u64;
    assert!(n > 0, "average of empty region {:?}", view.region());

    let [r, g, b] = view.colors().fold([0u64; 3], |[r, g, b], c| {
        [r + c.r as u64, g + c.g as u64, b + c.b as u64]
    });
    Rgb::new((r / n) as u8, (g / n) as u8, (b / n) as u8)
}

/// Mean absolute deviation of R, G, B from `average`, truncated.
///
/// Sums `|channel - average|` over the three channels of every pixel and
/// divides by `3 * n`.
///
/// # Panics
///
/// Panics if the view covers no pixels.
pub fn mean_absolute_error(view: &RegionView<'_>, average: Rgb) -> u32 {
    let n = view.pixel_count() as u64;
    assert!(n > 0, "error of empty region {:?}", view.region());

    let total: u64 = view
        .colors()
        .map(|c| c.abs_diff_sum(average) as u64)
        .sum();
    (total / (n * 3)) as u32
}
