//! Exclusive mutable views onto rectangular parts of a [`PixelBuffer`].
//!
//! A [`RegionView`] owns one `&mut [u8]` per row of its region, trimmed to
//! the region's columns. Splitting a view consumes it and hands out four
//! views built from `split_at_mut`, so two live views can never address the
//! same pixel. This is what lets sibling regions be filled from different
//! worker threads without any locking.
//!
//! [`PixelBuffer`]: super::PixelBuffer

use super::Region;
use crate::color::Rgb;

/// Mutable access to the pixels of one [`Region`].
#[derive(Debug)]
pub struct RegionView<'a> {
    region: Region,
    channels: usize,
    rows: Vec<&'a mut [u8]>,
}

impl<'a> RegionView<'a> {
    pub(super) fn from_rows(region: Region, channels: usize, rows: Vec<&'a mut [u8]>) -> Self {
        debug_assert_eq!(rows.len(), region.height());
        debug_assert!(rows.iter().all(|r| r.len() == region.width() * channels));
        Self {
            region,
            channels,
            rows,
        }
    }

    /// The rectangle this view covers, in buffer coordinates.
    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.region.area()
    }

    /// R, G, B of every pixel in row-major order.
    pub fn colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        let channels = self.channels;
        self.rows
            .iter()
            .flat_map(move |row| row.chunks_exact(channels).map(Rgb::from_pixel))
    }

    /// Paint every pixel's R, G, B with `color`. Alpha is left untouched.
    pub fn fill(&mut self, color: Rgb) {
        let rgb = color.to_array();
        for row in self.rows.iter_mut() {
            for pixel in row.chunks_exact_mut(self.channels) {
                pixel[..3].copy_from_slice(&rgb);
            }
        }
    }

    /// Consume the view and return one view per quadrant, in the order of
    /// [`Region::quadrants`].
    pub fn split_quadrants(self) -> [RegionView<'a>; 4] {
        let [tl, tr, bl, br] = self.region.quadrants();
        let split_col = tl.width() * self.channels;

        let mut top = self.rows;
        let bottom = top.split_off(tl.height());
        let (top_left, top_right) = split_columns(top, split_col);
        let (bottom_left, bottom_right) = split_columns(bottom, split_col);

        let c = self.channels;
        [
            RegionView::from_rows(tl, c, top_left),
            RegionView::from_rows(tr, c, top_right),
            RegionView::from_rows(bl, c, bottom_left),
            RegionView::from_rows(br, c, bottom_right),
        ]
    }
}

type Rows<'a> = Vec<&'a mut [u8]>;

fn split_columns(rows: Rows<'_>, at: usize) -> (Rows<'_>, Rows<'_>) {
    rows.into_iter().map(|row| row.split_at_mut(at)).unzip()
}
