//! Owned row-major pixel storage.

use super::{BufferError, Region, RegionView};

/// A `width x height` grid of 8-bit pixels with 3 (RGB) or 4 (RGBA)
/// interleaved channels, stored row-major without padding.
///
/// Channel values are non-premultiplied. The first three channels are
/// treated as R, G, B; a fourth channel is alpha and is never written by
/// the compression engine.
///
/// # Example
///
/// ```
/// use quadtree_compress::PixelBuffer;
///
/// let buffer = PixelBuffer::from_raw(vec![255, 0, 0, 255], 1, 1, 4).unwrap();
/// assert_eq!(buffer.pixel(0, 0), &[255, 0, 0, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
    channels: usize,
}

impl PixelBuffer {
    /// Create a zero-filled buffer.
    pub fn new(width: usize, height: usize, channels: usize) -> Result<Self, BufferError> {
        Self::check_shape(width, height, channels)?;
        Ok(Self {
            data: vec![0; width * height * channels],
            width,
            height,
            channels,
        })
    }

    /// Wrap existing row-major pixel data.
    pub fn from_raw(
        data: Vec<u8>,
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<Self, BufferError> {
        Self::check_shape(width, height, channels)?;
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Build an RGBA buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_rgba_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self, BufferError>
    where
        F: FnMut(usize, usize) -> [u8; 4],
    {
        let mut buffer = Self::new(width, height, 4)?;
        for y in 0..height {
            for x in 0..width {
                buffer.set_pixel(x, y, &f(x, y));
            }
        }
        Ok(buffer)
    }

    fn check_shape(width: usize, height: usize, channels: usize) -> Result<(), BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::EmptyImage { width, height });
        }
        if channels != 3 && channels != 4 {
            return Err(BufferError::UnsupportedChannels(channels));
        }
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// The full image rectangle, used as the root of the decomposition.
    #[inline]
    pub fn bounds(&self) -> Region {
        Region::from_size(self.width, self.height)
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width * self.channels
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x},{y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        y * self.stride() + x * self.channels
    }

    /// All channels of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the buffer.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let start = self.offset(x, y);
        &self.data[start..start + self.channels]
    }

    /// Overwrite the pixel at `(x, y)`. `values` must match the channel count.
    pub fn set_pixel(&mut self, x: usize, y: usize, values: &[u8]) {
        assert_eq!(values.len(), self.channels, "channel count mismatch");
        let start = self.offset(x, y);
        self.data[start..start + self.channels].copy_from_slice(values);
    }

    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Exclusive mutable access to a sub-rectangle.
    ///
    /// # Panics
    ///
    /// Panics if `region` is not contained in [`bounds()`](Self::bounds).
    /// Callers inside the crate only derive regions from the bounds, so this
    /// indicates a logic error rather than bad input.
    pub fn view_mut(&mut self, region: Region) -> RegionView<'_> {
        assert!(
            self.bounds().contains_region(&region),
            "region {:?} outside {}x{} buffer",
            region,
            self.width,
            self.height
        );
        let channels = self.channels;
        let stride = self.stride();
        let (start, end) = (region.min_x * channels, region.max_x * channels);
        let rows = self
            .data
            .chunks_exact_mut(stride)
            .skip(region.min_y)
            .take(region.height())
            .map(|row| &mut row[start..end])
            .collect();
        RegionView::from_rows(region, channels, rows)
    }
}
