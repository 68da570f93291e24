//! The color value produced by region averaging.

/// An 8-bit RGB color, non-premultiplied.
///
/// Alpha is deliberately absent: the engine only ever averages and writes
/// the three color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Read the first three channels of a pixel.
    ///
    /// `pixel` must hold at least three bytes.
    #[inline]
    pub fn from_pixel(pixel: &[u8]) -> Self {
        Self::new(pixel[0], pixel[1], pixel[2])
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Sum of per-channel absolute differences.
    #[inline]
    pub fn abs_diff_sum(self, other: Rgb) -> u32 {
        self.r.abs_diff(other.r) as u32
            + self.g.abs_diff(other.g) as u32
            + self.b.abs_diff(other.b) as u32
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}
