//! Error type for pixel buffer construction.

use std::fmt;

/// Returned when raw pixel data cannot be wrapped in a
/// [`PixelBuffer`](super::PixelBuffer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Width or height is zero
    EmptyImage {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// Channel count is not 3 (RGB) or 4 (RGBA)
    UnsupportedChannels(usize),
    /// Data length does not equal `width * height * channels`
    LengthMismatch {
        /// Expected byte count
        expected: usize,
        /// Actual byte count
        actual: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::EmptyImage { width, height } => {
                write!(f, "image has no pixels ({}x{})", width, height)
            }
            BufferError::UnsupportedChannels(n) => {
                write!(f, "unsupported channel count {} (expected 3 or 4)", n)
            }
            BufferError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel data length mismatch: expected {} bytes, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for BufferError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            BufferError::EmptyImage {
                width: 0,
                height: 3
            }
            .to_string(),
            "image has no pixels (0x3)"
        );
        assert_eq!(
            BufferError::UnsupportedChannels(2).to_string(),
            "unsupported channel count 2 (expected 3 or 4)"
        );
        assert_eq!(
            BufferError::LengthMismatch {
                expected: 16,
                actual: 15
            }
            .to_string(),
            "pixel data length mismatch: expected 16 bytes, got 15"
        );
    }
}
