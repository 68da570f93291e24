//! Test fixtures: synthetic images written to temporary directories.

use quadpress::models::OutputFormat;
use quadpress::services::encode_to_vec;
use quadtree_compress::PixelBuffer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tempfile::TempDir;

/// Seed for reproducible noisy images
pub const SEED: u64 = 0x5eed;

/// Left half black, right half white
pub fn two_tone(width: usize, height: usize) -> PixelBuffer {
    PixelBuffer::from_rgba_fn(width, height, |x, _| {
        if x < width / 2 {
            [0, 0, 0, 255]
        } else {
            [255, 255, 255, 255]
        }
    })
    .unwrap()
}

/// Uniform random noise, opaque
pub fn noisy(width: usize, height: usize) -> PixelBuffer {
    let mut rng = StdRng::seed_from_u64(SEED);
    PixelBuffer::from_rgba_fn(width, height, |_, _| [rng.gen(), rng.gen(), rng.gen(), 255]).unwrap()
}

/// Smooth gradient with mild noise, so low thresholds split and high ones merge
pub fn photo_like(width: usize, height: usize) -> PixelBuffer {
    let mut rng = StdRng::seed_from_u64(SEED);
    PixelBuffer::from_rgba_fn(width, height, |x, y| {
        let jitter: i16 = rng.gen_range(-6..=6);
        let base = ((x * 255) / width.max(1)) as i16;
        let r = (base + jitter).clamp(0, 255) as u8;
        let g = ((y * 255) / height.max(1)) as u8;
        [r, g, 128, 255]
    })
    .unwrap()
}

/// A temporary working directory with helpers for writing input images
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Encode `buffer` and write it as `name`
    pub fn write_image(&self, name: &str, buffer: &PixelBuffer, format: OutputFormat) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, encode_to_vec(buffer, format, 95).unwrap()).unwrap();
        path
    }

    pub fn write_bytes(&self, name: &str, data: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, data).unwrap();
        path
    }
}
