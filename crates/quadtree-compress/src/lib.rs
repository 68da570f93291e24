//! quadtree-compress: lossy flat-color image compression by quadtree
//! decomposition
//!
//! An image is treated as one rectangular region. A region whose colors
//! deviate too much from their mean is split into four quadrants, and each
//! quadrant is treated the same way. A region that is uniform enough, or too
//! thin to split, is painted with its average color. The output is a buffer
//! made of flat rectangles that compresses far better than the original with
//! any general-purpose image encoder.
//!
//! # Quick Start
//!
//! ```
//! use quadtree_compress::{Compressor, PixelBuffer};
//!
//! let mut buffer = PixelBuffer::from_rgba_fn(8, 8, |x, y| {
//!     [(x * 30) as u8, (y * 30) as u8, 90, 255]
//! })
//! .unwrap();
//!
//! let report = Compressor::new(10).compress(&mut buffer);
//! assert!(report.leaf_count >= 1);
//! ```
//!
//! # Splitting Rule
//!
//! For a region of `n` pixels:
//!
//! ```text
//! avg   = floor(sum(channel) / n)                        per R, G, B
//! error = floor(sum(|channel - avg|) / (3 * n))          over R, G, B
//!
//! split  iff  error > threshold  and  width >= 2  and  height >= 2
//! ```
//!
//! Quadrants are cut at `(width / 2, height / 2)`, so with odd sizes the
//! right column and bottom row of children are one pixel larger. Alpha is
//! never averaged or written.
//!
//! # Concurrency
//!
//! Quadrants are independent and run as rayon jobs on a work-stealing pool
//! (see [`Parallelism`]). Each job owns a [`RegionView`]: an exclusive
//! borrow of just its rectangle, produced by splitting the parent's borrow.
//! No two live views overlap, so the shared buffer needs no locking and the
//! result is the same regardless of scheduling. A [`TaskCoordinator`] counts
//! in-flight jobs and summarizes the run in a [`CompressionReport`].

pub mod api;
pub mod buffer;
pub mod color;
pub mod engine;
pub mod stats;


pub use api::{compress, Compressor};
pub use buffer::{BufferError, PixelBuffer, Region, RegionView};
pub use color::Rgb;
pub use engine::{
    CompressOptions, CompressionReport, Parallelism, TaskCoordinator, DEFAULT_THRESHOLD,
};
pub use stats::{average_color, mean_absolute_error, RegionStats};
