//! Public API for the quadtree-compress crate.
//!
//! This module provides the high-level entry point: the [`Compressor`]
//! builder and the one-shot [`compress`] function.

mod builder;

pub use builder::{compress, Compressor};
