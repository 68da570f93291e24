//! Quadpress - lossy image compression by quadtree decomposition
//!
//! Host application around the `quadtree-compress` engine: decoding,
//! encoding, configuration. This library exposes modules for integration
//! testing.

pub mod error;
pub mod models;
pub mod services;
