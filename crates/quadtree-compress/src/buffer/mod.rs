//! Pixel storage and region access.
//!
//! - [`PixelBuffer`]: the owned image grid
//! - [`Region`]: an axis-aligned rectangle of it
//! - [`RegionView`]: exclusive, splittable mutable access to one region

mod error;
mod pixel_buffer;
mod region;
mod view;

pub use error::BufferError;
pub use pixel_buffer::PixelBuffer;
pub use region::Region;
pub use view::RegionView;
