pub mod codec;
pub mod compression;

pub use codec::{decode_bytes, decode_file, encode, encode_to_vec, output_path, DecodedImage};
pub use compression::{CompressedImage, CompressionOutcome, CompressionService};
