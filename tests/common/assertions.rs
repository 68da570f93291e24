//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use quadpress::models::OutputFormat;
use quadpress::services::decode_file;
use quadtree_compress::PixelBuffer;
use std::path::Path;

/// Assert that `data` starts with the signature of `format`
pub fn assert_signature(data: &[u8], format: OutputFormat) {
    let expected: &[u8] = match format {
        OutputFormat::Png => &[0x89, b'P', b'N', b'G'],
        OutputFormat::Jpeg => &[0xFF, 0xD8, 0xFF],
        OutputFormat::Gif => b"GIF8",
    };
    assert!(
        data.starts_with(expected),
        "Expected {} data, got {} bytes starting with {:?}",
        format,
        data.len(),
        &data[..8.min(data.len())]
    );
}

/// Assert the file exists, has the format's signature and decodes to the given size
pub fn assert_image_file(path: &Path, format: OutputFormat, width: usize, height: usize) {
    assert!(path.exists(), "Expected output file {}", path.display());
    let data = std::fs::read(path).unwrap();
    assert_signature(&data, format);

    let decoded = decode_file(path).unwrap();
    assert_eq!(decoded.format, format);
    assert_eq!(
        (decoded.buffer.width(), decoded.buffer.height()),
        (width, height),
        "Unexpected dimensions for {}",
        path.display()
    );
}

/// Count distinct RGB colors in a buffer
pub fn distinct_colors(buffer: &PixelBuffer) -> usize {
    let mut colors: Vec<[u8; 3]> = buffer
        .as_raw()
        .chunks_exact(buffer.channels())
        .map(|px| [px[0], px[1], px[2]])
        .collect();
    colors.sort_unstable();
    colors.dedup();
    colors.len()
}
