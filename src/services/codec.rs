use crate::error::CodecError;
use crate::models::OutputFormat;
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, Frame, ImageEncoder, ImageReader, RgbaImage};
use quadtree_compress::PixelBuffer;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

/// A decoded RGBA image plus the format it was stored in
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub buffer: PixelBuffer,
    pub format: OutputFormat,
}

/// Decode an image file, detecting the format from its content.
pub fn decode_file(path: impl AsRef<Path>) -> Result<DecodedImage, CodecError> {
    let data = std::fs::read(path)?;
    decode_bytes(&data)
}

/// Decode in-memory image data into a 4-channel pixel buffer.
pub fn decode_bytes(data: &[u8]) -> Result<DecodedImage, CodecError> {
    let reader = ImageReader::new(Cursor::new(data)).with_guessed_format()?;

    let detected = reader.format().ok_or(CodecError::UnknownFormat)?;
    let format = OutputFormat::from_image_format(detected)
        .ok_or_else(|| CodecError::UnsupportedFormat(format!("{detected:?}")))?;

    let rgba = reader.decode()?.to_rgba8();
    let (width, height) = rgba.dimensions();
    let buffer = PixelBuffer::from_raw(rgba.into_raw(), width as usize, height as usize, 4)?;

    Ok(DecodedImage { buffer, format })
}

/// Encode a pixel buffer in the given format.
///
/// JPEG has no alpha channel, so it is dropped before encoding. GIF frames
/// are quantized to a 256 color palette by the encoder.
pub fn encode<W: Write>(
    buffer: &PixelBuffer,
    format: OutputFormat,
    jpeg_quality: u8,
    writer: W,
) -> Result<(), CodecError> {
    let width = buffer.width() as u32;
    let height = buffer.height() as u32;

    match format {
        OutputFormat::Png => {
            let color = match buffer.channels() {
                3 => ExtendedColorType::Rgb8,
                _ => ExtendedColorType::Rgba8,
            };
            PngEncoder::new(writer).write_image(buffer.as_raw(), width, height, color)?;
        }
        OutputFormat::Jpeg => {
            let rgb = to_rgb(buffer);
            JpegEncoder::new_with_quality(writer, jpeg_quality).write_image(
                &rgb,
                width,
                height,
                ExtendedColorType::Rgb8,
            )?;
        }
        OutputFormat::Gif => {
            let rgba = RgbaImage::from_raw(width, height, to_rgba(buffer)).ok_or_else(|| {
                CodecError::UnsupportedFormat("GIF frame size mismatch".to_string())
            })?;
            let mut encoder = GifEncoder::new(writer);
            encoder.encode_frame(Frame::new(rgba))?;
        }
    }

    Ok(())
}

/// Encode a pixel buffer into memory.
pub fn encode_to_vec(
    buffer: &PixelBuffer,
    format: OutputFormat,
    jpeg_quality: u8,
) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    encode(buffer, format, jpeg_quality, &mut out)?;
    Ok(out)
}

/// Output file name: the stem with the format extension appended.
pub fn output_path(stem: impl AsRef<Path>, format: OutputFormat) -> PathBuf {
    let mut name = stem.as_ref().as_os_str().to_owned();
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

fn to_rgb(buffer: &PixelBuffer) -> Vec<u8> {
    if buffer.channels() == 3 {
        return buffer.as_raw().to_vec();
    }
    buffer
        .as_raw()
        .chunks_exact(buffer.channels())
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect()
}

fn to_rgba(buffer: &PixelBuffer) -> Vec<u8> {
    if buffer.channels() == 4 {
        return buffer.as_raw().to_vec();
    }
    buffer
        .as_raw()
        .chunks_exact(buffer.channels())
        .flat_map(|px| [px[0], px[1], px[2], 255])
        .collect()
}
