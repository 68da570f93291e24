use quadtree_compress::BufferError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressError {
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Compression task failed: {0}")]
    Task(String),
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unrecognized image format")]
    UnknownFormat,

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid pixel buffer: {0}")]
    Buffer(#[from] BufferError),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid output format: {0} (expected png, jpg or gif)")]
pub struct ParseFormatError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_error_unknown_format() {
        let error = CodecError::UnknownFormat;
        assert_eq!(error.to_string(), "Unrecognized image format");
    }

    #[test]
    fn test_codec_error_unsupported_format() {
        let error = CodecError::UnsupportedFormat("WebP".to_string());
        assert_eq!(error.to_string(), "Unsupported image format: WebP");
    }

    #[test]
    fn test_codec_error_from_buffer_error() {
        let error: CodecError = BufferError::UnsupportedChannels(2).into();
        assert_eq!(
            error.to_string(),
            "Invalid pixel buffer: unsupported channel count 2 (expected 3 or 4)"
        );
    }

    #[test]
    fn test_codec_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.png");
        let error: CodecError = io.into();
        assert_eq!(error.to_string(), "IO error: missing.png");
    }

    #[test]
    fn test_compress_error_from_codec_error() {
        let error: CompressError = CodecError::UnknownFormat.into();
        match error {
            CompressError::Codec(_) => {}
            _ => panic!("Expected Codec variant"),
        }
        assert_eq!(
            CompressError::from(CodecError::UnknownFormat).to_string(),
            "Codec error: Unrecognized image format"
        );
    }

    #[test]
    fn test_compress_error_task() {
        let error = CompressError::Task("worker panicked".to_string());
        assert_eq!(
            error.to_string(),
            "Compression task failed: worker panicked"
        );
    }

    #[test]
    fn test_parse_format_error() {
        let error = ParseFormatError("bmp".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid output format: bmp (expected png, jpg or gif)"
        );
    }
}
