use crate::error::CompressError;
use crate::models::{AppConfig, OutputFormat};
use crate::services::codec::{self, DecodedImage};
use quadtree_compress::{CompressionReport, Compressor};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of compressing an image held in memory
#[derive(Debug, Clone)]
pub struct CompressedImage {
    pub data: Vec<u8>,
    pub format: OutputFormat,
    pub width: usize,
    pub height: usize,
    pub report: CompressionReport,
    pub elapsed: Duration,
}

/// Result of compressing an image file
#[derive(Debug, Clone)]
pub struct CompressionOutcome {
    pub output_path: PathBuf,
    pub image: CompressedImage,
}

/// Decodes, compresses and re-encodes images
pub struct CompressionService {
    compressor: Compressor,
    jpeg_quality: u8,
    default_format: Option<OutputFormat>,
}

impl CompressionService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            compressor: Compressor::with_options(config.compress_options()),
            jpeg_quality: config.jpeg_quality,
            default_format: config.format,
        }
    }

    pub fn compressor(&self) -> &Compressor {
        &self.compressor
    }

    /// Compress encoded image data.
    ///
    /// The output format falls back to the configured default, then to the
    /// format of the input.
    pub fn compress_bytes(
        &self,
        input: &[u8],
        format: Option<OutputFormat>,
    ) -> Result<CompressedImage, CompressError> {
        let decoded = codec::decode_bytes(input)?;
        self.compress_decoded(decoded, format)
    }

    /// Compress an image file and write `<output_stem>.<ext>`.
    pub fn compress_file(
        &self,
        input: &Path,
        output_stem: &Path,
        format: Option<OutputFormat>,
    ) -> Result<CompressionOutcome, CompressError> {
        let decoded = codec::decode_file(input).map_err(|e| {
            tracing::error!(input = %input.display(), error = %e, "Failed to decode image");
            e
        })?;

        let image = self.compress_decoded(decoded, format)?;
        let output_path = codec::output_path(output_stem, image.format);

        tracing::info!(path = %output_path.display(), "Saving compressed image");
        std::fs::write(&output_path, &image.data).map_err(crate::error::CodecError::from)?;

        Ok(CompressionOutcome { output_path, image })
    }

    /// Compress an image file without blocking the async runtime.
    pub async fn compress_file_async(
        self: Arc<Self>,
        input: PathBuf,
        output_stem: PathBuf,
        format: Option<OutputFormat>,
    ) -> Result<CompressionOutcome, CompressError> {
        tokio::task::spawn_blocking(move || self.compress_file(&input, &output_stem, format))
            .await
            .map_err(|e| CompressError::Task(e.to_string()))?
    }

    fn compress_decoded(
        &self,
        decoded: DecodedImage,
        format: Option<OutputFormat>,
    ) -> Result<CompressedImage, CompressError> {
        let DecodedImage {
            mut buffer,
            format: input_format,
        } = decoded;
        let width = buffer.width();
        let height = buffer.height();

        tracing::info!(image_type = %input_format, "Decoded image");
        tracing::info!(width, height, "Image resolution");
        tracing::info!(
            threshold = self.compressor.options().threshold,
            "Compressing image"
        );

        let start = Instant::now();
        let report = self.compressor.compress(&mut buffer);
        let elapsed = start.elapsed();

        tracing::info!(
            elapsed_ms = elapsed.as_millis() as u64,
            leaves = report.leaf_count,
            splits = report.split_count,
            max_depth = report.max_depth,
            "Compression finished"
        );

        let format = format.or(self.default_format).unwrap_or(input_format);
        let data = codec::encode_to_vec(&buffer, format, self.jpeg_quality)?;

        Ok(CompressedImage {
            data,
            format,
            width,
            height,
            report,
            elapsed,
        })
    }
}
