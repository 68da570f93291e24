use crate::error::ParseFormatError;
use image::ImageFormat;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Image formats quadpress can read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    #[serde(rename = "jpg", alias = "jpeg")]
    Jpeg,
    Gif,
}

impl OutputFormat {
    /// File extension appended to the output name.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Gif => "gif",
        }
    }

    /// Map a detected input format, if it is one we support.
    pub fn from_image_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Png => Some(OutputFormat::Png),
            ImageFormat::Jpeg => Some(OutputFormat::Jpeg),
            ImageFormat::Gif => Some(OutputFormat::Gif),
            _ => None,
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Gif => ImageFormat::Gif,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "gif" => Ok(OutputFormat::Gif),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!("png".parse(), Ok(OutputFormat::Png));
        assert_eq!("jpg".parse(), Ok(OutputFormat::Jpeg));
        assert_eq!("JPEG".parse(), Ok(OutputFormat::Jpeg));
        assert_eq!("gif".parse(), Ok(OutputFormat::Gif));
    }

    #[test]
    fn test_parse_invalid_format() {
        let result: Result<OutputFormat, _> = "webp".parse();
        assert_eq!(result, Err(ParseFormatError("webp".to_string())));
    }

    #[test]
    fn test_extension_and_display() {
        assert_eq!(OutputFormat::Jpeg.extension(), "jpg");
        assert_eq!(OutputFormat::Gif.to_string(), "gif");
    }

    #[test]
    fn test_image_format_mapping() {
        for format in [OutputFormat::Png, OutputFormat::Jpeg, OutputFormat::Gif] {
            assert_eq!(
                OutputFormat::from_image_format(format.image_format()),
                Some(format)
            );
        }
        assert_eq!(OutputFormat::from_image_format(ImageFormat::Bmp), None);
    }

    #[test]
    fn test_deserialize() {
        let formats: Vec<OutputFormat> = serde_yaml::from_str("[png, jpg, jpeg, gif]").unwrap();
        assert_eq!(
            formats,
            vec![
                OutputFormat::Png,
                OutputFormat::Jpeg,
                OutputFormat::Jpeg,
                OutputFormat::Gif
            ]
        );
    }
}
