use crate::models::OutputFormat;
use quadtree_compress::{CompressOptions, Parallelism, DEFAULT_THRESHOLD};
use serde::Deserialize;
use std::path::Path;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Maximum mean absolute error of a flat region
    #[serde(default = "default_threshold")]
    pub threshold: u32,

    /// Worker threads for compression (None = one per core)
    #[serde(default)]
    pub threads: Option<usize>,

    /// JPEG encoder quality, 1-100
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,

    /// Output format when none is given on the command line
    /// (None = same as the input)
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

fn default_threshold() -> u32 {
    DEFAULT_THRESHOLD
}

fn default_jpeg_quality() -> u8 {
    75
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            threads: None,
            jpeg_quality: default_jpeg_quality(),
            format: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults when
    /// no path is given or the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        threshold = config.threshold,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        let mut config: Self = serde_yaml::from_str(content)?;
        config.jpeg_quality = config.jpeg_quality.clamp(1, 100);
        Ok(config)
    }

    /// Engine options derived from this configuration.
    pub fn compress_options(&self) -> CompressOptions {
        let parallelism = match self.threads {
            Some(1) => Parallelism::Sequential,
            Some(n) => Parallelism::Threads(n),
            None => Parallelism::Auto,
        };
        CompressOptions::new(self.threshold).parallelism(parallelism)
    }
}
