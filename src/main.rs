use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quadpress::models::{AppConfig, OutputFormat};
use quadpress::services::CompressionService;

#[derive(Parser)]
#[command(name = "quadpress")]
#[command(about = "Lossy image compression by quadtree decomposition")]
struct Cli {
    /// Input image (PNG, JPEG or GIF)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file name without extension
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Output format: png, jpg or gif (default: same as input)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Maximum mean absolute error of a flat region
    #[arg(short, long)]
    threshold: Option<u32>,

    /// Worker threads (default: one per core, 1 = sequential)
    #[arg(long, value_parser = clap::value_parser!(usize))]
    threads: Option<usize>,

    /// JPEG quality, 1-100
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    jpeg_quality: Option<u8>,

    /// YAML configuration file (falls back to $CONFIG_FILE)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Command line values take precedence over the config file.
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(threads) = self.threads {
            config.threads = Some(threads.max(1));
        }
        if let Some(quality) = self.jpeg_quality {
            config.jpeg_quality = quality;
        }
        if self.format.is_some() {
            config.format = self.format;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quadpress=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_file = cli
        .config
        .clone()
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));

    let mut config = AppConfig::load(config_file.as_deref());
    cli.apply_overrides(&mut config);

    let service = Arc::new(CompressionService::new(&config));
    let outcome = service
        .compress_file_async(cli.input.clone(), cli.output.clone(), cli.format)
        .await?;

    println!(
        "Compressed {}x{} image into {} regions in {:.2?}",
        outcome.image.width,
        outcome.image.height,
        outcome.image.report.leaf_count,
        outcome.image.elapsed
    );
    println!("Saved to {}", outcome.output_path.display());

    Ok(())
}
