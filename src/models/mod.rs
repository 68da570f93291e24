pub mod config;
pub mod output_format;

pub use config::AppConfig;
pub use output_format::OutputFormat;
