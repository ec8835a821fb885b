//! Command line configuration.
//!
//! Running without arguments loads `data/true.csv` and `data/fake.csv`,
//! prints the report and opens the chart window.

use crate::data::DEFAULT_SEED;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(name = "fake_news_eda", version, about = "Explore the real/fake news dataset")]
pub struct AppConfig {
    /// Directory containing true.csv and fake.csv
    #[arg(long, env = "FAKE_NEWS_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Seed for the row shuffle
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of sample rows printed in the report
    #[arg(long, default_value_t = 3)]
    pub sample_rows: usize,

    /// Skip the interactive chart window
    #[arg(long)]
    pub no_window: bool,

    /// Also write the chart to this PNG file
    #[arg(long, value_name = "PNG")]
    pub save_chart: Option<PathBuf>,

    /// Open the saved PNG with the system viewer
    #[arg(long, requires = "save_chart")]
    pub open: bool,

    /// Write the dataset summary as JSON
    #[arg(long, value_name = "PATH")]
    pub summary_json: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    /// `RUST_LOG` wins; otherwise warn, or debug with `--verbose`.
    pub fn log_filter(&self) -> EnvFilter {
        let default = if self.verbose { "debug" } else { "warn" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    }
}

/// Install the stderr tracing subscriber.
pub fn init_logging(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
