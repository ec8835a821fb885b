//! Fake News EDA - Real/Fake News Dataset Explorer
//!
//! Loads the labeled news CSV pair, prints descriptive diagnostics and
//! shows the class balance as a bar chart.

mod charts;
mod config;
mod data;
mod gui;
mod report;
mod stats;

use anyhow::Context;
use charts::{LabelChart, StaticChartRenderer};
use clap::Parser;
use config::AppConfig;
use data::{load_labeled_dataset, LoaderError};
use report::ReportPrinter;
use stats::StatsCalculator;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

/// How a failed run is reported to the user.
#[derive(Debug, PartialEq, Eq)]
enum FailureKind {
    MissingData,
    Unexpected,
}

fn classify_failure(err: &anyhow::Error) -> FailureKind {
    let missing = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<LoaderError>())
        .any(|e| matches!(e, LoaderError::MissingFile { .. }));

    if missing {
        FailureKind::MissingData
    } else {
        FailureKind::Unexpected
    }
}

/// Load, report, visualize.
fn run<W: Write>(config: &AppConfig, out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "Loading datasets...")?;
    let dataset = load_labeled_dataset(&config.data_dir, config.seed)?;
    ReportPrinter::print_load_summary(out, &dataset)?;

    let summary = StatsCalculator::summarize(&dataset.frame)?;
    ReportPrinter::print_dataset_info(out, &dataset.frame, &summary, config.sample_rows)?;

    if let Some(path) = &config.summary_json {
        ReportPrinter::write_summary_json(&summary, path)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
        info!(path = %path.display(), "summary written");
    }

    writeln!(out, "\nGenerating visualization...")?;
    out.flush()?;
    let chart = LabelChart::from_distribution(&summary.labels);

    if let Some(path) = &config.save_chart {
        StaticChartRenderer::render_png(&chart, path, charts::DEFAULT_SIZE)?;
        writeln!(out, "Chart saved to {}", path.display())?;
        if config.open {
            StaticChartRenderer::open_in_viewer(path)?;
        }
    }

    if !config.no_window {
        gui::show_distribution_window(chart)?;
    }

    Ok(())
}

/// Print the user-facing message for a failed run.
fn report_failure<W: Write>(err: &anyhow::Error, data_dir: &Path, out: &mut W) -> io::Result<()> {
    match classify_failure(err) {
        FailureKind::MissingData => {
            writeln!(out, "\n❌ Error: Could not find data files!")?;
            writeln!(out, "   {err}")?;
            writeln!(out, "\nMake sure you've downloaded the dataset:")?;
            writeln!(out, "   1. Set up Kaggle API credentials")?;
            writeln!(out, "   2. Run: kaggle datasets download -d <dataset-name>")?;
            writeln!(out, "   3. Extract files to {}/ directory", data_dir.display())
        }
        FailureKind::Unexpected => writeln!(out, "\n❌ Unexpected error: {err:#}"),
    }
}

fn main() {
    let config = AppConfig::parse();
    config::init_logging(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = run(&config, &mut out) {
        debug!(error = %err, "run failed");
        // Nothing else to report to if stdout itself is gone.
        let _ = report_failure(&err, &config.data_dir, &mut out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use tempfile::TempDir;

    fn config_for(data_dir: &Path, extra: &[&str]) -> AppConfig {
        let dir = data_dir.to_string_lossy().to_string();
        let mut args = vec!["fake_news_eda", "--data-dir", dir.as_str(), "--no-window"];
        args.extend_from_slice(extra);
        AppConfig::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_run_prints_full_report() {
        let dir = fixtures::small_fixture();
        let config = config_for(dir.path(), &[]);

        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Loading datasets..."));
        assert!(text.contains("✓ Total: 5 articles"));
        assert!(text.contains("DATASET INFORMATION"));
        assert!(text.contains("Generating visualization..."));
    }

    #[test]
    fn test_run_writes_summary_json() {
        let dir = fixtures::small_fixture();
        let out_dir = TempDir::new().unwrap();
        let json = out_dir.path().join("summary.json");
        let json_arg = json.to_string_lossy().to_string();
        let config = config_for(dir.path(), &["--summary-json", json_arg.as_str()]);

        run(&config, &mut Vec::new()).unwrap();

        assert!(json.exists());
    }

    #[test]
    fn test_missing_data_stops_before_chart() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("data");
        let png = root.path().join("chart.png");
        let png_arg = png.to_string_lossy().to_string();
        let config = config_for(&missing, &["--save-chart", png_arg.as_str()]);

        let mut out = Vec::new();
        let err = run(&config, &mut out).unwrap_err();

        assert_eq!(classify_failure(&err), FailureKind::MissingData);
        assert!(!png.exists());
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("Generating visualization..."));
    }

    #[test]
    fn test_missing_data_message_has_remediation() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("data");
        let config = config_for(&missing, &[]);
        let err = run(&config, &mut Vec::new()).unwrap_err();

        let mut out = Vec::new();
        report_failure(&err, &config.data_dir, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Could not find data files!"));
        assert!(text.contains(&missing.join("true.csv").display().to_string()));
        assert!(text.contains("kaggle datasets download"));
    }

    #[test]
    fn test_other_errors_are_generic() {
        let err = anyhow::anyhow!("disk on fire");
        assert_eq!(classify_failure(&err), FailureKind::Unexpected);

        let mut out = Vec::new();
        report_failure(&err, Path::new("data"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Unexpected error: disk on fire"));
    }

    #[test]
    fn test_wrapped_missing_file_is_recognised() {
        let root = TempDir::new().unwrap();
        let err = load_labeled_dataset(root.path(), 42).unwrap_err();
        let wrapped = anyhow::Error::new(err).context("while preparing report");

        assert_eq!(classify_failure(&wrapped), FailureKind::MissingData);
    }
}
