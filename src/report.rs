//! Text Report Module
//! Prints dataset diagnostics to any writer and exports the summary as JSON.

use crate::data::LabeledDataset;
use crate::stats::DatasetSummary;
use polars::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const RULE_WIDTH: usize = 60;

/// Writes the human-readable diagnostics of a loaded dataset.
pub struct ReportPrinter;

impl ReportPrinter {
    /// Per-source counts printed right after loading.
    pub fn print_load_summary<W: Write>(out: &mut W, dataset: &LabeledDataset) -> io::Result<()> {
        writeln!(out, "✓ Loaded {} real articles", dataset.real_count)?;
        writeln!(out, "✓ Loaded {} fake articles", dataset.fake_count)?;
        writeln!(out, "✓ Total: {} articles\n", dataset.total())
    }

    /// Full dataset overview: shape, columns, sample rows, dtypes, nulls, labels.
    pub fn print_dataset_info<W: Write>(
        out: &mut W,
        df: &DataFrame,
        summary: &DatasetSummary,
        sample_rows: usize,
    ) -> io::Result<()> {
        let heavy = "=".repeat(RULE_WIDTH);
        writeln!(out, "{heavy}")?;
        writeln!(out, "DATASET INFORMATION")?;
        writeln!(out, "{heavy}")?;

        writeln!(
            out,
            "\nShape: {} rows × {} columns",
            summary.rows,
            summary.column_count()
        )?;
        writeln!(out, "\nColumns: {:?}", summary.columns)?;

        Self::section(out, &format!("First {sample_rows} rows:"))?;
        writeln!(out, "{}", df.head(Some(sample_rows)))?;

        Self::section(out, "Data types:")?;
        let width = Self::name_width(summary.dtypes.iter().map(|(name, _)| name));
        for (name, dtype) in &summary.dtypes {
            writeln!(out, "{name:<width$}    {dtype}")?;
        }

        Self::section(out, "Missing values:")?;
        if summary.has_missing() {
            let width = Self::name_width(summary.missing.iter().map(|(name, _)| name));
            for (name, nulls) in &summary.missing {
                writeln!(out, "{name:<width$}    {nulls}")?;
            }
        } else {
            writeln!(out, "No missing values")?;
        }

        Self::section(out, "Label distribution:")?;
        writeln!(out, "label")?;
        for (label, count) in &summary.labels.counts {
            writeln!(out, "{label:<5}    {count}")?;
        }

        let balance: Vec<String> = summary
            .labels
            .proportions()
            .iter()
            .map(|(label, share)| format!("{label}: {share:.4}"))
            .collect();
        writeln!(out, "\nBalance: {{{}}}", balance.join(", "))
    }

    fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
        let light = "-".repeat(RULE_WIDTH);
        writeln!(out, "\n{light}")?;
        writeln!(out, "{title}")?;
        writeln!(out, "{light}")
    }

    fn name_width<'a>(names: impl Iterator<Item = &'a String>) -> usize {
        names.map(|name| name.chars().count()).max().unwrap_or(0)
    }

    /// Write the summary as pretty JSON.
    pub fn write_summary_json(summary: &DatasetSummary, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, summary)?;
        writer.flush()?;
        Ok(())
    }
}
