//! Statistics Calculator Module
//! Descriptive summary of the combined table: shape, dtypes, nulls and class balance.

use crate::data::{Label, LABEL_COLUMN};
use indexmap::IndexMap;
use polars::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Column '{0}' not found in dataset")]
    MissingLabelColumn(String),
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Row count per label value, ordered by label ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelDistribution {
    pub counts: BTreeMap<i64, usize>,
}

impl LabelDistribution {
    pub fn from_values(values: impl IntoIterator<Item = i64>) -> Self {
        let mut counts = BTreeMap::new();
        for value in values {
            *counts.entry(value).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn count(&self, label: Label) -> usize {
        self.counts.get(&label.value()).copied().unwrap_or(0)
    }

    /// Normalized share of each label, same order as `counts`.
    pub fn proportions(&self) -> BTreeMap<i64, f64> {
        let total = self.total();
        if total == 0 {
            return BTreeMap::new();
        }

        self.counts
            .iter()
            .map(|(&label, &count)| (label, count as f64 / total as f64))
            .collect()
    }
}

/// Column-level overview of a table.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub columns: Vec<String>,
    /// Column name to dtype, in column order.
    pub dtypes: IndexMap<String, String>,
    /// Column name to null count, only for columns with at least one null.
    pub missing: IndexMap<String, usize>,
    pub labels: LabelDistribution,
}

impl DatasetSummary {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn has_missing(&self) -> bool {
        !self.missing.is_empty()
    }
}

/// Handles statistical calculations over the combined table.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Build the full summary. The frame is only read.
    pub fn summarize(df: &DataFrame) -> Result<DatasetSummary, StatsError> {
        let columns: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let dtypes = df
            .get_columns()
            .iter()
            .map(|col| (col.name().to_string(), col.dtype().to_string()))
            .collect();

        Ok(DatasetSummary {
            rows: df.height(),
            columns,
            dtypes,
            missing: Self::missing_values(df),
            labels: Self::label_distribution(df)?,
        })
    }

    /// Null count per column, keeping only columns that have nulls.
    pub fn missing_values(df: &DataFrame) -> IndexMap<String, usize> {
        df.get_columns()
            .iter()
            .map(|col| (col.name().to_string(), col.null_count()))
            .filter(|(_, nulls)| *nulls > 0)
            .collect()
    }

    /// Count rows per value of the label column.
    pub fn label_distribution(df: &DataFrame) -> Result<LabelDistribution, StatsError> {
        let column = df
            .column(LABEL_COLUMN)
            .map_err(|_| StatsError::MissingLabelColumn(LABEL_COLUMN.to_string()))?;

        let labels = column.cast(&DataType::Int64)?;
        let values = labels.i64()?;

        Ok(LabelDistribution::from_values(values.into_iter().flatten()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{fixtures, load_labeled_dataset, DEFAULT_SEED};

    #[test]
    fn test_distribution_counts_and_proportions() {
        let dist = LabelDistribution::from_values([1, 0, 1, 1, 0]);

        assert_eq!(dist.count(Label::Fake), 2);
        assert_eq!(dist.count(Label::Real), 3);
        assert_eq!(dist.total(), 5);

        let props = dist.proportions();
        assert!((props[&0] - 0.4).abs() < 1e-12);
        assert!((props[&1] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_empty_distribution() {
        let dist = LabelDistribution::default();
        assert_eq!(dist.total(), 0);
        assert!(dist.proportions().is_empty());
        assert_eq!(dist.count(Label::Real), 0);
    }

    #[test]
    fn test_summarize_loaded_dataset() {
        let dir = fixtures::small_fixture();
        let dataset = load_labeled_dataset(dir.path(), DEFAULT_SEED).unwrap();
        let summary = StatsCalculator::summarize(&dataset.frame).unwrap();

        assert_eq!(summary.rows, 5);
        assert_eq!(summary.columns, vec!["title", "text", "subject", "label"]);
        assert_eq!(summary.column_count(), 4);
        assert!(!summary.has_missing());
        assert_eq!(summary.labels.total(), summary.rows);
        assert_eq!(
            summary.labels.counts,
            BTreeMap::from([(0, 2usize), (1, 3usize)])
        );
        assert!(summary
            .dtypes
            .iter()
            .any(|(name, dtype)| name == "label" && dtype == "i64"));
    }

    #[test]
    fn test_missing_values_reported_per_column() {
        let dir = fixtures::write_fixture(
            "title,subject\nA,politics\nB,\n",
            "title,subject\n,world\n",
        );
        let dataset = load_labeled_dataset(dir.path(), DEFAULT_SEED).unwrap();
        let summary = StatsCalculator::summarize(&dataset.frame).unwrap();

        assert!(summary.has_missing());
        assert_eq!(
            summary.missing,
            IndexMap::from([("title".to_string(), 1), ("subject".to_string(), 1)])
        );
        let order: Vec<&str> = summary.missing.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["title", "subject"]);
    }

    #[test]
    fn test_summarize_does_not_mutate_frame() {
        let dir = fixtures::small_fixture();
        let dataset = load_labeled_dataset(dir.path(), DEFAULT_SEED).unwrap();
        let before = dataset.frame.clone();

        StatsCalculator::summarize(&dataset.frame).unwrap();

        assert!(before.equals_missing(&dataset.frame));
    }

    #[test]
    fn test_missing_label_column() {
        let df = DataFrame::new(vec![Column::new("title".into(), vec!["a", "b"])]).unwrap();
        let err = StatsCalculator::summarize(&df).unwrap_err();
        assert!(matches!(err, StatsError::MissingLabelColumn(_)));
    }
}
