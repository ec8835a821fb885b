//! Data Processor Module
//! Label tagging, concatenation and the seeded row shuffle.

use polars::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Name of the binary class column appended to every source.
pub const LABEL_COLUMN: &str = "label";

/// Seed used for the row shuffle unless overridden.
pub const DEFAULT_SEED: u64 = 42;

/// Binary article class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    Fake,
    Real,
}

impl Label {
    /// Both classes in ascending label order.
    pub const ALL: [Label; 2] = [Label::Fake, Label::Real];

    pub fn value(self) -> i64 {
        match self {
            Label::Fake => 0,
            Label::Real => 1,
        }
    }

    /// Category name shown on charts.
    pub fn display_name(self) -> &'static str {
        match self {
            Label::Fake => "Fake News",
            Label::Real => "Real News",
        }
    }
}

/// Handles the row-level transformations of the combined table.
pub struct DataProcessor;

impl DataProcessor {
    /// Append (or overwrite) the label column with a constant class value.
    pub fn attach_label(mut df: DataFrame, label: Label) -> PolarsResult<DataFrame> {
        let values = vec![label.value(); df.height()];
        df.with_column(Column::new(LABEL_COLUMN.into(), values))?;
        Ok(df)
    }

    /// Stack the real rows on top of the fake rows.
    ///
    /// Columns present in only one source are kept and null-filled for the
    /// other; mismatched dtypes are widened to a common supertype.
    pub fn concat_sources(real: DataFrame, fake: DataFrame) -> PolarsResult<DataFrame> {
        let args = UnionArgs {
            rechunk: true,
            to_supertypes: true,
            ..Default::default()
        };

        concat_lf_diagonal([real.lazy(), fake.lazy()], args)?.collect()
    }

    /// Deterministic permutation of `0..len` for the given seed.
    pub fn permutation(len: usize, seed: u64) -> Vec<IdxSize> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut indices: Vec<IdxSize> = (0..len as IdxSize).collect();
        indices.shuffle(&mut rng);
        indices
    }

    /// Reorder all rows using the seeded permutation.
    pub fn shuffle_rows(df: &DataFrame, seed: u64) -> PolarsResult<DataFrame> {
        let indices = IdxCa::from_vec("idx".into(), Self::permutation(df.height(), seed));
        df.take(&indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(ids: &[i64]) -> DataFrame {
        DataFrame::new(vec![Column::new("id".into(), ids.to_vec())]).unwrap()
    }

    fn ids(df: &DataFrame) -> Vec<i64> {
        df.column("id")
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .flatten()
            .collect()
    }

    #[test]
    fn test_label_values() {
        assert_eq!(Label::Fake.value(), 0);
        assert_eq!(Label::Real.value(), 1);
        assert_eq!(Label::Real.display_name(), "Real News");
        assert!(Label::ALL[0] < Label::ALL[1]);
    }

    #[test]
    fn test_attach_label_fills_every_row() {
        let df = DataProcessor::attach_label(frame(&[10, 11, 12]), Label::Real).unwrap();
        let labels: Vec<i64> = df
            .column(LABEL_COLUMN)
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(labels, vec![1, 1, 1]);
    }

    #[test]
    fn test_concat_keeps_source_order() {
        let df = DataProcessor::concat_sources(frame(&[1, 2]), frame(&[3])).unwrap();
        assert_eq!(ids(&df), vec![1, 2, 3]);
    }

    #[test]
    fn test_permutation_is_reproducible() {
        let a = DataProcessor::permutation(50, DEFAULT_SEED);
        let b = DataProcessor::permutation(50, DEFAULT_SEED);
        assert_eq!(a, b);

        let mut sorted = a.clone();
        sorted.sort();
        assert_eq!(sorted, (0..50).collect::<Vec<IdxSize>>());
    }

    #[test]
    fn test_permutation_depends_on_seed() {
        let a = DataProcessor::permutation(50, 1);
        let b = DataProcessor::permutation(50, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_shuffle_rows_preserves_multiset() {
        let df = frame(&(0..20).collect::<Vec<i64>>());
        let shuffled = DataProcessor::shuffle_rows(&df, DEFAULT_SEED).unwrap();

        assert_eq!(shuffled.height(), 20);
        let mut values = ids(&shuffled);
        assert_ne!(values, ids(&df));
        values.sort();
        assert_eq!(values, ids(&df));
    }

    #[test]
    fn test_shuffle_empty_frame() {
        let df = frame(&[]);
        let shuffled = DataProcessor::shuffle_rows(&df, DEFAULT_SEED).unwrap();
        assert_eq!(shuffled.height(), 0);
    }
}
