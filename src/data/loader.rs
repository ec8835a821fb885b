//! Dataset Loader Module
//! Reads the true/fake CSV pair with Polars and builds the labeled, shuffled table.

use crate::data::processor::{DataProcessor, Label, DEFAULT_SEED};
use polars::prelude::*;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// File holding real news articles inside the data directory.
pub const TRUE_FILE: &str = "true.csv";
/// File holding fake news articles inside the data directory.
pub const FAKE_FILE: &str = "fake.csv";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("No such file or not readable: {}: {source}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to load CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("Failed to combine datasets: {0}")]
    Combine(#[from] PolarsError),
}

/// Combined table plus the size of each labeled source.
#[derive(Debug, Clone)]
pub struct LabeledDataset {
    pub frame: DataFrame,
    pub real_count: usize,
    pub fake_count: usize,
}

impl LabeledDataset {
    pub fn total(&self) -> usize {
        self.frame.height()
    }
}

/// Loads the true/fake CSV pair from a directory.
pub struct DataLoader {
    data_dir: PathBuf,
    seed: u64,
}

impl DataLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn true_path(&self) -> PathBuf {
        self.data_dir.join(TRUE_FILE)
    }

    pub fn fake_path(&self) -> PathBuf {
        self.data_dir.join(FAKE_FILE)
    }

    /// Load both sources, tag them, concatenate and shuffle.
    ///
    /// Fails with [`LoaderError::MissingFile`] before any parsing if either
    /// file cannot be opened.
    pub fn load(&self) -> Result<LabeledDataset, LoaderError> {
        let true_path = self.true_path();
        let fake_path = self.fake_path();

        let true_df = Self::load_csv(&true_path)?;
        let fake_df = Self::load_csv(&fake_path)?;

        let real_count = true_df.height();
        let fake_count = fake_df.height();

        let true_df = DataProcessor::attach_label(true_df, Label::Real)?;
        let fake_df = DataProcessor::attach_label(fake_df, Label::Fake)?;

        let combined = DataProcessor::concat_sources(true_df, fake_df)?;
        let frame = DataProcessor::shuffle_rows(&combined, self.seed)?;

        info!(real_count, fake_count, total = frame.height(), seed = self.seed, "dataset loaded");

        Ok(LabeledDataset {
            frame,
            real_count,
            fake_count,
        })
    }

    /// Read one CSV file using Polars.
    pub fn load_csv(path: &Path) -> Result<DataFrame, LoaderError> {
        let file = Self::open_regular_file(path)?;

        debug!(path = %path.display(), "reading csv");

        // Parse the handle that passed the check, not the path again.
        CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .into_reader_with_file_handle(file)
            .finish()
            .map_err(|source| LoaderError::Csv {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Open `path` and make sure it is a regular file.
    ///
    /// Absent paths, permission failures and non-files (e.g. a directory
    /// named `true.csv`) all become [`LoaderError::MissingFile`].
    fn open_regular_file(path: &Path) -> Result<File, LoaderError> {
        let missing = |source: io::Error| LoaderError::MissingFile {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(missing)?;
        let metadata = file.metadata().map_err(missing)?;
        if !metadata.is_file() {
            return Err(missing(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }

        Ok(file)
    }
}

/// Convenience wrapper used by the entry point.
pub fn load_labeled_dataset(
    data_dir: impl Into<PathBuf>,
    seed: u64,
) -> Result<LabeledDataset, LoaderError> {
    DataLoader::new(data_dir).with_seed(seed).load()
}
