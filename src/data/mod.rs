//! Data module - CSV loading and label processing

mod loader;
mod processor;

pub use loader::{load_labeled_dataset, LabeledDataset, LoaderError};
pub use processor::{Label, DEFAULT_SEED, LABEL_COLUMN};

#[cfg(test)]
pub(crate) use loader::tests as fixtures;
