//! Stats module - descriptive summary of the combined table

mod calculator;

pub use calculator::{DatasetSummary, LabelDistribution, StatsCalculator};
