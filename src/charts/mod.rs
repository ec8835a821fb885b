//! Charts module - class balance chart model and rendering

mod plotter;
mod renderer;

pub use plotter::ChartPlotter;
pub use renderer::{ChartError, StaticChartRenderer, DEFAULT_SIZE};

use crate::data::Label;
use crate::stats::LabelDistribution;

pub const CHART_TITLE: &str = "Real vs Fake News Distribution";
pub const X_AXIS_LABEL: &str = "Article Type";
pub const Y_AXIS_LABEL: &str = "Count";

/// Bar fill colors as RGB triples.
pub const FAKE_RGB: (u8, u8, u8) = (231, 76, 60); // #e74c3c
pub const REAL_RGB: (u8, u8, u8) = (46, 204, 113); // #2ecc71

/// One category bar.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBar {
    pub name: &'static str,
    pub count: usize,
    pub rgb: (u8, u8, u8),
}

/// Two-bar chart of label counts, ordered by label ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<LabelBar>,
}

impl LabelChart {
    pub fn from_distribution(dist: &LabelDistribution) -> Self {
        let bars = Label::ALL
            .iter()
            .map(|&label| LabelBar {
                name: label.display_name(),
                count: dist.count(label),
                rgb: match label {
                    Label::Fake => FAKE_RGB,
                    Label::Real => REAL_RGB,
                },
            })
            .collect();

        Self {
            title: CHART_TITLE.to_string(),
            x_label: X_AXIS_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
            bars,
        }
    }

    pub fn max_count(&self) -> usize {
        self.bars.iter().map(|b| b.count).max().unwrap_or(0)
    }

    pub fn category_names(&self) -> Vec<&'static str> {
        self.bars.iter().map(|b| b.name).collect()
    }
}

/// Integer with comma thousands separators, e.g. `21,417`.
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
