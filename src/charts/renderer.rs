//! Static Chart Renderer
//! Writes the class balance chart to a PNG file with plotters.
//!
//! Layout:
//! 1. Bold title centered on top
//! 2. One bar per label, fake first, with a black outline
//! 3. Count annotation above each bar
//! 4. Axis captions "Article Type" / "Count"

use crate::charts::{format_count, LabelChart};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to render chart: {0}")]
    Render(String),
    #[error("Failed to display chart window: {0}")]
    Window(String),
    #[error("Failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn render_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Render(e.to_string())
}

/// Default output size, matching an 8x6 figure at 100 DPI.
pub const DEFAULT_SIZE: (u32, u32) = (800, 600);

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the chart into `path` as PNG.
    pub fn render_png(chart: &LabelChart, path: &Path, size: (u32, u32)) -> Result<(), ChartError> {
        debug!(path = %path.display(), ?size, "rendering static chart");

        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let n_bars = chart.bars.len().max(1) as u32;
        let y_top = Self::y_axis_top(chart.max_count());
        let names = chart.category_names();

        let mut ctx = ChartBuilder::on(&root)
            .caption(
                &chart.title,
                ("sans-serif", 24).into_font().style(FontStyle::Bold),
            )
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d((0u32..n_bars).into_segmented(), 0u64..y_top)
            .map_err(render_err)?;

        ctx.configure_mesh()
            .disable_x_mesh()
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .axis_desc_style(("sans-serif", 16))
            .x_labels(names.len())
            .x_label_formatter(&|v: &SegmentValue<u32>| match v {
                SegmentValue::CenterOf(i) => names
                    .get(*i as usize)
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .y_label_formatter(&|v: &u64| format_count(*v as usize))
            .draw()
            .map_err(render_err)?;

        let label_style = TextStyle::from(("sans-serif", 16).into_font().style(FontStyle::Bold))
            .pos(Pos::new(HPos::Center, VPos::Bottom));

        for (i, bar) in chart.bars.iter().enumerate() {
            let i = i as u32;
            let count = bar.count as u64;
            let corners = [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), count)];
            let fill = RGBColor(bar.rgb.0, bar.rgb.1, bar.rgb.2).mix(0.8);

            let mut body = Rectangle::new(corners.clone(), fill.filled());
            body.set_margin(0, 0, 25, 25);
            let mut outline = Rectangle::new(corners, BLACK.stroke_width(1));
            outline.set_margin(0, 0, 25, 25);

            ctx.draw_series([body, outline]).map_err(render_err)?;
            ctx.draw_series(std::iter::once(Text::new(
                format_count(bar.count),
                (SegmentValue::CenterOf(i), count),
                label_style.clone(),
            )))
            .map_err(render_err)?;
        }

        root.present().map_err(render_err)?;
        Ok(())
    }

    /// Y axis upper bound with room for the annotations.
    pub fn y_axis_top(max_count: usize) -> u64 {
        let top = (max_count as f64 * 1.15).ceil() as u64;
        top.max(1)
    }

    /// Open a rendered file with the system viewer.
    pub fn open_in_viewer(path: &Path) -> Result<(), ChartError> {
        open::that(path).map_err(|source| ChartError::Open {
            path: path.display().to_string(),
            source,
        })
    }
}
