//! Chart Plotter Module
//! Draws the interactive class balance chart using egui_plot.

use crate::charts::{format_count, LabelChart};
use egui::{Align2, Color32, RichText};
use egui_plot::{Bar, BarChart, GridMark, Plot, PlotPoint, Text};

const BAR_WIDTH: f64 = 0.6;
const BAR_ALPHA: f32 = 0.8;
/// Head room above the tallest bar for the count annotation.
const Y_PADDING: f64 = 1.12;

/// Creates the class balance visualization with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn bar_color(rgb: (u8, u8, u8)) -> Color32 {
        Color32::from_rgb(rgb.0, rgb.1, rgb.2)
    }

    /// Bars positioned at x = 0, 1, ... in chart order.
    pub fn build_bars(chart: &LabelChart) -> Vec<Bar> {
        chart
            .bars
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                Bar::new(i as f64, bar.count as f64)
                    .width(BAR_WIDTH)
                    .fill(Self::bar_color(bar.rgb).gamma_multiply(BAR_ALPHA))
                    .stroke(egui::Stroke::new(1.0, Color32::BLACK))
                    .name(bar.name)
            })
            .collect()
    }

    /// Draw title plus bar chart with count annotations.
    pub fn draw_label_chart(ui: &mut egui::Ui, chart: &LabelChart) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&chart.title).size(16.0).strong());
        });
        ui.add_space(6.0);

        let names = chart.category_names();
        let n_bars = chart.bars.len();
        let y_top = (chart.max_count() as f64 * Y_PADDING).max(1.0);

        Plot::new("label_distribution")
            .x_axis_label(chart.x_label.clone())
            .y_axis_label(chart.y_label.clone())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show_grid([false, true])
            .include_x(-0.6)
            .include_x(n_bars as f64 - 0.4)
            .include_y(0.0)
            .include_y(y_top)
            .x_grid_spacer(move |_input| {
                (0..n_bars)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if idx >= 0.0 && (idx - mark.value).abs() < f64::EPSILON {
                    names.get(idx as usize).map(|n| n.to_string()).unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(Self::build_bars(chart)));

                for (i, bar) in chart.bars.iter().enumerate() {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(i as f64, bar.count as f64),
                            RichText::new(format_count(bar.count)).size(13.0).strong(),
                        )
                        .anchor(Align2::CENTER_BOTTOM),
                    );
                }
            });
    }
}
