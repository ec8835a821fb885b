//! Distribution Window
//! Single eframe window showing the class balance bar chart.

use crate::charts::{ChartError, ChartPlotter, LabelChart};
use eframe::egui;
use tracing::info;

pub const WINDOW_TITLE: &str = "Fake News Dataset Explorer";

/// Main application window.
pub struct DistributionApp {
    chart: LabelChart,
}

impl DistributionApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, chart: LabelChart) -> Self {
        Self { chart }
    }
}

impl eframe::App for DistributionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ChartPlotter::draw_label_chart(ui, &self.chart);
        });
    }
}

/// Open the chart window and block until it is closed.
pub fn show_distribution_window(chart: LabelChart) -> Result<(), ChartError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    info!("opening chart window");

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(DistributionApp::new(cc, chart)))),
    )
    .map_err(|e| ChartError::Window(e.to_string()))
}
