use anyhow::{anyhow, Result};
use eframe::egui;

use crate::chart::Chart;
use crate::state::ViewerState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ChartViewerApp {
    pub state: ViewerState,
}

impl ChartViewerApp {
    pub fn new(chart: Chart) -> Self {
        Self {
            state: ViewerState::new(chart),
        }
    }
}

impl eframe::App for ChartViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: series ----
        egui::SidePanel::left("series_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_plot(ui, &self.state);
        });
    }
}

/// Open a window showing `chart` and block until the user closes it.
///
/// Can be called repeatedly; each call opens a new window.
pub fn show(chart: Chart) -> Result<()> {
    let title = chart.title.clone();
    log::info!(
        "Showing chart '{title}' ({} series, {} points)",
        chart.series.len(),
        chart.point_count()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        run_and_return: true,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(ChartViewerApp::new(chart)))),
    )
    .map_err(|e| anyhow!("chart window '{title}' failed: {e}"))
}
