use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Chart plot (central panel)
// ---------------------------------------------------------------------------

/// Render the chart in the central panel.
pub fn chart_plot(ui: &mut Ui, state: &ViewerState) {
    if state.chart.series.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No series loaded  (File → Add series…)");
        });
        return;
    }

    let mut plot = Plot::new("chart_plot")
        .x_axis_label(state.chart.x_label.clone())
        .y_axis_label(state.chart.y_label.clone())
        .show_grid(state.show_grid)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if state.show_legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for (series, color) in state.visible_series() {
            let points: PlotPoints = series.plot_points().map(|(x, y)| [x, y]).collect();
            let line = Line::new(points)
                .name(&series.label)
                .color(color)
                .width(1.5);
            plot_ui.line(line);
        }
    });
}
