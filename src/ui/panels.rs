use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Left side panel – series list and statistics
// ---------------------------------------------------------------------------

/// Render the left panel: one checkbox per series, then a stats table.
pub fn side_panel(ui: &mut Ui, state: &mut ViewerState) {
    ui.heading("Series");
    ui.separator();

    if state.chart.series.is_empty() {
        ui.label("No series loaded.");
        return;
    }

    let mut toggled = None;
    ScrollArea::vertical()
        .id_salt("series_list")
        .max_height(ui.available_height() * 0.5)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            for (idx, series) in state.chart.series.iter().enumerate() {
                let text = RichText::new(&series.label).color(state.colors[idx]);
                let mut checked = state.visible[idx];
                if ui.checkbox(&mut checked, text).changed() {
                    toggled = Some(idx);
                }
            }
        });
    if let Some(idx) = toggled {
        state.toggle_series(idx);
    }

    ui.separator();
    ui.strong("Statistics");
    stats_table(ui, state);
}

fn stats_table(ui: &mut Ui, state: &ViewerState) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Series", "Points", "Min", "Max"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for series in &state.chart.series {
                let (min, max) = series
                    .y_range()
                    .map(|(lo, hi)| (format!("{lo:.4e}"), format!("{hi:.4e}")))
                    .unwrap_or_else(|| ("–".into(), "–".into()));
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&series.label);
                    });
                    row.col(|ui| {
                        ui.label(series.len().to_string());
                    });
                    row.col(|ui| {
                        ui.label(&min);
                    });
                    row.col(|ui| {
                        ui.label(&max);
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Add series…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Close").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();

        ui.label(format!(
            "{} series, {} visible",
            state.chart.series.len(),
            state.visible_count()
        ));

        ui.separator();

        if ui.selectable_label(state.show_legend, "Legend").clicked() {
            state.show_legend = !state.show_legend;
        }
        if ui.selectable_label(state.show_grid, "Grid").clicked() {
            state.show_grid = !state.show_grid;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut ViewerState) {
    let file = rfd::FileDialog::new()
        .set_title("Add measurement series")
        .pick_file();

    if let Some(path) = file {
        state.load_series_file(&path);
    }
}
