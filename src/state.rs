use std::path::Path;

use eframe::egui::Color32;

use crate::chart::Chart;
use crate::color::generate_palette;
use crate::data::loader;
use crate::data::model::Series;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// The full UI state of one chart window, independent of rendering.
pub struct ViewerState {
    /// The chart being shown. Series added from the UI land here too.
    pub chart: Chart,

    /// Per-series visibility, index-aligned with `chart.series`.
    pub visible: Vec<bool>,

    /// Per-series colour, index-aligned with `chart.series`.
    pub colors: Vec<Color32>,

    pub show_legend: bool,
    pub show_grid: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl ViewerState {
    pub fn new(chart: Chart) -> Self {
        let n = chart.series.len();
        let show_legend = chart.legend;
        let show_grid = chart.grid;
        Self {
            chart,
            visible: vec![true; n],
            colors: generate_palette(n),
            show_legend,
            show_grid,
            status_message: None,
        }
    }

    /// Add a series and give every series a fresh colour.
    pub fn add_series(&mut self, series: Series) {
        self.chart.add_series(series);
        self.visible.push(true);
        self.colors = generate_palette(self.chart.series.len());
    }

    /// Load an `<iteration>;<value>` file and add it, labelled by file stem.
    pub fn load_series_file(&mut self, path: &Path) {
        match loader::read_pairs(path) {
            Ok(series) => {
                log::info!("Loaded {} points from {}", series.len(), path.display());
                self.add_series(series);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    pub fn toggle_series(&mut self, idx: usize) {
        if let Some(v) = self.visible.get_mut(idx) {
            *v = !*v;
        }
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Iterate over the series currently switched on, with their colour.
    pub fn visible_series(&self) -> impl Iterator<Item = (&Series, Color32)> + '_ {
        self.chart
            .series
            .iter()
            .zip(&self.visible)
            .zip(&self.colors)
            .filter(|((_, visible), _)| **visible)
            .map(|((series, _), color)| (series, *color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn two_series() -> ViewerState {
        let mut chart = Chart::new("t", "N", "Squared differences").with_legend();
        chart.add_series(Series::indexed("MC1", vec![1.0]));
        chart.add_series(Series::indexed("MC2", vec![2.0]));
        ViewerState::new(chart)
    }

    #[test]
    fn starts_with_everything_visible() {
        let state = two_series();
        assert_eq!(state.visible_count(), 2);
        assert_eq!(state.colors.len(), 2);
        assert!(state.show_legend);
        assert!(!state.show_grid);
    }

    #[test]
    fn toggling_hides_a_series() {
        let mut state = two_series();
        state.toggle_series(0);
        let labels: Vec<_> = state.visible_series().map(|(s, _)| s.label.clone()).collect();
        assert_eq!(labels, ["MC2"]);
        state.toggle_series(7);
        assert_eq!(state.visible_count(), 1);
    }

    #[test]
    fn loading_a_file_adds_a_series() {
        let mut file = tempfile::Builder::new().prefix("MC3").tempfile().unwrap();
        writeln!(file, "10000;0.5").unwrap();
        writeln!(file, "20000;0.25").unwrap();

        let mut state = two_series();
        state.load_series_file(file.path());
        assert_eq!(state.chart.series.len(), 3);
        assert_eq!(state.colors.len(), 3);
        assert!(state.chart.series[2].label.starts_with("MC3"));
        assert!(state.status_message.is_none());
    }

    #[test]
    fn load_failure_sets_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = two_series();
        state.load_series_file(&dir.path().join("missing"));
        assert_eq!(state.chart.series.len(), 2);
        assert!(state.status_message.unwrap().starts_with("Error"));
    }
}
