use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::app;
use crate::chart::Chart;
use crate::config::OutputMode;
use crate::export;

/// Final step of every plotting task: consume a finished chart.
pub trait Renderer {
    fn render(&mut self, chart: Chart) -> Result<()>;
}

/// Opens one blocking window per chart.
pub struct WindowRenderer;

impl Renderer for WindowRenderer {
    fn render(&mut self, chart: Chart) -> Result<()> {
        app::show(chart)
    }
}

/// Writes `<dir>/<title-slug>.svg` per chart.
pub struct SvgRenderer {
    dir: PathBuf,
}

impl SvgRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, chart: Chart) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating output directory {}", self.dir.display()))?;
        let path = self
            .dir
            .join(format!("{}.svg", export::file_slug(&chart.title)));
        export::save_svg(&chart, &path)
    }
}

pub fn renderer_for(output: &OutputMode) -> Box<dyn Renderer> {
    match output {
        OutputMode::Display => Box::new(WindowRenderer),
        OutputMode::Save { dir } => Box::new(SvgRenderer::new(dir.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Series;

    #[test]
    fn svg_renderer_names_files_after_titles() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("plots");
        let mut renderer = SvgRenderer::new(&out);

        let mut chart = Chart::new("Recall", "num of files", "recall");
        chart.add_series(Series::indexed("recall", vec![0.01, 0.02]));
        renderer.render(chart).unwrap();

        let names: Vec<_> = std::fs::read_dir(&out)
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, ["recall.svg"]);
    }
}
