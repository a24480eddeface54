use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::chart::Chart;
use crate::config::{Job, SeriesSpec, Task};
use crate::data::loader;
use crate::data::metrics::{self, PrecisionRecall};
use crate::data::model::Series;
use crate::data::writer;
use crate::render::{renderer_for, Renderer};

/// Run a job, printing text results to stdout.
pub fn run(job: &Job) -> Result<()> {
    let mut renderer = renderer_for(&job.output);
    let stdout = std::io::stdout();
    run_task(&job.task, renderer.as_mut(), &mut stdout.lock())
}

pub fn run_task(task: &Task, renderer: &mut dyn Renderer, out: &mut dyn Write) -> Result<()> {
    match task {
        Task::Overlay {
            series,
            preview,
            x_label,
            y_label,
        } => {
            let chart = overlay_chart(series, *preview, x_label, y_label)?;
            renderer.render(chart)
        }
        Task::Distance { file } => {
            let labeled = loader::read_labeled(file)?;
            let distance = metrics::distance(&labeled.values);
            writeln!(out, "{distance}")?;
            Ok(())
        }
        Task::PrecisionRecall { file, all_relevant } => {
            let relevance = loader::read_relevance(file)?;
            let pr = metrics::precision_recall(&relevance, *all_relevant)
                .with_context(|| format!("scoring {}", file.display()))?;
            log::info!("Scored {} ranked documents from {}", pr.len(), file.display());
            for chart in pr_charts(&pr) {
                renderer.render(chart)?;
            }
            Ok(())
        }
        Task::Measure {
            mc_file,
            reference_file,
            top,
            output,
        } => {
            let out_path = output
                .clone()
                .unwrap_or_else(|| writer::measure_path(mc_file));
            measure(mc_file, reference_file, *top, &out_path)
        }
    }
}

/// Load every file first, then put each on one chart in the given order.
/// Nothing is returned unless all files parse.
pub fn overlay_chart(
    specs: &[SeriesSpec],
    preview: bool,
    x_label: &str,
    y_label: &str,
) -> Result<Chart> {
    let mut chart = Chart::new("Measurement overlay", x_label, y_label);
    for spec in specs {
        let mut series = if preview {
            loader::read_preview(&spec.file)?
        } else {
            loader::read_pairs(&spec.file)?
        };
        log::info!("Loaded {} points for {}", series.len(), spec.label);
        series.label = spec.label.clone();
        chart.add_series(series);
    }
    Ok(chart.with_legend().with_grid())
}

/// Precision vs. rank, recall vs. rank, and the PR curve.
pub fn pr_charts(pr: &PrecisionRecall) -> [Chart; 3] {
    let mut precision = Chart::new("Precision", "num of files", "precision");
    precision.add_series(Series::new(
        "precision",
        pr.file_index.clone(),
        pr.precision.clone(),
    ));

    let mut recall = Chart::new("Recall", "num of files", "recall");
    recall.add_series(Series::new(
        "recall",
        pr.file_index.clone(),
        pr.recall.clone(),
    ));

    let mut curve = Chart::new("Precision-recall curve", "precision", "recall");
    curve.add_series(Series::new(
        "precision-recall",
        pr.precision.clone(),
        pr.recall.clone(),
    ));

    [precision.with_grid(), recall.with_grid(), curve.with_grid()]
}

/// Compare the top `top` entries of a Monte-Carlo ranking against a
/// reference ranking and append `<N>;<sum of squared differences>`.
///
/// `N` is the key of the last Monte-Carlo row read. Both inputs are parsed
/// before the output is touched.
pub fn measure(mc_file: &Path, reference_file: &Path, top: usize, out_path: &Path) -> Result<()> {
    let mc = loader::read_ranks(mc_file, top)?;
    let reference = loader::read_ranks(reference_file, top)?;
    let Some(last) = mc.last() else {
        anyhow::bail!("nothing to compare: top must be at least 1");
    };
    log::debug!("last Monte-Carlo row: {last}");

    let mc_values: Vec<f64> = mc.iter().map(|r| r.value).collect();
    let reference_values: Vec<f64> = reference.iter().map(|r| r.value).collect();
    let sum = metrics::squared_difference(&reference_values, &mc_values);

    writer::append_measure(out_path, &last.key, sum)
}
