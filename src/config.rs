use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::metrics::DEFAULT_ALL_RELEVANT;

/// Axis labels of the measurement overlay.
pub const DEFAULT_X_LABEL: &str = "N";
pub const DEFAULT_Y_LABEL: &str = "Squared differences";

/// Number of top-ranked documents compared by the measure task.
pub const DEFAULT_TOP: usize = 30;

/// Measure files plotted when nothing else is asked for.
const DEFAULT_MEASURES: [(&str, &str); 4] = [
    ("MC1-measure", "MC1"),
    ("MC2-measure", "MC2"),
    ("MC4-measure", "MC4"),
    ("MC5-measure", "MC5"),
];

// ---------------------------------------------------------------------------
// Job – one run of the tool
// ---------------------------------------------------------------------------

/// Everything a run needs: what to compute and where charts go.
///
/// ```json
/// {
///   "output": { "mode": "save", "dir": "plots" },
///   "task": {
///     "task": "overlay",
///     "series": [ { "file": "MC1-measure", "label": "MC1" } ]
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub output: OutputMode,
    pub task: Task,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum OutputMode {
    /// One window per chart, each blocking until closed.
    #[default]
    Display,
    /// One SVG file per chart in `dir`.
    Save { dir: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "task", rename_all = "snake_case")]
pub enum Task {
    /// Overlay several measure files on one chart.
    Overlay {
        series: Vec<SeriesSpec>,
        /// Only the first lines of each file.
        #[serde(default)]
        preview: bool,
        #[serde(default = "default_x_label")]
        x_label: String,
        #[serde(default = "default_y_label")]
        y_label: String,
    },
    /// Print Euclidean and Manhattan totals of a labeled value list.
    Distance { file: PathBuf },
    /// Precision, recall and PR curve of a ranked result list.
    PrecisionRecall {
        file: PathBuf,
        #[serde(default = "default_all_relevant")]
        all_relevant: u32,
    },
    /// Compare a Monte-Carlo ranking with a reference and append the result.
    Measure {
        mc_file: PathBuf,
        reference_file: PathBuf,
        #[serde(default = "default_top")]
        top: usize,
        #[serde(default)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub file: PathBuf,
    pub label: String,
}

impl SeriesSpec {
    /// Parse `FILE` or `FILE=LABEL`. Without a label the file stem is used.
    pub fn parse(arg: &str) -> Result<Self, String> {
        let (file, label) = match arg.split_once('=') {
            Some((file, label)) => (file, label.to_string()),
            None => {
                let stem = Path::new(arg)
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                (arg, stem)
            }
        };
        if file.is_empty() {
            return Err(format!("'{arg}': missing file name"));
        }
        Ok(SeriesSpec {
            file: PathBuf::from(file),
            label,
        })
    }
}

fn default_x_label() -> String {
    DEFAULT_X_LABEL.to_string()
}

fn default_y_label() -> String {
    DEFAULT_Y_LABEL.to_string()
}

fn default_all_relevant() -> u32 {
    DEFAULT_ALL_RELEVANT
}

fn default_top() -> usize {
    DEFAULT_TOP
}

/// The four Monte-Carlo measure files, labelled by run.
pub fn default_measures() -> Vec<SeriesSpec> {
    DEFAULT_MEASURES
        .iter()
        .map(|(file, label)| SeriesSpec {
            file: PathBuf::from(file),
            label: label.to_string(),
        })
        .collect()
}

impl Task {
    /// The four Monte-Carlo measure files on one chart.
    pub fn default_overlay() -> Self {
        Task::Overlay {
            series: default_measures(),
            preview: false,
            x_label: default_x_label(),
            y_label: default_y_label(),
        }
    }
}

impl Job {
    /// Load a job description from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading job file {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing job file {}", path.display()))
    }
}

impl Default for Job {
    fn default() -> Self {
        Job {
            output: OutputMode::Display,
            task: Task::default_overlay(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_json_fills_defaults() {
        let job: Job = serde_json::from_str(
            r#"{ "task": { "task": "precision_recall", "file": "ranked.txt" } }"#,
        )
        .unwrap();
        assert_eq!(job.output, OutputMode::Display);
        assert_eq!(
            job.task,
            Task::PrecisionRecall {
                file: PathBuf::from("ranked.txt"),
                all_relevant: 100,
            }
        );
    }

    #[test]
    fn overlay_and_save_mode() {
        let job: Job = serde_json::from_str(
            r#"{
                "output": { "mode": "save", "dir": "plots" },
                "task": {
                    "task": "overlay",
                    "preview": true,
                    "series": [ { "file": "MC1-measure", "label": "MC1" } ]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(
            job.output,
            OutputMode::Save {
                dir: PathBuf::from("plots")
            }
        );
        match job.task {
            Task::Overlay {
                series,
                preview,
                x_label,
                y_label,
            } => {
                assert_eq!(series.len(), 1);
                assert!(preview);
                assert_eq!(x_label, "N");
                assert_eq!(y_label, "Squared differences");
            }
            other => panic!("unexpected task {other:?}"),
        }
    }

    #[test]
    fn load_reports_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.json");
        std::fs::write(&path, r#"{ "task": { "task": "nope" } }"#).unwrap();
        let err = Job::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("job.json"));
        assert!(Job::load(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn default_job_plots_four_measures() {
        let Task::Overlay { series, .. } = Job::default().task else {
            panic!("default job is an overlay");
        };
        let labels: Vec<_> = series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["MC1", "MC2", "MC4", "MC5"]);
        assert_eq!(series[3].file, PathBuf::from("MC5-measure"));
    }

    #[test]
    fn series_spec_from_argument() {
        let spec = SeriesSpec::parse("runs/MC2-measure=MC2").unwrap();
        assert_eq!(spec.file, PathBuf::from("runs/MC2-measure"));
        assert_eq!(spec.label, "MC2");

        assert_eq!(SeriesSpec::parse("data/MC4.txt").unwrap().label, "MC4");
        assert!(SeriesSpec::parse("=label").is_err());
    }
}
