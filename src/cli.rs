use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use crate::config::{self, Job, OutputMode, SeriesSpec, Task};
use crate::data::metrics::DEFAULT_ALL_RELEVANT;

/// Plot iteration measurements and ranking quality curves.
///
/// Without a command the four Monte-Carlo measure files in the current
/// directory are overlaid on one chart.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Write every chart as SVG into this directory instead of opening a window
    #[arg(long, global = true, value_name = "DIR")]
    pub save: Option<PathBuf>,

    /// Read the job from a JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Overlay `<iteration>;<value>` files on one chart
    Overlay {
        /// `FILE` or `FILE=LABEL`; repeat for each series
        #[arg(long = "series", value_name = "FILE[=LABEL]", value_parser = SeriesSpec::parse)]
        series: Vec<SeriesSpec>,

        /// Only plot the first lines of each file
        #[arg(long)]
        preview: bool,

        #[arg(long, default_value = config::DEFAULT_X_LABEL)]
        x_label: String,

        #[arg(long, default_value = config::DEFAULT_Y_LABEL)]
        y_label: String,
    },

    /// Print Euclidean and Manhattan totals of a `<label> <value>` file
    Distance { file: PathBuf },

    /// Plot precision, recall and the PR curve of a ranked result list
    Pr {
        file: PathBuf,

        /// Number of relevant documents in the collection
        #[arg(long, default_value_t = DEFAULT_ALL_RELEVANT)]
        all_relevant: u32,
    },

    /// Append the squared difference between two rankings to a measure file
    Measure {
        /// Monte-Carlo ranking, `<N>;<rank>` per line
        #[arg(long)]
        mc: PathBuf,

        /// Reference ranking, `<name>;<rank>` per line
        #[arg(long)]
        reference: PathBuf,

        /// Number of top documents to compare
        #[arg(long, default_value_t = config::DEFAULT_TOP)]
        top: usize,

        /// Output file [default: <MC>-measure]
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

impl Cli {
    /// Resolve the arguments into a job. `--save` always wins over the
    /// output mode of a job file.
    pub fn into_job(self) -> Result<Job> {
        let mut job = match (self.config, self.command) {
            (Some(_), Some(_)) => bail!("--config cannot be combined with a command"),
            (Some(path), None) => Job::load(&path)?,
            (None, Some(command)) => Job {
                output: OutputMode::Display,
                task: command.into_task(),
            },
            (None, None) => Job::default(),
        };
        if let Some(dir) = self.save {
            job.output = OutputMode::Save { dir };
        }
        Ok(job)
    }
}

impl Command {
    fn into_task(self) -> Task {
        match self {
            Command::Overlay {
                series,
                preview,
                x_label,
                y_label,
            } => Task::Overlay {
                series: if series.is_empty() {
                    config::default_measures()
                } else {
                    series
                },
                preview,
                x_label,
                y_label,
            },
            Command::Distance { file } => Task::Distance { file },
            Command::Pr { file, all_relevant } => Task::PrecisionRecall { file, all_relevant },
            Command::Measure {
                mc,
                reference,
                top,
                out,
            } => Task::Measure {
                mc_file: mc,
                reference_file: reference,
                top,
                output: out,
            },
        }
    }
}
