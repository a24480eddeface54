mod app;
mod chart;
mod cli;
mod color;
mod config;
mod data;
mod export;
mod render;
mod state;
mod tasks;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    env_logger::init();

    let job = Cli::parse().into_job()?;
    log::debug!("Running {job:?}");
    tasks::run(&job)
}
