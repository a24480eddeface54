use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Default output path for a ranking file: `<file>-measure`.
pub fn measure_path(ranking: &Path) -> PathBuf {
    let mut name = ranking.as_os_str().to_owned();
    name.push("-measure");
    PathBuf::from(name)
}

/// Append one `<n>;<value>` line to a measure file, creating it if needed.
pub fn append_measure(path: &Path, n: &str, value: f64) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening {} for append", path.display()))?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(file);
    writer
        .write_record([n, value.to_string().as_str()])
        .with_context(|| format!("writing {}", path.display()))?;
    writer.flush()?;

    log::info!("appended {n};{value} to {}", path.display());
    Ok(())
}
