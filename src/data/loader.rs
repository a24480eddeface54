use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{LabeledSeries, RankEntry, Series};

/// Number of lines read by the preview loader.
pub const PREVIEW_LINES: usize = 10;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: unreadable line", .path.display())]
    Read {
        path: PathBuf,
        line: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: expected at least {expected} fields, found {found}", .path.display())]
    TooFewFields {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{}:{line}: field {field} ('{value}') is not a number", .path.display())]
    NotANumber {
        path: PathBuf,
        line: u64,
        field: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("{}: expected at least {expected} rows, found {found}", .path.display())]
    Truncated {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

// ---------------------------------------------------------------------------
// Public readers
// ---------------------------------------------------------------------------

/// Read every `<float>;<float>` line of a file.
///
/// The series is labelled with the file stem; callers that know a better
/// legend name overwrite `label`.
pub fn read_pairs(path: &Path) -> Result<Series, LoadError> {
    read_pair_rows(path, None)
}

/// Like [`read_pairs`] but stops after `limit` physical lines. Lines past
/// the cap are never parsed.
pub fn read_pairs_capped(path: &Path, limit: usize) -> Result<Series, LoadError> {
    read_pair_rows(path, Some(limit))
}

/// The first [`PREVIEW_LINES`] pairs of a file.
pub fn read_preview(path: &Path) -> Result<Series, LoadError> {
    read_pairs_capped(path, PREVIEW_LINES)
}

/// Read `<label> <float> ...` lines. The label is kept verbatim.
pub fn read_labeled(path: &Path) -> Result<LabeledSeries, LoadError> {
    let rows = read_rows(path, ' ', None, |row| {
        row.require(2)?;
        Ok((row.text(0).to_string(), row.float(1)?))
    })?;
    let (labels, values) = rows.into_iter().unzip();
    Ok(LabeledSeries { labels, values })
}

/// Read the third field of every space-delimited row of a ranked result
/// list. A value greater than zero marks the row relevant.
///
/// Rows need at least three fields; the first two are not interpreted.
pub fn read_relevance(path: &Path) -> Result<Vec<f64>, LoadError> {
    read_rows(path, ' ', None, |row| {
        row.require(3)?;
        row.float(2)
    })
}

/// Read the first `count` rows of a `<key>;<value>` ranking file.
///
/// Fails with [`LoadError::Truncated`] if the file is shorter.
pub fn read_ranks(path: &Path, count: usize) -> Result<Vec<RankEntry>, LoadError> {
    let ranks = read_rows(path, ';', Some(count), |row| {
        row.require(2)?;
        Ok(RankEntry {
            key: row.text(0).to_string(),
            value: row.float(1)?,
        })
    })?;
    if ranks.len() < count {
        return Err(LoadError::Truncated {
            path: path.to_path_buf(),
            expected: count,
            found: ranks.len(),
        });
    }
    Ok(ranks)
}

// ---------------------------------------------------------------------------
// Row plumbing
// ---------------------------------------------------------------------------

fn read_pair_rows(path: &Path, limit: Option<usize>) -> Result<Series, LoadError> {
    let rows = read_rows(path, ';', limit, |row| {
        row.require(2)?;
        Ok((row.float(0)?, row.float(1)?))
    })?;
    let (x, y) = rows.into_iter().unzip();
    let label = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Series::new(label, x, y))
}

/// One split line, with enough context to build a precise error.
struct Row<'a> {
    path: &'a Path,
    line: u64,
    fields: Vec<&'a str>,
}

impl Row<'_> {
    fn require(&self, expected: usize) -> Result<(), LoadError> {
        if self.fields.len() < expected {
            return Err(LoadError::TooFewFields {
                path: self.path.to_path_buf(),
                line: self.line,
                expected,
                found: self.fields.len(),
            });
        }
        Ok(())
    }

    fn text(&self, idx: usize) -> &str {
        self.fields.get(idx).copied().unwrap_or("")
    }

    fn float(&self, idx: usize) -> Result<f64, LoadError> {
        let value = self.text(idx);
        value.parse::<f64>().map_err(|source| LoadError::NotANumber {
            path: self.path.to_path_buf(),
            line: self.line,
            field: idx + 1,
            value: value.to_string(),
            source,
        })
    }
}

/// Parse up to `limit` lines of a headerless delimited file.
///
/// Every physical line is one row: a blank line has no fields and fails the
/// row's field check. The file handle lives in this frame, so it is closed
/// on every return path, including a parse failure halfway through.
fn read_rows<T>(
    path: &Path,
    delimiter: char,
    limit: Option<usize>,
    mut parse: impl FnMut(&Row<'_>) -> Result<T, LoadError>,
) -> Result<Vec<T>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut rows = Vec::new();
    let lines = reader.lines().take(limit.unwrap_or(usize::MAX));
    for (idx, line) in lines.enumerate() {
        let number = idx as u64 + 1;
        let line = line.map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            line: number,
            source,
        })?;
        let fields = if line.trim().is_empty() {
            Vec::new()
        } else {
            line.split(delimiter).map(str::trim).collect()
        };
        let row = Row {
            path,
            line: number,
            fields,
        };
        rows.push(parse(&row)?);
    }

    log::debug!("read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
