//! Writes a set of demo inputs for every measure-plot command into a
//! directory (default: the current one).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Documents in the simulated link graph.
const DOCS: usize = 200;
/// Documents compared per measurement.
const TOP: usize = 30;

/// Reference ranking: a power-law over document ids, normalised to 1.
fn reference_ranks() -> Vec<f64> {
    let raw: Vec<f64> = (1..=DOCS).map(|i| 1.0 / (i as f64).powf(1.2)).collect();
    let total: f64 = raw.iter().sum();
    raw.into_iter().map(|r| r / total).collect()
}

/// A Monte-Carlo estimate after `walks` random walks: the reference plus
/// noise that shrinks with the number of walks.
fn estimate(reference: &[f64], walks: u64, rng: &mut StdRng) -> Vec<f64> {
    let scale = 1.0 / (walks as f64).sqrt();
    reference
        .iter()
        .map(|&r| (r + r * scale * rng.gen_range(-3.0..3.0)).max(0.0))
        .collect()
}

fn write_lines(path: &Path, lines: impl IntoIterator<Item = String>) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn main() -> std::io::Result<()> {
    let dir = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| ".".into());
    std::fs::create_dir_all(&dir)?;
    let mut rng = StdRng::seed_from_u64(42);

    let reference = reference_ranks();
    write_lines(
        &dir.join("pagerank"),
        reference.iter().enumerate().map(|(i, r)| format!("Doc{i};{r}")),
    )?;

    // One measure file per Monte-Carlo variant: `<walks>;<squared difference>`.
    for variant in [1u64, 2, 4, 5] {
        let lines = (1..=20).map(|step| {
            let walks = step * 5_000 * variant;
            let mc = estimate(&reference, walks, &mut rng);
            let diff: f64 = reference[..TOP]
                .iter()
                .zip(&mc[..TOP])
                .map(|(r, e)| (r - e).powi(2))
                .sum();
            format!("{walks};{diff}")
        });
        let lines: Vec<String> = lines.collect();
        write_lines(&dir.join(format!("MC{variant}-measure")), lines)?;
    }

    // The last Monte-Carlo ranking, for `measure --mc MC5 --reference pagerank`.
    let walks = 100_000;
    let mc = estimate(&reference, walks, &mut rng);
    write_lines(&dir.join("MC5"), mc.iter().map(|r| format!("{walks};{r}")))?;

    // Token weights for `distance`.
    write_lines(
        &dir.join("M-Token.txt"),
        (0..50).map(|i| format!("token{i} {:.4}", rng.gen_range(0.0..1.0))),
    )?;

    // Ranked search results for `pr`: `<rank> <document> <relevance>`.
    write_lines(
        &dir.join("ranked.txt"),
        (0..60).map(|i| {
            let p_relevant = 0.9 - i as f64 / 80.0;
            let relevance = if rng.gen_bool(p_relevant.clamp(0.05, 0.95)) {
                rng.gen_range(1..=3)
            } else {
                0
            };
            format!("{i} doc{} {relevance}", rng.gen_range(0..DOCS))
        }),
    )?;

    println!("Wrote sample inputs to {}", dir.display());
    Ok(())
}
