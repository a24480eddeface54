use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use crate::chart::{Bounds, Chart};
use crate::color::palette_rgb;

/// Pixel size of exported charts.
pub const EXPORT_SIZE: (u32, u32) = (1024, 768);

// ---------------------------------------------------------------------------
// SVG export
// ---------------------------------------------------------------------------

/// Draw `chart` into an SVG file at `path`.
pub fn save_svg(chart: &Chart, path: &Path) -> Result<()> {
    draw(chart, path).with_context(|| format!("drawing chart '{}'", chart.title))?;
    log::info!(
        "Wrote chart '{}' ({} series) to {}",
        chart.title,
        chart.series.len(),
        path.display()
    );
    Ok(())
}

fn draw(chart: &Chart, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, EXPORT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let Bounds { x, y } = chart.bounds().unwrap_or(Bounds {
        x: 0.0..1.0,
        y: 0.0..1.0,
    });

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x, y)?;

    let mut mesh = ctx.configure_mesh();
    mesh.x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str());
    if !chart.grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    let colours = palette_rgb(chart.series.len());
    for (series, &(r, g, b)) in chart.series.iter().zip(&colours) {
        let colour = RGBColor(r, g, b);
        let anno = ctx.draw_series(LineSeries::new(series.plot_points(), &colour))?;
        if chart.legend {
            anno.label(series.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], colour));
        }
    }

    if chart.legend {
        ctx.configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// File name for a chart title: lowercase, runs of anything that is not a
/// letter or digit collapsed to one `-`.
pub fn file_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("chart");
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Series;

    #[test]
    fn slugs() {
        assert_eq!(file_slug("Precision vs. recall"), "precision-vs-recall");
        assert_eq!(file_slug("  MC measures "), "mc-measures");
        assert_eq!(file_slug("!!"), "chart");
    }

    #[test]
    fn writes_svg_with_legend() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlay.svg");

        let mut chart = Chart::new("MC measures", "N", "Squared differences");
        chart.add_series(Series::new("MC1", vec![1.0, 2.0, 3.0], vec![0.3, 0.2, 0.1]));
        chart.add_series(Series::new("MC2", vec![1.0, 2.0, 3.0], vec![0.4, 0.1, 0.05]));
        save_svg(&chart.with_legend().with_grid(), &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("MC2"));
    }

    #[test]
    fn empty_chart_still_draws() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");
        save_svg(&Chart::new("empty", "x", "y"), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn nan_and_infinity_still_draw() {
        let dir = tempfile::tempdir().unwrap();

        let mut only_nan = Chart::new("nan", "x", "y");
        only_nan.add_series(Series::new("a", vec![1.0], vec![f64::NAN]));
        save_svg(&only_nan, &dir.path().join("nan.svg")).unwrap();

        let mut with_inf = Chart::new("inf", "x", "y");
        with_inf.add_series(Series::new("b", vec![1.0, 2.0], vec![1.0, f64::INFINITY]));
        save_svg(&with_inf.with_legend(), &dir.path().join("inf.svg")).unwrap();

        assert!(dir.path().join("nan.svg").exists());
        let svg = std::fs::read_to_string(dir.path().join("inf.svg")).unwrap();
        assert!(svg.contains("<svg"));
    }
}
