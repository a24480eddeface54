use std::ops::Range;

use crate::data::model::Series;

// ---------------------------------------------------------------------------
// Chart – everything needed to draw one figure
// ---------------------------------------------------------------------------

/// A figure under construction. Series are added one at a time, then the
/// finished chart is handed by value to a [`crate::render::Renderer`].
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub legend: bool,
    pub grid: bool,
}

/// Data extent of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub x: Range<f64>,
    pub y: Range<f64>,
}

impl Chart {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Chart {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            series: Vec::new(),
            legend: false,
            grid: false,
        }
    }

    pub fn add_series(&mut self, series: Series) -> &mut Self {
        self.series.push(series);
        self
    }

    pub fn with_legend(mut self) -> Self {
        self.legend = true;
        self
    }

    pub fn with_grid(mut self) -> Self {
        self.grid = true;
        self
    }

    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }

    /// Smallest box containing every finite coordinate, `None` if there is
    /// none. A flat axis is widened by one unit on each side so the range is
    /// never empty.
    pub fn bounds(&self) -> Option<Bounds> {
        let x = merge(self.series.iter().filter_map(Series::x_range))?;
        let y = merge(self.series.iter().filter_map(Series::y_range))?;
        Some(Bounds {
            x: widen(x),
            y: widen(y),
        })
    }
}

fn merge(ranges: impl Iterator<Item = (f64, f64)>) -> Option<(f64, f64)> {
    ranges.reduce(|(a_min, a_max), (b_min, b_max)| (a_min.min(b_min), a_max.max(b_max)))
}

fn widen((min, max): (f64, f64)) -> Range<f64> {
    if (max - min).abs() < f64::EPSILON {
        (min - 1.0)..(max + 1.0)
    } else {
        min..max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_accumulate_in_order() {
        let mut chart = Chart::new("overlay", "N", "Squared differences");
        chart
            .add_series(Series::indexed("MC1", vec![1.0, 2.0]))
            .add_series(Series::indexed("MC2", vec![3.0]));
        let chart = chart.with_legend().with_grid();

        let labels: Vec<_> = chart.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["MC1", "MC2"]);
        assert_eq!(chart.point_count(), 3);
        assert!(chart.legend && chart.grid);
    }

    #[test]
    fn bounds_span_all_series() {
        let mut chart = Chart::new("t", "x", "y");
        chart.add_series(Series::new("a", vec![1.0, 5.0], vec![0.5, 0.25]));
        chart.add_series(Series::new("b", vec![-2.0], vec![3.0]));
        let b = chart.bounds().unwrap();
        assert_eq!(b.x, -2.0..5.0);
        assert_eq!(b.y, 0.25..3.0);
    }

    #[test]
    fn flat_or_empty_charts() {
        let mut chart = Chart::new("t", "x", "y");
        assert_eq!(chart.bounds(), None);
        chart.add_series(Series::indexed("one", vec![2.0]));
        let b = chart.bounds().unwrap();
        assert_eq!(b.x, 0.0..2.0);
        assert_eq!(b.y, 1.0..3.0);
    }

    #[test]
    fn bounds_skip_nan_and_infinity() {
        let mut chart = Chart::new("t", "x", "y");
        chart.add_series(Series::new("nan", vec![1.0], vec![f64::NAN]));
        assert_eq!(chart.bounds(), None);

        chart.add_series(Series::new(
            "inf",
            vec![1.0, 2.0],
            vec![1.0, f64::INFINITY],
        ));
        let b = chart.bounds().unwrap();
        assert_eq!(b.x, 1.0..2.0);
        assert_eq!(b.y, 0.0..2.0);
    }
}
