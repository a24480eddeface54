use std::fmt;

// ---------------------------------------------------------------------------
// Series – one plottable line
// ---------------------------------------------------------------------------

/// An ordered sequence of `(x, y)` points read from one file.
///
/// `x` and `y` always have the same length; `x[i]` pairs with `y[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend name.
    pub label: String,
    /// Iteration axis (x).
    pub x: Vec<f64>,
    /// Measurement axis (y) – same length as `x`.
    pub y: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Series {
            label: label.into(),
            x,
            y,
        }
    }

    /// Build a series whose x axis is the 1-based position of each value.
    pub fn indexed(label: impl Into<String>, y: Vec<f64>) -> Self {
        let x = (1..=y.len()).map(|i| i as f64).collect();
        Series::new(label, x, y)
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Points that can be drawn: pairs with a NaN or infinite coordinate
    /// are left out.
    pub fn plot_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x
            .iter()
            .copied()
            .zip(self.y.iter().copied())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
    }

    /// Smallest and largest finite y value, `None` if there is none.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        min_max(&self.y)
    }

    pub fn x_range(&self) -> Option<(f64, f64)> {
        min_max(&self.x)
    }
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut finite = values.iter().copied().filter(|v| v.is_finite());
    let first = finite.next()?;
    Some(finite.fold((first, first), |(min, max), v| (min.min(v), max.max(v))))
}

// ---------------------------------------------------------------------------
// LabeledSeries – text labels with one value each
// ---------------------------------------------------------------------------

/// Values keyed by an opaque text label (the first field of a
/// space-delimited row). Labels are never parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabeledSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

// ---------------------------------------------------------------------------
// RankEntry – one row of a ranking file
// ---------------------------------------------------------------------------

/// `<key>;<value>` row. The key is either a document name or the number of
/// walks that produced the ranking, depending on the file.
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry {
    pub key: String,
    pub value: f64,
}

impl fmt::Display for RankEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.key, self.value)
    }
}
