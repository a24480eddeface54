use std::fmt;

use thiserror::Error;

/// Number of relevant documents assumed for recall when the caller does not
/// say otherwise.
pub const DEFAULT_ALL_RELEVANT: u32 = 100;

#[derive(Debug, Error, PartialEq)]
pub enum MetricsError {
    #[error("recall needs a positive number of relevant documents")]
    NoRelevantItems,
}

// ---------------------------------------------------------------------------
// Distance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance {
    /// `sqrt(Σ y²)`
    pub euclidean: f64,
    /// `Σ y` – values are summed as-is, so this can be negative.
    pub manhattan: f64,
    pub count: usize,
}

/// Single pass over the values; an empty slice gives zeros.
pub fn distance(values: &[f64]) -> Distance {
    let (squares, sum) = values
        .iter()
        .fold((0.0, 0.0), |(sq, s), &v| (sq + v * v, s + v));
    Distance {
        euclidean: f64::sqrt(squares),
        manhattan: sum,
        count: values.len(),
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Euclidean:  {}  Manhattan:  {}",
            float_repr(self.euclidean),
            float_repr(self.manhattan)
        )?;
        write!(f, "{}", self.count)
    }
}

/// Shortest round-trip form with a signed, two-digit exponent: `5.0`,
/// `1e-07`, `1.5e+16`.
fn float_repr(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let s = format!("{v:?}");
    if let Some((mantissa, exp)) = s.split_once('e') {
        if let Ok(exp) = exp.parse::<i32>() {
            let sign = if exp < 0 { '-' } else { '+' };
            return format!("{mantissa}e{sign}{:02}", exp.abs());
        }
    }
    s
}

// ---------------------------------------------------------------------------
// Precision / recall
// ---------------------------------------------------------------------------

/// Running precision and recall after each returned document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrecisionRecall {
    /// 1-based position in the result list.
    pub file_index: Vec<f64>,
    pub precision: Vec<f64>,
    pub recall: Vec<f64>,
}

impl PrecisionRecall {
    pub fn len(&self) -> usize {
        self.file_index.len()
    }
}

/// Walk the result list in order. A relevance value greater than zero
/// counts the document as relevant.
pub fn precision_recall(
    relevance: &[f64],
    all_relevant: u32,
) -> Result<PrecisionRecall, MetricsError> {
    if all_relevant == 0 {
        return Err(MetricsError::NoRelevantItems);
    }
    let total = f64::from(all_relevant);

    let mut out = PrecisionRecall::default();
    let mut relevant = 0u32;
    for (i, &value) in relevance.iter().enumerate() {
        let retrieved = (i + 1) as f64;
        if value > 0.0 {
            relevant += 1;
        }
        out.file_index.push(retrieved);
        out.precision.push(f64::from(relevant) / retrieved);
        out.recall.push(f64::from(relevant) / total);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Ranking comparison
// ---------------------------------------------------------------------------

/// `Σ (reference[i] - estimate[i])²` over the common prefix.
pub fn squared_difference(reference: &[f64], estimate: &[f64]) -> f64 {
    reference
        .iter()
        .zip(estimate)
        .map(|(r, e)| (r - e).powi(2))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn three_four_five() {
        let d = distance(&[3.0, 4.0]);
        assert_eq!(d.euclidean, 5.0);
        assert_eq!(d.manhattan, 7.0);
        assert_eq!(d.count, 2);
        assert_eq!(d.to_string(), "Euclidean:  5.0  Manhattan:  7.0\n2");
    }

    #[test]
    fn exponents_are_signed_and_padded() {
        assert_eq!(float_repr(1e-7), "1e-07");
        assert_eq!(float_repr(1.5e-5), "1.5e-05");
        assert_eq!(float_repr(1e16), "1e+16");
        assert_eq!(float_repr(-2.5e120), "-2.5e+120");
        assert_eq!(float_repr(0.0001), "0.0001");
        assert_eq!(float_repr(123.25), "123.25");
        assert_eq!(float_repr(f64::INFINITY), "inf");

        let tiny = distance(&[1e-7]);
        assert!(tiny.to_string().ends_with("Manhattan:  1e-07\n1"));
    }

    #[test]
    fn distance_of_nothing_is_zero() {
        let d = distance(&[]);
        assert_eq!(d.euclidean, 0.0);
        assert_eq!(d.manhattan, 0.0);
        assert_eq!(d.count, 0);
    }

    #[test]
    fn manhattan_keeps_sign() {
        let d = distance(&[-2.0, 0.5]);
        assert_eq!(d.manhattan, -1.5);
        assert!(d.euclidean > 0.0);
        assert_eq!(distance(&[0.0, 0.0]).euclidean, 0.0);
    }

    #[test]
    fn precision_recall_walks_the_list() {
        let pr = precision_recall(&[1.0, 0.0, 2.0], 100).unwrap();
        assert_eq!(pr.file_index, vec![1.0, 2.0, 3.0]);
        let expected_p = [1.0, 0.5, 0.667];
        let expected_r = [0.01, 0.01, 0.02];
        for i in 0..3 {
            assert!(close(pr.precision[i], expected_p[i]), "precision[{i}]");
            assert!(close(pr.recall[i], expected_r[i]), "recall[{i}]");
        }
    }

    #[test]
    fn recall_never_decreases() {
        let relevance = [0.0, 3.0, -1.0, 1.0, 0.0, 5.0, 0.0];
        let pr = precision_recall(&relevance, DEFAULT_ALL_RELEVANT).unwrap();
        assert!(pr.recall.windows(2).all(|w| w[0] <= w[1]));
        assert!(pr.precision.iter().all(|p| (0.0..=1.0).contains(p)));
        assert!(pr.recall.iter().all(|r| (0.0..=1.0).contains(r)));
    }

    #[test]
    fn zero_relevant_documents_is_rejected() {
        assert_eq!(
            precision_recall(&[1.0], 0),
            Err(MetricsError::NoRelevantItems)
        );
    }

    #[test]
    fn squared_difference_over_prefix() {
        assert_eq!(squared_difference(&[1.0, 2.0, 3.0], &[0.0, 4.0]), 5.0);
    }
}
