//! # Merge
//!
//! Trait and implementations for collapsing the coordinates of a cluster
//! into one representative position.
//!
//! Input order is significant for floating-point reproducibility: the
//! engine always passes the anchor first, then members in input order.

/// Trait for merging cluster coordinates into one position
pub trait Merge: Send + Sync {
    /// Merge `[northing, easting, elevation]` triples
    ///
    /// The slice must not be empty.
    fn merge(&self, coords: &[[f64; 3]]) -> [f64; 3];

    /// Name of this merge function (for logging/config)
    fn name(&self) -> &'static str;
}

/// Arithmetic mean per axis, no weighting
#[derive(Clone, Copy, Debug, Default)]
pub struct Mean;

impl Merge for Mean {
    fn merge(&self, coords: &[[f64; 3]]) -> [f64; 3] {
        assert!(!coords.is_empty(), "Cannot merge empty cluster");

        let mut sum = [0.0f64; 3];
        for c in coords {
            for (s, v) in sum.iter_mut().zip(c) {
                *s += v;
            }
        }

        let n = coords.len() as f64;
        sum.map(|s| s / n)
    }

    fn name(&self) -> &'static str {
        "mean"
    }
}

/// Per-axis median
///
/// Less sensitive to a single blundered shot than [`Mean`]. With an even
/// count the two middle values are averaged.
#[derive(Clone, Copy, Debug, Default)]
pub struct Median;

impl Merge for Median {
    fn merge(&self, coords: &[[f64; 3]]) -> [f64; 3] {
        assert!(!coords.is_empty(), "Cannot merge empty cluster");

        let mut out = [0.0f64; 3];
        let mut axis: Vec<f64> = Vec::with_capacity(coords.len());
        for (i, o) in out.iter_mut().enumerate() {
            axis.clear();
            axis.extend(coords.iter().map(|c| c[i]));
            axis.sort_by(|a, b| a.total_cmp(b));

            let mid = axis.len() / 2;
            *o = if axis.len() % 2 == 0 {
                (axis[mid - 1] + axis[mid]) / 2.0
            } else {
                axis[mid]
            };
        }
        out
    }

    fn name(&self) -> &'static str {
        "median"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_single() {
        assert_eq!(Mean.merge(&[[1.0, 2.0, 3.0]]), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_mean_three() {
        let merged = Mean.merge(&[[0.0, 0.0, 0.0], [0.1, 0.0, 0.0], [0.05, 0.09, 0.03]]);
        assert_relative_eq!(merged[0], 0.05, epsilon = 1e-12);
        assert_relative_eq!(merged[1], 0.03, epsilon = 1e-12);
        assert_relative_eq!(merged[2], 0.01, epsilon = 1e-12);
    }

    #[test]
    fn test_median_odd() {
        let merged = Median.merge(&[[1.0, 9.0, 0.0], [100.0, 8.0, 0.0], [2.0, 7.0, 0.0]]);
        assert_eq!(merged, [2.0, 8.0, 0.0]);
    }

    #[test]
    fn test_median_even() {
        let merged = Median.merge(&[[1.0, 0.0, 0.0], [3.0, 0.0, 0.0]]);
        assert_eq!(merged, [2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_merge_names() {
        assert_eq!(Mean.name(), "mean");
        assert_eq!(Median.name(), "median");
    }

    #[test]
    #[should_panic(expected = "Cannot merge empty")]
    fn test_merge_empty_panics() {
        Mean.merge(&[]);
    }
}
