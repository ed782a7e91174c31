/// Precomputed percentile values for a sample.
///
/// # Examples
///
/// ```
/// use riftscore_stats::percentiles::Percentiles;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]);
///
/// assert_eq!(percentiles.get(50.0), Some(6.0));
/// assert_eq!(percentiles.get(25.0), Some(3.0));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Percentiles {
    /// `(percentile, value)` pairs in the order they were requested.
    values: Vec<(f64, f64)>,
}

impl Percentiles {
    /// Computes percentiles from values sorted in ascending order.
    ///
    /// # Arguments
    ///
    /// * `sorted_values` - Values sorted in ascending order
    /// * `percentile_points` - Percentiles to precompute, each in `0.0..=100.0`
    ///
    /// # Returns
    ///
    /// A `Percentiles` holding one value per requested point, in request
    /// order. Every value is `NaN` for an empty sample.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], percentile_points: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let values = percentile_points
            .iter()
            .map(|&p| (p, compute_percentile(sorted_values, p)))
            .collect();
        Self { values }
    }

    /// Computes percentiles from unsorted values.
    ///
    /// The values are copied and sorted internally.
    ///
    /// # Arguments
    ///
    /// * `values` - The sample
    /// * `percentile_points` - Percentiles to precompute, each in `0.0..=100.0`
    ///
    /// # Examples
    ///
    /// ```
    /// use riftscore_stats::percentiles::Percentiles;
    ///
    /// let scores = [72.0, 41.0, 88.0, 65.0, 93.0];
    /// let percentiles = Percentiles::new(&scores, &[50.0, 90.0]);
    ///
    /// assert_eq!(percentiles.get(50.0), Some(72.0));
    /// assert_eq!(percentiles.get(90.0), Some(93.0));
    /// ```
    #[must_use]
    pub fn new(values: &[f64], percentile_points: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, percentile_points)
    }

    /// Value at a precomputed percentile.
    ///
    /// # Arguments
    ///
    /// * `percentile` - One of the points passed at construction
    ///
    /// # Returns
    ///
    /// * `Some(value)` - if `percentile` was precomputed
    /// * `None` - otherwise
    #[must_use]
    pub fn get(&self, percentile: f64) -> Option<f64> {
        self.values
            .iter()
            .find(|(p, _)| (*p - percentile).abs() < f64::EPSILON)
            .map(|(_, value)| *value)
    }

    /// `(percentile, value)` pairs in request order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied()
    }
}

/// Nearest-rank percentile: the value at `floor(n * p / 100)`.
///
/// Returns `NaN` for an empty sample.
///
/// ```
/// use riftscore_stats::percentiles::compute_percentile;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(compute_percentile(&values, 50.0), 3.0);
/// assert_eq!(compute_percentile(&values, 100.0), 5.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    let idx = ((sorted_values.len() as f64 * percentile.max(0.0)) / 100.0) as usize;
    let idx = idx.min(sorted_values.len() - 1);
    sorted_values[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrequested_percentile() {
        let percentiles = Percentiles::new(&[3.0, 1.0, 2.0], &[50.0]);
        assert_eq!(percentiles.get(50.0), Some(2.0));
        assert_eq!(percentiles.get(90.0), None);
        assert_eq!(percentiles.iter().count(), 1);
    }

    #[test]
    fn test_empty_sample() {
        assert!(compute_percentile(&[], 50.0).is_nan());
    }

    #[test]
    fn test_extremes() {
        let values = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(compute_percentile(&values, 0.0), 10.0);
        assert_eq!(compute_percentile(&values, 100.0), 40.0);
        assert_eq!(compute_percentile(&values, -5.0), 10.0);
    }
}
