/// Returns the median of unsorted values.
///
/// Returns `0.0` for an empty input. For an even number of values the result
/// is the average of the two middle values.
///
/// # Examples
///
/// ```
/// # use hoopcast_stats::descriptive::median;
/// assert_eq!(median(&[]), 0.0);
/// assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
/// ```
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    median_of_sorted(&sorted)
}

/// Returns the median of values sorted in ascending order.
///
/// Returns `0.0` for an empty input.
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
#[must_use]
pub fn median_of_sorted(sorted_values: &[f64]) -> f64 {
    assert!(
        sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
        "values must be sorted in ascending order"
    );

    let len = sorted_values.len();
    if len == 0 {
        return 0.0;
    }
    let mid = len / 2;
    if len % 2 == 1 {
        sorted_values[mid]
    } else {
        f64::midpoint(sorted_values[mid - 1], sorted_values[mid])
    }
}

/// Returns the arithmetic mean, or `0.0` for an empty input.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Returns the population standard deviation of `values`.
///
/// The sum of squared deviations is divided by the number of values, not by
/// `n - 1`. A precomputed mean can be passed to skip recomputing it.
/// Returns `0.0` for an empty input.
///
/// # Examples
///
/// ```
/// # use hoopcast_stats::descriptive::population_std_dev;
/// assert_eq!(population_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], None), 2.0);
/// assert_eq!(population_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], Some(5.0)), 2.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn population_std_dev(values: &[f64], mean_override: Option<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean_override.unwrap_or_else(|| mean(values));
    let sum_sq = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>();
    (sum_sq / values.len() as f64).sqrt()
}

/// Descriptive statistics summarizing a dataset.
///
/// This structure contains common measures of central tendency and dispersion
/// for a dataset of `f64` values.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The median value of the dataset.
    pub median: f64,
    /// The population variance of the dataset.
    pub variance: f64,
    /// The population standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// Returns `None` if the dataset is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hoopcast_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// Returns `None` if the dataset is empty.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let mean = mean(sorted_values);
        let median = median_of_sorted(sorted_values);
        let std_dev = population_std_dev(sorted_values, Some(mean));

        Some(Self {
            min,
            max,
            mean,
            median,
            variance: std_dev * std_dev,
            std_dev,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_empty_is_zero() {
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_median_odd_returns_middle_element() {
        assert_eq!(median(&[9.0, 1.0, 5.0, 7.0, 3.0]), 5.0);
    }

    #[test]
    fn test_median_even_averages_middle_pair() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 10.0]), 2.5);
    }

    #[test]
    fn test_median_with_non_finite_values() {
        assert_eq!(median(&[f64::INFINITY, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[f64::NAN, 1.0, 2.0]), 2.0);
        assert!(median(&[f64::NAN, f64::NAN, 1.0]).is_nan());
    }

    #[test]
    fn test_median_does_not_reorder_input() {
        let values = [3.0, 1.0, 2.0];
        let _ = median(&values);
        assert_eq!(values, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_std_dev_single_value_is_zero() {
        for x in [-4.5, 0.0, 1.0, 1234.5] {
            assert_eq!(population_std_dev(&[x], None), 0.0);
        }
    }

    #[test]
    fn test_std_dev_is_population_not_sample() {
        // Sample std dev of [1, 3] would be sqrt(2).
        assert!((population_std_dev(&[1.0, 3.0], None) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_empty_is_zero() {
        assert_eq!(population_std_dev(&[], None), 0.0);
        assert_eq!(population_std_dev(&[], Some(3.0)), 0.0);
    }

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
    }

    #[test]
    fn test_descriptive_stats_empty() {
        assert!(DescriptiveStats::new(std::iter::empty()).is_none());
    }

    #[test]
    fn test_descriptive_stats_even_median() {
        let stats = DescriptiveStats::new([4.0, 2.0, 8.0, 6.0]).unwrap();
        assert_eq!(stats.median, 5.0);
        assert_eq!(stats.mean, 5.0);
        assert!((stats.variance - 5.0).abs() < 1e-12);
    }
}
