//! Reductions over a simulated ensemble: means, percentile bands,
//! over/under probabilities and distributions.

use hoopcast_stats::{descriptive, histogram::Histogram, percentiles::Percentiles};
use serde::Serialize;

use crate::{SimulationResult, StatCategory};

pub const FLOOR_PERCENTILE: f64 = 10.0;
pub const MEDIAN_PERCENTILE: f64 = 50.0;
pub const CEILING_PERCENTILE: f64 = 90.0;
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// Projection of one category across the ensemble.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: StatCategory,
    /// Mean over all simulations.
    pub mean: f64,
    /// 10th percentile.
    pub floor: f64,
    /// 50th percentile.
    pub median: f64,
    /// 90th percentile.
    pub ceiling: f64,
}

impl CategorySummary {
    /// Summarizes `category` over `results`, or `None` if `results` is empty.
    #[must_use]
    pub fn from_results(results: &[SimulationResult], category: StatCategory) -> Option<Self> {
        if results.is_empty() {
            return None;
        }
        let values = results.iter().map(|r| r.get(category)).collect::<Vec<_>>();
        let percentiles = Percentiles::new(
            &values,
            &[FLOOR_PERCENTILE, MEDIAN_PERCENTILE, CEILING_PERCENTILE],
        );
        Some(Self {
            category,
            mean: descriptive::mean(&values),
            floor: percentiles.get(FLOOR_PERCENTILE)?,
            median: percentiles.get(MEDIAN_PERCENTILE)?,
            ceiling: percentiles.get(CEILING_PERCENTILE)?,
        })
    }
}

/// Per-category projections plus expected minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionSummary {
    pub simulations: usize,
    pub minutes_mean: f64,
    pub categories: Vec<CategorySummary>,
}

impl ProjectionSummary {
    /// Summarizes every category, or returns `None` for an empty ensemble.
    ///
    /// # Examples
    ///
    /// ```
    /// use hoopcast_engine::{ProjectionSummary, SimulationResult, StatCategory};
    ///
    /// let results = (0..10)
    ///     .map(|i| SimulationResult {
    ///         sim_id: i,
    ///         minutes: 30.0,
    ///         pts: i as f64,
    ///         ..SimulationResult::default()
    ///     })
    ///     .collect::<Vec<_>>();
    /// let summary = ProjectionSummary::from_results(&results).unwrap();
    /// let pts = summary.category(StatCategory::Points).unwrap();
    /// assert_eq!(pts.mean, 4.5);
    /// assert_eq!(pts.floor, 1.0);
    /// assert_eq!(pts.ceiling, 9.0);
    /// ```
    #[must_use]
    pub fn from_results(results: &[SimulationResult]) -> Option<Self> {
        let categories = StatCategory::ALL
            .into_iter()
            .map(|c| CategorySummary::from_results(results, c))
            .collect::<Option<Vec<_>>>()?;
        let minutes = results.iter().map(|r| r.minutes).collect::<Vec<_>>();
        Some(Self {
            simulations: results.len(),
            minutes_mean: descriptive::mean(&minutes),
            categories,
        })
    }

    #[must_use]
    pub fn category(&self, category: StatCategory) -> Option<&CategorySummary> {
        self.categories.iter().find(|s| s.category == category)
    }
}

/// Fraction of simulations where `category` strictly exceeds `line`.
///
/// Returns 0 for an empty ensemble.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn probability_over(results: &[SimulationResult], category: StatCategory, line: f64) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let over = results.iter().filter(|r| r.get(category) > line).count();
    over as f64 / results.len() as f64
}

/// Distribution of `category` over the ensemble.
#[must_use]
pub fn distribution(
    results: &[SimulationResult],
    category: StatCategory,
    bins: usize,
) -> Histogram {
    Histogram::new(results.iter().map(|r| r.get(category)), bins)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ensemble(n: usize) -> Vec<SimulationResult> {
        (0..n)
            .map(|i| {
                let x = f64::from(u32::try_from(i).unwrap());
                SimulationResult {
                    sim_id: i,
                    minutes: 20.0 + x % 10.0,
                    pts: x,
                    reb: 1000.0 - x,
                    ..SimulationResult::default()
                }
            })
            .collect()
    }

    #[test]
    fn test_floor_and_ceiling_are_p10_and_p90_indices() {
        let summary = ProjectionSummary::from_results(&ensemble(1000)).unwrap();
        let pts = summary.category(StatCategory::Points).unwrap();
        assert_eq!(pts.floor, 100.0);
        assert_eq!(pts.median, 500.0);
        assert_eq!(pts.ceiling, 900.0);
        assert_eq!(pts.mean, 499.5);
        // reb is the same values in reverse insertion order
        let reb = summary.category(StatCategory::Rebounds).unwrap();
        assert_eq!(reb.floor, 101.0);
        assert_eq!(reb.ceiling, 901.0);
        assert_eq!(summary.simulations, 1000);
        assert_eq!(summary.minutes_mean, 24.5);
    }

    #[test]
    fn test_non_finite_values_do_not_abort_summary() {
        let mut results = ensemble(10);
        results[3].pts = f64::NAN;
        results[7].pts = f64::INFINITY;
        let summary = ProjectionSummary::from_results(&results).unwrap();
        let pts = summary.category(StatCategory::Points).unwrap();
        assert_eq!(pts.floor, 1.0);
        assert!(pts.ceiling.is_nan());
        assert!(pts.mean.is_nan());
        assert_eq!(summary.category(StatCategory::Rebounds).unwrap().floor, 992.0);
        assert_eq!(distribution(&results, StatCategory::Points, 4).total(), 10);
    }

    #[test]
    fn test_empty_ensemble() {
        assert!(ProjectionSummary::from_results(&[]).is_none());
        assert_eq!(probability_over(&[], StatCategory::Points, 10.0), 0.0);
        assert!(distribution(&[], StatCategory::Points, 20).bins.is_empty());
    }

    #[test]
    fn test_probability_over_is_strict() {
        let results = ensemble(1000);
        assert_eq!(probability_over(&results, StatCategory::Points, 899.0), 0.1);
        assert_eq!(probability_over(&results, StatCategory::Points, 899.5), 0.1);
        assert_eq!(probability_over(&results, StatCategory::Points, -1.0), 1.0);
        assert_eq!(probability_over(&results, StatCategory::Points, 999.0), 0.0);
    }

    #[test]
    fn test_distribution_counts_everything() {
        let histogram = distribution(&ensemble(1000), StatCategory::Points, DEFAULT_HISTOGRAM_BINS);
        assert_eq!(histogram.bins.len(), DEFAULT_HISTOGRAM_BINS);
        assert_eq!(histogram.total(), 1000);
    }
}
