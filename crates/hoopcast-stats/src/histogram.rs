use std::ops::Range;

/// A histogram representation of a dataset's distribution.
///
/// The histogram spans `floor(min)..ceil(max)` of the data and divides it into
/// bins of equal width. Values at the upper bound fall into the last bin.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// The bins comprising the histogram, in ascending order.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Creates a histogram with `num_bins` equal-width bins.
    ///
    /// Returns an empty histogram when `values` is empty or `num_bins` is zero.
    /// When every value rounds into a single integer bound, the histogram spans
    /// one unit starting at that bound.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hoopcast_stats::histogram::Histogram;
    /// let values = [0.5, 1.5, 2.5, 3.5, 4.0];
    /// let histogram = Histogram::new(values, 4);
    /// assert_eq!(histogram.bins.len(), 4);
    /// assert_eq!(histogram.bins.iter().map(|b| b.count).sum::<u64>(), 5);
    /// assert_eq!(histogram.bins[3].count, 2);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn new<I>(values: I, num_bins: usize) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        if values.is_empty() || num_bins == 0 {
            return Self { bins: vec![] };
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min).floor();
        let max = values
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
            .ceil();
        let range = if max - min < f64::EPSILON {
            1.0
        } else {
            max - min
        };
        let bin_width = range / num_bins as f64;

        let mut bins = (0..num_bins)
            .map(|i| {
                // Derive each boundary from the index to avoid accumulated error.
                let start = min + range * i as f64 / num_bins as f64;
                let end = min + range * (i + 1) as f64 / num_bins as f64;
                HistogramBin {
                    range: start..end,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        for val in values {
            let idx = ((val - min) / bin_width).floor().max(0.0) as usize;
            bins[idx.min(num_bins - 1)].count += 1;
        }

        Self { bins }
    }

    /// Returns the total number of values counted.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Returns the largest bin count, or 0 for an empty histogram.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}
