//! Conversion of historical game logs into a per-minute profile.
//!
//! Only logs with positive minutes contribute. Each counting stat is divided
//! by that game's minutes, and the resulting rates are summarized by their
//! median and population standard deviation. A rate that overflows (a tiny
//! but positive minutes value) is left out of its category. Minutes themselves are
//! summarized as raw values.
//!
//! A set with no usable logs produces [`PerMinuteProfile::DEGENERATE`], so
//! downstream simulation sees "no information" rather than `NaN`.

use hoopcast_stats::descriptive;

use crate::{GameLog, PerMinuteProfile, RateDistribution, StatCategory};

/// Builds the per-minute profile of `logs`.
///
/// # Examples
///
/// ```
/// use hoopcast_engine::{GameLog, profile};
///
/// let log = |minutes, pts| GameLog {
///     game_id: "g".to_owned(),
///     date: "2024-11-01".parse().unwrap(),
///     minutes,
///     pts,
///     reb: 0.0, ast: 0.0, stl: 0.0, blk: 0.0, tov: 0.0, fg3m: 0.0,
///     fga: 0.0, fgm: 0.0, fta: 0.0, ftm: 0.0,
/// };
/// let profile = profile::build_profile(&[log(30.0, 30.0), log(20.0, 10.0), log(0.0, 0.0)]);
/// assert_eq!(profile.minutes.median, 25.0);
/// assert_eq!(profile.pts_per_min.median, 0.75);
/// ```
#[must_use]
pub fn build_profile(logs: &[GameLog]) -> PerMinuteProfile {
    let valid = logs.iter().filter(|l| l.has_minutes()).collect::<Vec<_>>();
    let discarded = logs.len() - valid.len();
    if discarded > 0 {
        tracing::debug!(discarded, "skipping game logs without minutes");
    }

    if valid.is_empty() {
        tracing::debug!(total = logs.len(), "no valid game logs, using degenerate profile");
        return PerMinuteProfile::DEGENERATE;
    }

    let minutes = valid.iter().map(|l| l.minutes).collect::<Vec<_>>();
    let mut profile = PerMinuteProfile {
        minutes: summarize(&minutes),
        ..PerMinuteProfile::DEGENERATE
    };
    for category in StatCategory::ALL {
        let rates = valid
            .iter()
            .map(|l| l.stat(category) / l.minutes)
            .filter(|rate| rate.is_finite())
            .collect::<Vec<_>>();
        let overflowed = valid.len() - rates.len();
        if overflowed > 0 {
            tracing::debug!(%category, overflowed, "skipping non-finite per-minute rates");
        }
        *profile.rate_mut(category) = summarize(&rates);
    }

    tracing::debug!(
        games = valid.len(),
        minutes_median = profile.minutes.median,
        pts_per_min = profile.pts_per_min.median,
        "built per-minute profile"
    );
    profile
}

fn summarize(values: &[f64]) -> RateDistribution {
    RateDistribution::new(
        descriptive::median(values),
        descriptive::population_std_dev(values, None),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(minutes: f64, pts: f64, reb: f64) -> GameLog {
        GameLog {
            game_id: format!("g-{minutes}-{pts}"),
            date: chrono::NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            minutes,
            pts,
            reb,
            ast: 4.0,
            stl: 1.0,
            blk: 0.0,
            tov: 2.0,
            fg3m: 3.0,
            fga: 0.0,
            fgm: 0.0,
            fta: 0.0,
            ftm: 0.0,
        }
    }

    #[test]
    fn test_empty_logs_yield_zero_profile() {
        let profile = build_profile(&[]);
        assert_eq!(profile, PerMinuteProfile::DEGENERATE);
        for pair in profile.iter() {
            assert_eq!(pair, RateDistribution::new(0.0, 0.0));
        }
    }

    #[test]
    fn test_only_zero_minute_logs_yield_zero_profile() {
        let profile = build_profile(&[log(0.0, 12.0, 3.0), log(-5.0, 1.0, 1.0)]);
        assert_eq!(profile, PerMinuteProfile::DEGENERATE);
    }

    #[test]
    fn test_zero_minute_log_does_not_corrupt_profile() {
        let valid = [log(30.0, 24.0, 6.0), log(40.0, 40.0, 8.0), log(20.0, 10.0, 5.0)];
        let mut with_dnp = valid.to_vec();
        with_dnp.insert(1, log(0.0, 0.0, 0.0));

        let expected = build_profile(&valid);
        let actual = build_profile(&with_dnp);
        assert_eq!(actual, expected);
        for pair in actual.iter() {
            assert!(pair.median.is_finite() && pair.std_dev.is_finite());
        }
    }

    #[test]
    fn test_tiny_minutes_do_not_produce_infinite_rates() {
        let profile = build_profile(&[log(1e-310, 10.0, 3.0), log(30.0, 10.0, 3.0)]);
        for pair in profile.iter() {
            assert!(pair.median.is_finite() && pair.std_dev.is_finite(), "{pair:?}");
        }
        assert_eq!(profile.pts_per_min, RateDistribution::new(10.0 / 30.0, 0.0));
        assert_eq!(profile.reb_per_min, RateDistribution::new(0.1, 0.0));
        assert_eq!(profile.blk_per_min, RateDistribution::new(0.0, 0.0));
    }

    #[test]
    fn test_rates_are_per_minute() {
        let profile = build_profile(&[
            log(30.0, 24.0, 6.0),
            log(40.0, 40.0, 8.0),
            log(20.0, 10.0, 5.0),
        ]);
        // pts rates: 0.8, 1.0, 0.5
        assert_eq!(profile.pts_per_min.median, 0.8);
        // reb rates: 0.2, 0.2, 0.25
        assert_eq!(profile.reb_per_min.median, 0.2);
        assert_eq!(profile.minutes.median, 30.0);
        let expected_minutes_sd = (200.0_f64 / 3.0).sqrt();
        assert!((profile.minutes.std_dev - expected_minutes_sd).abs() < 1e-12);
    }

    #[test]
    fn test_identical_games_have_zero_spread() {
        let profile = build_profile(&[log(36.0, 18.0, 9.0), log(36.0, 18.0, 9.0)]);
        assert_eq!(profile.minutes, RateDistribution::new(36.0, 0.0));
        assert_eq!(profile.pts_per_min, RateDistribution::new(0.5, 0.0));
        assert_eq!(profile.reb_per_min, RateDistribution::new(0.25, 0.0));
    }
}
