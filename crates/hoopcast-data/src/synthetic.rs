//! Synthetic game logs for demos and tests.
//!
//! Minutes are drawn uniformly within five minutes of a base value, with a
//! one-in-ten chance of a blowout that pins the game at 28 minutes. Counting
//! stats are Poisson draws whose means are the player's per-minute rates
//! times the minutes played.

use chrono::{Days, NaiveDate};
use hoopcast_engine::{GameLog, StatCategory};
use rand::{Rng, distr::Distribution as _};
use rand_distr::Poisson;

const MINUTES_SPREAD: f64 = 5.0;
const BLOWOUT_PROBABILITY: f64 = 0.1;
const BLOWOUT_MINUTES: f64 = 28.0;

/// Parameters of a synthetic player.
#[derive(Debug, Clone, PartialEq)]
pub struct LogGenerator {
    pub games: usize,
    pub base_minutes: f64,
    /// Expected per-minute production, indexed by [`StatCategory::as_index`].
    pub rates: [f64; StatCategory::LEN],
    pub first_game: NaiveDate,
}

impl LogGenerator {
    #[must_use]
    pub fn rate(&self, category: StatCategory) -> f64 {
        self.rates[category.as_index()]
    }
}

/// Generates `generator.games` consecutive daily game logs.
pub fn generate_logs<R>(rng: &mut R, generator: &LogGenerator) -> Vec<GameLog>
where
    R: Rng + ?Sized,
{
    (0..generator.games)
        .map(|i| {
            let mut minutes = generator.base_minutes
                + rng.random_range(-MINUTES_SPREAD..MINUTES_SPREAD);
            if rng.random_bool(BLOWOUT_PROBABILITY) {
                minutes = BLOWOUT_MINUTES;
            }
            // box scores report tenths of a minute
            let minutes = ((minutes * 10.0).round() / 10.0).max(0.0);

            let mut draw = |category: StatCategory| {
                let lambda = generator.rate(category) * minutes;
                Poisson::new(lambda).map_or(0.0, |d| d.sample(rng))
            };
            let pts = draw(StatCategory::Points);
            let reb = draw(StatCategory::Rebounds);
            let ast = draw(StatCategory::Assists);
            let stl = draw(StatCategory::Steals);
            let blk = draw(StatCategory::Blocks);
            let tov = draw(StatCategory::Turnovers);
            let fg3m = draw(StatCategory::ThreePointersMade);

            GameLog {
                game_id: format!("g-{i}"),
                date: generator
                    .first_game
                    .checked_add_days(Days::new(i as u64))
                    .unwrap_or(generator.first_game),
                minutes,
                pts,
                reb,
                ast,
                stl,
                blk,
                tov,
                fg3m,
                fga: 0.0,
                fgm: 0.0,
                fta: 0.0,
                ftm: 0.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use hoopcast_engine::profile;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn generator() -> LogGenerator {
        LogGenerator {
            games: 200,
            base_minutes: 34.0,
            rates: [0.75, 0.25, 0.2, 0.03, 0.02, 0.08, 0.07],
            first_game: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
        }
    }

    #[test]
    fn test_generates_requested_games() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        let logs = generate_logs(&mut rng, &generator());
        assert_eq!(logs.len(), 200);
        assert_eq!(logs[0].date, NaiveDate::from_ymd_opt(2024, 11, 1).unwrap());
        assert_eq!(logs[30].date, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
    }

    #[test]
    fn test_minutes_within_spread_or_blowout() {
        let mut rng = Pcg64Mcg::seed_from_u64(2);
        for log in generate_logs(&mut rng, &generator()) {
            let regular = (29.0..=39.0).contains(&log.minutes);
            assert!(regular || log.minutes == BLOWOUT_MINUTES, "{}", log.minutes);
            for category in StatCategory::ALL {
                let value = log.stat(category);
                assert!(value >= 0.0 && value.fract() == 0.0);
            }
        }
    }

    #[test]
    fn test_profile_recovers_rates() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        let gen_params = generator();
        let profile = profile::build_profile(&generate_logs(&mut rng, &gen_params));
        assert!((profile.pts_per_min.median - 0.75).abs() < 0.08);
        assert!((profile.reb_per_min.median - 0.25).abs() < 0.05);
        assert!((profile.minutes.median - 34.0).abs() < 2.0);
    }

    #[test]
    fn test_zero_rate_yields_zero_stat() {
        let mut rng = Pcg64Mcg::seed_from_u64(4);
        let gen_params = LogGenerator {
            rates: [0.0; StatCategory::LEN],
            ..generator()
        };
        for log in generate_logs(&mut rng, &gen_params) {
            assert_eq!(log.pts, 0.0);
        }
    }
}
